//! Lexer
//!
//! Tokenization of TeX math input through the logos lexer library.
//!
//! This is the source that creates the initial token stream from a string. The
//! expansion loop that walks the stream and asks the registry about each symbol
//! lives outside this crate; symbol maps only see the remaining tokens through
//! [`ParseInput`](crate::tex::symbols::ParseInput).

pub mod detokenizer;
pub mod tokens;

pub use detokenizer::{detokenize, ToTexString};
pub use tokens::Token;

use logos::Logos;

/// Tokenize source text with byte ranges
///
/// Input that matches no token (a trailing lone `\`, a `#` not followed by a
/// digit) is dropped.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_with_spans() {
        let tokens = tokenize(r"\sqrt{x}");
        assert_eq!(
            tokens,
            vec![
                (Token::ControlWord("sqrt".to_string()), 0..5),
                (Token::BeginGroup, 5..6),
                (Token::Char('x'), 6..7),
                (Token::EndGroup, 7..8),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_invalid_input_is_dropped() {
        let tokens = tokenize("a#b");
        let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
        assert_eq!(kinds, vec![Token::Char('a'), Token::Char('b')]);
    }
}
