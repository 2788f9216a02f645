//! Detokenizer for TeX tokens
//!
//! Converts a token stream back into source text. Used to hand raw argument
//! text to parse methods (e.g. `\text{...}` or annotation payloads).
use super::tokens::Token;

/// Trait for converting a token to its source representation
pub trait ToTexString {
    fn to_tex_string(&self) -> String;
}

impl ToTexString for Token {
    fn to_tex_string(&self) -> String {
        match self {
            Token::ControlWord(name) | Token::ControlSymbol(name) => format!("\\{name}"),
            Token::BeginGroup => "{".to_string(),
            Token::EndGroup => "}".to_string(),
            Token::Superscript => "^".to_string(),
            Token::Subscript => "_".to_string(),
            Token::AlignmentTab => "&".to_string(),
            Token::Parameter(n) => format!("#{n}"),
            // Runs of whitespace collapse to a single space, as TeX reads them
            Token::Whitespace => " ".to_string(),
            Token::Char(c) => c.to_string(),
        }
    }
}

/// Detokenize a stream of tokens into a string
///
/// A control word directly followed by a letter gets a separating space so the
/// output tokenizes back to the same stream.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    let mut previous: Option<&Token> = None;

    for token in tokens {
        if let (Some(Token::ControlWord(_)), Token::Char(c)) = (previous, token) {
            if c.is_ascii_alphabetic() {
                result.push(' ');
            }
        }
        result.push_str(&token.to_tex_string());
        previous = Some(token);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tex::lexing::tokenize;

    fn round_trip(source: &str) -> String {
        let tokens: Vec<Token> = tokenize(source).into_iter().map(|(t, _)| t).collect();
        detokenize(&tokens)
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        assert_eq!(round_trip(r"\frac{a}{b}"), r"\frac{a}{b}");
        assert_eq!(round_trip(r"x_{i}^{2}"), r"x_{i}^{2}");
        assert_eq!(round_trip(r"a  +\,b"), r"a +\,b");
    }

    #[test]
    fn test_control_word_separation() {
        let tokens = vec![Token::ControlWord("alpha".to_string()), Token::Char('x')];
        assert_eq!(detokenize(&tokens), r"\alpha x");
    }
}
