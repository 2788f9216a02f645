//! Parse input handed to symbol maps
//!
//! A [`ParseInput`] bundles the symbol being resolved with the context a map
//! needs to act on it: the tokens that follow, the operand stack of nodes built
//! so far, and the current mode. Maps may consume further tokens (arguments)
//! or push tokens back (macro expansion).

use crate::tex::ast::Node;
use crate::tex::error::ParseError;
use crate::tex::lexing::{detokenize, tokenize, Token};
use std::collections::VecDeque;
use std::ops::Range;

/// Outcome of a map that handled its symbol
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// A new fragment for the caller to insert
    Node(Node),
    /// The input or the stack was updated; nothing new to insert
    Handled,
}

impl Parsed {
    pub fn into_node(self) -> Option<Node> {
        match self {
            Parsed::Node(node) => Some(node),
            Parsed::Handled => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Math,
    Text,
}

#[derive(Debug, Clone, Default)]
pub struct ParseInput {
    symbol: String,
    tokens: VecDeque<(Token, Range<usize>)>,
    stack: Vec<Node>,
    mode: Mode,
    offset: usize,
}

impl ParseInput {
    /// Input for a bare symbol with nothing following it
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Input for `symbol` followed by the tokens of `rest`
    pub fn with_source(symbol: impl Into<String>, rest: &str) -> Self {
        Self::with_tokens(symbol, tokenize(rest))
    }

    pub fn with_tokens(symbol: impl Into<String>, tokens: Vec<(Token, Range<usize>)>) -> Self {
        Self {
            symbol: symbol.into(),
            tokens: tokens.into(),
            ..Self::default()
        }
    }

    /// Take the leading symbol of `source` as the symbol and keep the rest as input
    ///
    /// Returns `None` when the source does not start (after whitespace) with a
    /// token that names a symbol.
    pub fn from_source(source: &str) -> Option<Self> {
        let mut tokens: VecDeque<_> = tokenize(source).into();
        while tokens.front().is_some_and(|(t, _)| t.is_whitespace()) {
            tokens.pop_front();
        }
        let (first, span) = tokens.pop_front()?;
        let symbol = first.symbol()?;
        Some(Self {
            symbol,
            tokens,
            offset: span.end,
            ..Self::default()
        })
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_stack(mut self, stack: Vec<Node>) -> Self {
        self.stack = stack;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn stack(&self) -> &[Node] {
        &self.stack
    }

    pub fn push_node(&mut self, node: Node) {
        self.stack.push(node);
    }

    pub fn pop_node(&mut self) -> Option<Node> {
        self.stack.pop()
    }

    pub fn top_node_mut(&mut self) -> Option<&mut Node> {
        self.stack.last_mut()
    }

    pub fn into_stack(self) -> Vec<Node> {
        self.stack
    }

    /// Byte offset just past the last consumed token
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The remaining tokens, without their spans
    pub fn remaining_tokens(&self) -> Vec<Token> {
        self.tokens.iter().map(|(t, _)| t.clone()).collect()
    }

    pub fn peek_token(&self) -> Option<&Token> {
        self.tokens.front().map(|(t, _)| t)
    }

    pub fn next_token(&mut self) -> Option<(Token, Range<usize>)> {
        let next = self.tokens.pop_front()?;
        self.offset = next.1.end;
        Some(next)
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek_token().is_some_and(Token::is_whitespace) {
            self.next_token();
        }
    }

    /// Push tokens back so they are read next, in order
    ///
    /// Pushed tokens have no source of their own and carry an empty span at
    /// the current offset.
    pub fn push_front(&mut self, tokens: Vec<Token>) {
        let at = self.offset..self.offset;
        for token in tokens.into_iter().rev() {
            self.tokens.push_front((token, at.clone()));
        }
    }

    /// Read one argument for `command`: a balanced `{...}` group (braces
    /// stripped) or a single token
    pub fn read_argument(&mut self, command: &str) -> Result<Vec<Token>, ParseError> {
        self.skip_whitespace();
        let (token, span) = self.next_token().ok_or_else(|| ParseError::MissingArgument {
            command: command.to_string(),
        })?;

        match token {
            Token::BeginGroup => self.read_group_body(span.start),
            Token::EndGroup => Err(ParseError::UnexpectedToken {
                found: token.describe(),
                offset: span.start,
            }),
            other => Ok(vec![other]),
        }
    }

    /// Read an argument and return it as source text
    pub fn read_argument_text(&mut self, command: &str) -> Result<String, ParseError> {
        let tokens = self.read_argument(command)?;
        Ok(detokenize(&tokens).trim().to_string())
    }

    fn read_group_body(&mut self, opened_at: usize) -> Result<Vec<Token>, ParseError> {
        let mut depth = 1usize;
        let mut body = Vec::new();

        while let Some((token, _)) = self.next_token() {
            match token {
                Token::BeginGroup => depth += 1,
                Token::EndGroup => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(body);
                    }
                }
                _ => {}
            }
            body.push(token);
        }

        Err(ParseError::UnterminatedGroup { offset: opened_at })
    }
}
