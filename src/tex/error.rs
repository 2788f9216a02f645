//! Error types for symbol resolution and AST construction
//!
//! Two outcomes must stay distinguishable end to end: a map that does not
//! handle a symbol returns an absent result (`Ok(None)`), while a map that
//! recognizes a symbol but cannot process the surrounding input returns a
//! [`ParseError`]. Neither the configuration chains nor the registry convert
//! one into the other.

use crate::tex::ast::NodeKind;
use thiserror::Error;

/// Structural failure raised by a symbol map that recognized its symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `{` group was opened and the input ended before its `}`
    #[error("missing close brace for group opened at byte {offset}")]
    UnterminatedGroup { offset: usize },

    /// A command needed an argument and the input was exhausted
    #[error("missing argument for \\{command}")]
    MissingArgument { command: String },

    /// A token appeared where it cannot be used, e.g. a stray `}`
    #[error("unexpected {found} at byte {offset}")]
    UnexpectedToken { found: String, offset: usize },

    /// A macro body refers to `#n` beyond the macro's declared arity
    #[error("illegal parameter #{index} in definition of \\{command} (arity {arity})")]
    UndefinedParameter {
        command: String,
        index: u8,
        arity: usize,
    },

    /// A command needed an operand on the node stack and found none
    #[error("\\{command} has nothing to apply to")]
    MissingOperand { command: String },

    #[error(transparent)]
    Node(#[from] NodeError),
}

/// Errors raised while mutating an AST node
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("<{kind}> holds character data and cannot take child nodes")]
    NotAContainer { kind: NodeKind },

    #[error("<{kind}> is a container and cannot hold character data")]
    NotCharacterData { kind: NodeKind },
}

/// Errors raised while loading a declarative registry configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used by symbol maps and everything that delegates to them
pub type ParseResult = Result<Option<crate::tex::symbols::Parsed>, ParseError>;
