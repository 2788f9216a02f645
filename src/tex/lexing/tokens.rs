//! Token definitions for TeX math input
//!
//! Tokens are produced by the logos derive. Category codes are fixed to the
//! plain TeX defaults: `\` escapes, `{`/`}` group, `^`/`_` script, `&` aligns,
//! `#` introduces a macro parameter and `%` starts a comment.
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"%[^\n]*")]
pub enum Token {
    /// `\alpha`, stored without the backslash
    #[regex(r"\\[a-zA-Z]+", |lex| lex.slice()[1..].to_string())]
    ControlWord(String),

    /// `\,` or `\{`, stored without the backslash
    #[regex(r"\\[^a-zA-Z]", |lex| lex.slice()[1..].to_string())]
    ControlSymbol(String),

    #[token("{")]
    BeginGroup,

    #[token("}")]
    EndGroup,

    #[token("^")]
    Superscript,

    #[token("_")]
    Subscript,

    #[token("&")]
    AlignmentTab,

    /// `#1` .. `#9` inside macro bodies
    #[regex(r"#[1-9]", |lex| lex.slice()[1..].parse::<u8>().ok())]
    Parameter(u8),

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Any other single character
    #[regex(r"[^\\{}^_&#% \t\r\n]", |lex| lex.slice().chars().next())]
    Char(char),
}

impl Token {
    /// The symbol a map is asked about for this token, if any
    ///
    /// Control sequences resolve by name, characters by themselves. Grouping,
    /// parameters and whitespace are structure, not symbols.
    pub fn symbol(&self) -> Option<String> {
        match self {
            Token::ControlWord(name) | Token::ControlSymbol(name) => Some(name.clone()),
            Token::Char(c) => Some(c.to_string()),
            Token::Superscript => Some("^".to_string()),
            Token::Subscript => Some("_".to_string()),
            Token::AlignmentTab => Some("&".to_string()),
            Token::BeginGroup | Token::EndGroup | Token::Parameter(_) | Token::Whitespace => None,
        }
    }

    pub fn is_control_sequence(&self) -> bool {
        matches!(self, Token::ControlWord(_) | Token::ControlSymbol(_))
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Short human description used in error messages
    pub fn describe(&self) -> String {
        match self {
            Token::ControlWord(name) | Token::ControlSymbol(name) => format!("\\{name}"),
            Token::BeginGroup => "'{'".to_string(),
            Token::EndGroup => "'}'".to_string(),
            Token::Superscript => "'^'".to_string(),
            Token::Subscript => "'_'".to_string(),
            Token::AlignmentTab => "'&'".to_string(),
            Token::Parameter(n) => format!("#{n}"),
            Token::Whitespace => "whitespace".to_string(),
            Token::Char(c) => format!("'{c}'"),
        }
    }
}
