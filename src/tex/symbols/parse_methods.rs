//! Standard parse methods
//!
//! Generic methods that symbol-table providers attach to their maps. They only
//! build nodes and move tokens; which symbols exist is up to the tables.
//!
//! Character methods decline (`Ok(None)`) in text mode, except [`text_char`],
//! so a later map in the chain gets a chance at the symbol.

use super::category::{CharacterAction, DelimiterAction, EnvironmentAction, MacroAction};
use super::input::{Mode, ParseInput, Parsed};
use crate::tex::ast::{Node, NodeKind, PropertyBag};
use crate::tex::error::{ParseError, ParseResult};
use crate::tex::lexing::{tokenize, Token};

const TEX_ENCODING: &str = "application/x-tex";

fn token_node(kind: NodeKind, text: &str, attributes: &PropertyBag) -> ParseResult {
    let mut node = Node::token(kind, text)?;
    for (name, value) in attributes.iter() {
        node.set_property(name, value.clone());
    }
    Ok(Some(Parsed::Node(node)))
}

fn math_only(
    input: &ParseInput,
    kind: NodeKind,
    action: &CharacterAction,
) -> ParseResult {
    if input.mode() == Mode::Text {
        return Ok(None);
    }
    token_node(kind, &action.text, &action.attributes)
}

/// Identifier (`mi`)
pub fn variable(input: &mut ParseInput, action: &CharacterAction) -> ParseResult {
    math_only(input, NodeKind::Mi, action)
}

/// Number (`mn`)
pub fn digit(input: &mut ParseInput, action: &CharacterAction) -> ParseResult {
    math_only(input, NodeKind::Mn, action)
}

/// Operator (`mo`)
pub fn operator(input: &mut ParseInput, action: &CharacterAction) -> ParseResult {
    math_only(input, NodeKind::Mo, action)
}

/// Text character (`mtext`), in either mode
pub fn text_char(_input: &mut ParseInput, action: &CharacterAction) -> ParseResult {
    token_node(NodeKind::Mtext, &action.text, &action.attributes)
}

/// Fence operator (`mo` with `fence`)
pub fn delimiter(_input: &mut ParseInput, action: &DelimiterAction) -> ParseResult {
    let mut attributes = PropertyBag::new();
    attributes.set("fence", true);
    attributes.overlay(&action.attributes);
    token_node(NodeKind::Mo, &action.text, &attributes)
}

/// Textual macro expansion
///
/// Reads `arity` arguments, substitutes them for `#1`..`#n` in the
/// replacement, and pushes the result back onto the input.
pub fn expand(input: &mut ParseInput, replacement: &str, arity: usize) -> ParseResult {
    let command = input.symbol().to_string();
    let mut arguments = Vec::with_capacity(arity);
    for _ in 0..arity {
        arguments.push(input.read_argument(&command)?);
    }

    let mut expansion = Vec::new();
    for (token, _) in tokenize(replacement) {
        match token {
            Token::Parameter(index) => {
                let argument = arguments.get(usize::from(index) - 1).ok_or(
                    ParseError::UndefinedParameter {
                        command: command.clone(),
                        index,
                        arity,
                    },
                )?;
                expansion.extend(argument.iter().cloned());
            }
            other => expansion.push(other),
        }
    }

    input.push_front(expansion);
    Ok(Some(Parsed::Handled))
}

/// `\text{...}`: the argument's source text as one `mtext`
///
/// The first static argument, when present, sets `mathvariant`.
pub fn text(input: &mut ParseInput, action: &MacroAction) -> ParseResult {
    let command = input.symbol().to_string();
    let content = input.read_argument_text(&command)?;
    let mut node = Node::token(NodeKind::Mtext, content)?;
    if let Some(variant) = action.arg(0) {
        node.set_property("mathvariant", variant);
    }
    Ok(Some(Parsed::Node(node)))
}

/// Fixed-width space (`mspace`); the first static argument is the width
pub fn space(_input: &mut ParseInput, action: &MacroAction) -> ParseResult {
    let mut node = Node::new(NodeKind::Mspace);
    if let Some(width) = action.arg(0) {
        node.set_property("width", width);
    }
    Ok(Some(Parsed::Node(node)))
}

/// `\annotation{encoding}{payload}`: an annotation leaf holding raw characters
pub fn annotation(input: &mut ParseInput, _action: &MacroAction) -> ParseResult {
    let command = input.symbol().to_string();
    let encoding = input.read_argument_text(&command)?;
    let payload = input.read_argument_text(&command)?;

    let mut node = Node::token(NodeKind::Annotation, payload)?;
    node.set_property("encoding", encoding);
    Ok(Some(Parsed::Node(node)))
}

/// Wrap the top of the operand stack in `semantics`, annotated with the
/// argument's TeX source
///
/// The wrapped node replaces the stack top; the result is `Handled`.
pub fn semantics(input: &mut ParseInput, action: &MacroAction) -> ParseResult {
    let command = input.symbol().to_string();
    let source = input.read_argument_text(&command)?;
    let operand = input
        .pop_node()
        .ok_or(ParseError::MissingOperand { command })?;

    let mut annotation = Node::token(NodeKind::Annotation, source)?;
    annotation.set_property("encoding", action.arg(0).unwrap_or(TEX_ENCODING));

    let wrapped = Node::with_children(NodeKind::Semantics, vec![operand, annotation])?;
    input.push_node(wrapped);
    Ok(Some(Parsed::Handled))
}

/// Open the environment's node kind, filling its parameters from arguments
pub fn begin_environment(input: &mut ParseInput, action: &EnvironmentAction) -> ParseResult {
    let mut node = Node::new(action.kind);
    for parameter in &action.parameters {
        let value = input.read_argument_text(&action.name)?;
        node.set_property(parameter.as_str(), value);
    }
    Ok(Some(Parsed::Node(node)))
}
