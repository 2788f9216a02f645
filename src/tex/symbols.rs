//! Symbol maps and what they resolve to
//!
//!     A symbol map is a named table for one lookup category (characters,
//!     delimiters, macros, environments). Maps are authored independently and
//!     composed by the [registry](crate::tex::registry) into ordered chains.
//!
//!     Each category resolves to its own action type (see [`category`]), so a
//!     chain of character maps can only produce [`CharacterAction`]s. Parsing
//!     goes through a [`ParseInput`], which carries the symbol plus the tokens
//!     and nodes around it, and yields a [`ParseResult`](crate::tex::error::ParseResult):
//!
//!         Ok(Some(Parsed::Node(..)))   handled, here is a fragment
//!         Ok(Some(Parsed::Handled))    handled, input or stack updated
//!         Ok(None)                     not handled here, try the next map
//!         Err(ParseError)              recognized but malformed
//!
//! ## Modules
//!
//! - `category` - category markers and action types
//! - `map` - the [`SymbolMap`] trait and its variants
//! - `input` - parse input and parse outcome
//! - `parse_methods` - standard parse methods for map authors

pub mod category;
pub mod input;
pub mod map;
pub mod parse_methods;

pub use category::{
    Category, CategoryKind, CharacterAction, Characters, DelimiterAction, Delimiters,
    EnvironmentAction, EnvironmentHandler, Environments, MacroAction, MacroHandler, Macros,
    SymbolAction,
};
pub use input::{Mode, ParseInput, Parsed};
pub use map::{
    CharacterMap, DelimiterMap, EnvironmentMap, MacroMap, ParseMethod, RegexMap, RegisteredMap,
    SymbolMap, TableMap,
};
