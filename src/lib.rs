//! # mathtex
//!
//! Resolution-and-construction core of a TeX math front end: composable
//! symbol maps, ordered lookup chains per category, the registry that owns
//! them, and the typed MathML-like node model the parser builds.
//!
//! ## Testing
//!
//! For test fixtures and the fluent node assertions, see the
//! [testing module](tex::testing).

pub mod tex;
