//! Main module for mathtex library functionality

pub mod ast;
pub mod error;
pub mod lexing;
pub mod registry;
pub mod symbols;
pub mod testing;
