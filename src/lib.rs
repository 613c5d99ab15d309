#![allow(clippy::module_inception)]

//! Lexical-analysis front end for the Ha language.
//!
//! Source text is scanned into classified tokens by a lexer backed by a
//! table-driven finite automaton, declared identifiers are recorded in a
//! scoped symbol table, and lexical or simple semantic violations are
//! collected as line-tagged diagnostics. The automaton's states and
//! transitions are loaded from an external specification rather than
//! hard-coded.

pub mod analyzer;
pub mod dfa;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod symbols;

extern crate regex;
