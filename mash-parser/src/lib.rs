//! Scanner, syntax tree and parser for the Mash language.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod visitor;
