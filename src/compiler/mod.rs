pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;
