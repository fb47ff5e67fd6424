// lisplet-parser - Reader and value types for the lisplet language
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! # lisplet-parser
//!
//! Reader (lexer + parser) and the core [`Value`] type for lisplet,
//! a small Lisp dialect. The parser turns source text into `Value`
//! trees which `lisplet-core` evaluates.

pub mod lexer;
pub mod parser;
pub mod symbol;
pub mod value;

pub use lexer::{Lexer, LexerError, Token};
pub use parser::{ParseError, Parser};
pub use symbol::Symbol;
pub use value::{Closure, NativeFn, Value};
