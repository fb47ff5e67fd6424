// lisplet-core - Evaluator and builtin library for the lisplet language
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! # lisplet-core
//!
//! Evaluator and builtin library for the lisplet language.
//! Provides a tree-walking interpreter for [`Value`] expressions.
//!
//! The typical embedding sequence is: create an [`Env`], call
//! [`register_builtins`] on it once, then parse and [`eval`] forms
//! against it. Errors are per-form; the environment stays usable after
//! a failed evaluation.

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;

pub use builtins::{EnvExt, register_builtins};
pub use env::Env;
pub use error::{AritySpec, Error, Result};
pub use eval::{apply, eval, get_max_eval_depth, make_native_fn, set_max_eval_depth};

// Re-export parser types for convenience
pub use lisplet_parser::{ParseError, Parser, Symbol, Value};
