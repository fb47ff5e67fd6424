// lisplet-core - Logical built-in procedures
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Eager logical procedures: and?, or?, not
//!
//! These receive already-evaluated arguments, so both operands of
//! `and?`/`or?` are always evaluated. The short-circuiting `and`/`or`
//! special forms live in the evaluator.

use lisplet_parser::Value;

use crate::error::Result;

use super::expect_arity;

/// `(and? a b ...)` answers `t` when every argument is truthy. With
/// no arguments answers `t`.
pub(super) fn builtin_and_p(args: &[Value]) -> Result<Value> {
    Ok(Value::truth(args.iter().all(Value::is_truthy)))
}

/// `(or? a b ...)` answers `t` when any argument is truthy. With no
/// arguments answers `nil`.
pub(super) fn builtin_or_p(args: &[Value]) -> Result<Value> {
    Ok(Value::truth(args.iter().any(Value::is_truthy)))
}

pub(super) fn builtin_not(args: &[Value]) -> Result<Value> {
    expect_arity("not", 1, args)?;
    Ok(Value::truth(!args[0].is_truthy()))
}
