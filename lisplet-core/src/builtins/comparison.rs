// lisplet-core - Comparison built-in procedures
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Comparison operations: =, <, >, <=, >=
//!
//! Each takes exactly two arguments and answers with the `t` or `nil`
//! symbol. The ordering operators require integers; `=` compares two
//! integers numerically, two symbols by name, and answers `nil` for
//! any other combination.

use lisplet_parser::Value;

use crate::error::Result;

use super::{expect_arity, expect_int};

pub(super) fn builtin_eq(args: &[Value]) -> Result<Value> {
    expect_arity("=", 2, args)?;
    let equal = match (&args[0], &args[1]) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Symbol(a), Value::Symbol(b)) => a.name() == b.name(),
        _ => false,
    };
    Ok(Value::truth(equal))
}

pub(super) fn builtin_lt(args: &[Value]) -> Result<Value> {
    expect_arity("<", 2, args)?;
    Ok(Value::truth(
        expect_int("<", &args[0])? < expect_int("<", &args[1])?,
    ))
}

pub(super) fn builtin_gt(args: &[Value]) -> Result<Value> {
    expect_arity(">", 2, args)?;
    Ok(Value::truth(
        expect_int(">", &args[0])? > expect_int(">", &args[1])?,
    ))
}

pub(super) fn builtin_le(args: &[Value]) -> Result<Value> {
    expect_arity("<=", 2, args)?;
    Ok(Value::truth(
        expect_int("<=", &args[0])? <= expect_int("<=", &args[1])?,
    ))
}

pub(super) fn builtin_ge(args: &[Value]) -> Result<Value> {
    expect_arity(">=", 2, args)?;
    Ok(Value::truth(
        expect_int(">=", &args[0])? >= expect_int(">=", &args[1])?,
    ))
}
