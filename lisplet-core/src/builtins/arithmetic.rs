// lisplet-core - Arithmetic built-in procedures
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Arithmetic operations: +, -, *, /, %
//!
//! All operands must be integers; there is no numeric tower. Checked
//! arithmetic is used throughout, so results outside the i64 range
//! surface as an overflow error rather than wrapping.

use lisplet_parser::Value;

use crate::error::{Error, Result};

use super::{expect_arity, expect_int};

/// `(+ a b ...)` sums its arguments. With no arguments returns 0.
pub(super) fn builtin_add(args: &[Value]) -> Result<Value> {
    let mut sum: i64 = 0;
    for arg in args {
        let n = expect_int("+", arg)?;
        sum = sum
            .checked_add(n)
            .ok_or(Error::IntegerOverflow { operation: "+" })?;
    }
    Ok(Value::int(sum))
}

/// `(- a)` negates; `(- a b ...)` subtracts the rest from the first.
pub(super) fn builtin_sub(args: &[Value]) -> Result<Value> {
    if args.is_empty() {
        return Err(Error::arity_at_least("-", 1, 0));
    }
    let first = expect_int("-", &args[0])?;
    if args.len() == 1 {
        return first
            .checked_neg()
            .map(Value::int)
            .ok_or(Error::IntegerOverflow { operation: "-" });
    }
    let mut acc = first;
    for arg in &args[1..] {
        let n = expect_int("-", arg)?;
        acc = acc
            .checked_sub(n)
            .ok_or(Error::IntegerOverflow { operation: "-" })?;
    }
    Ok(Value::int(acc))
}

/// `(* a b ...)` multiplies its arguments. With no arguments returns 1.
pub(super) fn builtin_mul(args: &[Value]) -> Result<Value> {
    let mut product: i64 = 1;
    for arg in args {
        let n = expect_int("*", arg)?;
        product = product
            .checked_mul(n)
            .ok_or(Error::IntegerOverflow { operation: "*" })?;
    }
    Ok(Value::int(product))
}

/// `(/ a b ...)` integer division, truncating toward zero, folded
/// left over the divisors.
pub(super) fn builtin_div(args: &[Value]) -> Result<Value> {
    if args.len() < 2 {
        return Err(Error::arity_at_least("/", 2, args.len()));
    }
    let mut acc = expect_int("/", &args[0])?;
    for arg in &args[1..] {
        let b = expect_int("/", arg)?;
        if b == 0 {
            return Err(Error::DivisionByZero { operation: "/" });
        }
        // i64::MIN / -1 is the one remaining overflow case
        acc = acc
            .checked_div(b)
            .ok_or(Error::IntegerOverflow { operation: "/" })?;
    }
    Ok(Value::int(acc))
}

/// `(% a b)` remainder with the sign of the dividend.
pub(super) fn builtin_mod(args: &[Value]) -> Result<Value> {
    expect_arity("%", 2, args)?;
    let a = expect_int("%", &args[0])?;
    let b = expect_int("%", &args[1])?;
    if b == 0 {
        return Err(Error::DivisionByZero { operation: "%" });
    }
    a.checked_rem(b)
        .map(Value::int)
        .ok_or(Error::IntegerOverflow { operation: "%" })
}
