// lisplet-core - List primitive built-in procedures
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! List primitives: cons, car, cdr
//!
//! Lists are persistent vectors, so `cons` and `cdr` build new values
//! that share structure with their inputs; no list is ever mutated
//! after construction.

use lisplet_parser::Value;

use crate::error::{Error, Result};

use super::expect_arity;

/// `(cons head tail)` prepends `head` to `tail`. The tail must be a
/// list or the `nil` symbol, which stands in for the empty list.
pub(super) fn builtin_cons(args: &[Value]) -> Result<Value> {
    expect_arity("cons", 2, args)?;
    let head = args[0].clone();
    match &args[1] {
        Value::List(items) => {
            let mut items = items.clone();
            items.push_front(head);
            Ok(Value::List(items))
        }
        tail if !tail.is_truthy() => Ok(Value::list([head])),
        other => Err(Error::type_error_in(
            "cons",
            "list or nil",
            other.type_name(),
        )),
    }
}

/// `(car list)` returns the first element of a non-empty list.
pub(super) fn builtin_car(args: &[Value]) -> Result<Value> {
    expect_arity("car", 1, args)?;
    match &args[0] {
        Value::List(items) => items
            .front()
            .cloned()
            .ok_or_else(|| Error::type_error_in("car", "non-empty list", "empty list")),
        other => Err(Error::type_error_in(
            "car",
            "non-empty list",
            other.type_name(),
        )),
    }
}

/// `(cdr list)` returns a list of all but the first element.
pub(super) fn builtin_cdr(args: &[Value]) -> Result<Value> {
    expect_arity("cdr", 1, args)?;
    match &args[0] {
        Value::List(items) => {
            if items.is_empty() {
                return Err(Error::type_error_in("cdr", "non-empty list", "empty list"));
            }
            Ok(Value::List(items.clone().split_off(1)))
        }
        other => Err(Error::type_error_in(
            "cdr",
            "non-empty list",
            other.type_name(),
        )),
    }
}
