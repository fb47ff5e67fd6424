// lisplet-core - Type predicate built-in procedures
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Type predicates: number?, symbol?, list?, nil?, atom
//!
//! Each takes exactly one argument and answers `t` or `nil` by
//! inspecting the value's type tag.

use lisplet_parser::Value;

use crate::error::Result;

use super::expect_arity;

pub(super) fn builtin_number_p(args: &[Value]) -> Result<Value> {
    expect_arity("number?", 1, args)?;
    Ok(Value::truth(matches!(args[0], Value::Int(_))))
}

/// `symbol?` answers `nil` for symbols whose name looks numeric
/// (empty or starting with a digit), even though such values carry
/// the symbol type tag.
pub(super) fn builtin_symbol_p(args: &[Value]) -> Result<Value> {
    expect_arity("symbol?", 1, args)?;
    let is_symbol = match &args[0] {
        Value::Symbol(sym) => {
            matches!(sym.name().chars().next(), Some(c) if !c.is_ascii_digit())
        }
        _ => false,
    };
    Ok(Value::truth(is_symbol))
}

pub(super) fn builtin_list_p(args: &[Value]) -> Result<Value> {
    expect_arity("list?", 1, args)?;
    Ok(Value::truth(matches!(args[0], Value::List(_))))
}

/// `nil?` applies the truthiness rule: only the `nil` symbol itself
/// answers `t`. The empty list and zero are not nil.
pub(super) fn builtin_nil_p(args: &[Value]) -> Result<Value> {
    expect_arity("nil?", 1, args)?;
    Ok(Value::truth(!args[0].is_truthy()))
}

/// `atom` answers `t` for every non-list value.
pub(super) fn builtin_atom(args: &[Value]) -> Result<Value> {
    expect_arity("atom", 1, args)?;
    Ok(Value::truth(!matches!(args[0], Value::List(_))))
}
