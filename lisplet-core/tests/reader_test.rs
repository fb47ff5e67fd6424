// lisplet-core - Reader/printer round-trip tests
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Round-trip tests: printing a parsed form reproduces the source
//! text up to whitespace normalization.

mod common;
use common::*;

fn round_trip(source: &str) -> String {
    Parser::parse_str(source)
        .expect("parse failed")
        .expect("no form")
        .to_string()
}

#[test]
fn test_atoms_round_trip() {
    assert_eq!(round_trip("42"), "42");
    assert_eq!(round_trip("-7"), "-7");
    assert_eq!(round_trip("foo"), "foo");
    assert_eq!(round_trip("\"hello\""), "\"hello\"");
}

#[test]
fn test_lists_round_trip() {
    assert_eq!(round_trip("()"), "()");
    assert_eq!(round_trip("(1 2 3)"), "(1 2 3)");
    assert_eq!(round_trip("(a (b c) d)"), "(a (b c) d)");
}

#[test]
fn test_whitespace_normalizes() {
    assert_eq!(round_trip("( 1   2\n 3 )"), "(1 2 3)");
    assert_eq!(round_trip("(a ; comment\n b)"), "(a b)");
}

#[test]
fn test_quote_shorthand_prints_expanded() {
    assert_eq!(round_trip("'x"), "(quote x)");
    assert_eq!(round_trip("'(1 2)"), "(quote (1 2))");
}

#[test]
fn test_evaluated_values_print_readably() {
    assert_eq!(eval_str("(cons 1 '(2 3))").unwrap().to_string(), "(1 2 3)");
    assert_eq!(eval_str("''x").unwrap().to_string(), "(quote x)");
    assert_eq!(eval_str("(quote ())").unwrap().to_string(), "()");
}

#[test]
fn test_procedures_print_as_opaque_tokens() {
    let env = new_env();
    let builtin = eval_str_with_env("+", &env).unwrap().to_string();
    assert_eq!(builtin, "#<builtin +>");

    eval_str_with_env("(define f (x) x)", &env).unwrap();
    let closure = eval_str_with_env("f", &env).unwrap().to_string();
    assert_eq!(closure, "#<closure>");
}
