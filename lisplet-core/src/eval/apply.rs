// lisplet-core - Procedure application
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Procedure application for lisplet.

use std::any::Any;
use std::rc::Rc;

use lisplet_parser::{Closure, NativeFn, Value};

use super::eval;
use crate::env::Env;
use crate::error::{Error, Result};

/// Type alias for native procedure signature.
pub type NativeFnImpl = dyn Fn(&[Value]) -> Result<Value>;

/// Apply a procedure to already-evaluated arguments.
pub fn apply(func: &Value, args: &[Value]) -> Result<Value> {
    match func {
        Value::NativeFn(f) => apply_native(f, args),
        Value::Closure(f) => apply_closure(f, args),
        other => Err(Error::NotCallable(other.to_string())),
    }
}

/// Apply a user-defined closure.
///
/// Parameters are bound positionally in a fresh child of the captured
/// environment, so applications see bindings from the definition site,
/// not the call site.
pub(crate) fn apply_closure(func: &Rc<Closure>, args: &[Value]) -> Result<Value> {
    if args.len() != func.params.len() {
        let name = match &func.name {
            Some(sym) => sym.name().to_string(),
            None => "closure".to_string(),
        };
        return Err(Error::arity(name, func.params.len(), args.len()));
    }

    // Downcast the captured environment
    let captured_env = func
        .env
        .downcast_ref::<Env>()
        .ok_or_else(|| Error::Internal("closure environment has invalid type".into()))?;

    let call_env = captured_env.child();
    for (param, arg) in func.params.iter().zip(args.iter()) {
        call_env.define(param.clone(), arg.clone());
    }

    eval(&func.body, &call_env)
}

/// Apply a native procedure.
pub(crate) fn apply_native(func: &NativeFn, args: &[Value]) -> Result<Value> {
    // Downcast the function
    let f = func
        .func()
        .downcast_ref::<Rc<NativeFnImpl>>()
        .ok_or_else(|| Error::Internal("native procedure has invalid type".into()))?;
    f(args)
}

/// Create a native procedure value.
pub fn make_native_fn(
    name: &'static str,
    func: impl Fn(&[Value]) -> Result<Value> + 'static,
) -> NativeFn {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    let func_any: Rc<dyn Any> = Rc::new(func_rc);
    NativeFn::new(name, func_any)
}
