use std::{io::Write, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow},
        lexer::Token,
        value::core::{Builtin, Value},
    },
};

/// The fixed table of host functions.
///
/// Consulted by identifier resolution after every environment in the chain
/// has missed, so a user binding shadows a built-in of the same name.
static BUILTIN_TABLE: &[Builtin] = &[Builtin { name: "len", func: len },
                                     Builtin { name: "first", func: first },
                                     Builtin { name: "last", func: last },
                                     Builtin { name: "rest", func: rest },
                                     Builtin { name: "push", func: push },
                                     Builtin { name: "puts", func: puts }];

/// Looks a name up in the built-in table.
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name).copied()
}

/// Rejects a call whose argument count differs from `expected`.
fn check_arity(arguments: &[Value], expected: usize, token: &Token) -> EvalResult<()> {
    if arguments.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { expected,
                                               got: arguments.len(),
                                               token: token.clone() }.into())
    }
}

/// Builds the error for an argument kind a built-in does not work on.
fn unsupported(builtin: &'static str, argument: &Value, token: &Token) -> Flow {
    RuntimeError::UnsupportedArgument { builtin,
                                        kind: argument.kind(),
                                        token: token.clone() }.into()
}

/// Clamps a collection length into the integer value type.
fn length_value(length: usize) -> Value {
    Value::Integer(i32::try_from(length).unwrap_or(i32::MAX))
}

/// `len(x)`: the byte length of a string or the element count of an array.
///
/// Note that strings measure UTF-8 bytes, not codepoints, so
/// `len("йцукен")` is `12`.
fn len(arguments: &[Value], token: &Token, _out: &mut dyn Write) -> EvalResult<Value> {
    check_arity(arguments, 1, token)?;

    match &arguments[0] {
        Value::String(s) => Ok(length_value(s.len())),
        Value::Array(elements) => Ok(length_value(elements.len())),
        other => Err(unsupported("len", other, token)),
    }
}

/// `first(array)`: the first element, or `null` for an empty array.
fn first(arguments: &[Value], token: &Token, _out: &mut dyn Write) -> EvalResult<Value> {
    check_arity(arguments, 1, token)?;

    match &arguments[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(unsupported("first", other, token)),
    }
}

/// `last(array)`: the last element, or `null` for an empty array.
fn last(arguments: &[Value], token: &Token, _out: &mut dyn Write) -> EvalResult<Value> {
    check_arity(arguments, 1, token)?;

    match &arguments[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(unsupported("last", other, token)),
    }
}

/// `rest(array)`: a new array of everything after the first element, or
/// `null` for an empty array. `rest` of a one-element array is the empty
/// array, which makes `first`/`rest` recursion bottom out cleanly.
fn rest(arguments: &[Value], token: &Token, _out: &mut dyn Write) -> EvalResult<Value> {
    check_arity(arguments, 1, token)?;

    match &arguments[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::Array(Rc::new(elements[1..].to_vec())))
            }
        },
        other => Err(unsupported("rest", other, token)),
    }
}

/// `push(array, value)`: a new array with the value appended; the original
/// array is untouched.
fn push(arguments: &[Value], token: &Token, _out: &mut dyn Write) -> EvalResult<Value> {
    check_arity(arguments, 2, token)?;

    match &arguments[0] {
        Value::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(arguments[1].clone());
            Ok(Value::Array(Rc::new(extended)))
        },
        other => Err(unsupported("push", other, token)),
    }
}

/// `puts(...)`: writes each argument's inspection text to the output
/// channel, with no separator between arguments, and returns `null`.
/// Takes any number of arguments, including none.
fn puts(arguments: &[Value], _token: &Token, out: &mut dyn Write) -> EvalResult<Value> {
    for argument in arguments {
        let _ = write!(out, "{argument}");
    }

    Ok(Value::Null)
}
