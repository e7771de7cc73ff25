use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Flow},
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Applies an infix operator to its evaluated operands.
    ///
    /// Two integers support the full arithmetic and comparison set. Two
    /// strings support only `+`. Every other combination supports `==` and
    /// `!=`, which compare structurally and treat different kinds as
    /// unequal; any other operator is a type mismatch across kinds or an
    /// unknown operation within one.
    pub(in crate::interpreter::evaluator) fn eval_binary(token: &Token,
                                                         left: &Value,
                                                         right: &Value)
                                                         -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_binary(token, *a, *b),
            (Value::String(a), Value::String(b)) => Self::eval_string_binary(token, a, b),
            _ => match token.kind {
                TokenKind::Equals => Ok(Value::Boolean(left == right)),
                TokenKind::NotEquals => Ok(Value::Boolean(left != right)),
                _ if left.kind() != right.kind() => {
                    Err(RuntimeError::TypeMismatch { left:     left.kind(),
                                                     operator: token.literal.clone(),
                                                     right:    right.kind(),
                                                     token:    token.clone(), }.into())
                },
                _ => Err(unknown_operation(token, left, right)),
            },
        }
    }

    /// Integer arithmetic wraps two's-complement; `/` truncates toward
    /// zero and reports a zero divisor instead of dividing.
    fn eval_integer_binary(token: &Token, a: i32, b: i32) -> EvalResult<Value> {
        match token.kind {
            TokenKind::Plus => Ok(Value::Integer(a.wrapping_add(b))),
            TokenKind::Minus => Ok(Value::Integer(a.wrapping_sub(b))),
            TokenKind::Asterisk => Ok(Value::Integer(a.wrapping_mul(b))),
            TokenKind::Slash => {
                if b == 0 {
                    Err(RuntimeError::DivisionByZero { token: token.clone() }.into())
                } else {
                    Ok(Value::Integer(a.wrapping_div(b)))
                }
            },
            TokenKind::LessThan => Ok(Value::Boolean(a < b)),
            TokenKind::GreaterThan => Ok(Value::Boolean(a > b)),
            TokenKind::Equals => Ok(Value::Boolean(a == b)),
            TokenKind::NotEquals => Ok(Value::Boolean(a != b)),
            _ => Err(unknown_operation(token,
                                       &Value::Integer(a),
                                       &Value::Integer(b))),
        }
    }

    /// `+` concatenates into a new string; nothing else is defined on two
    /// strings, equality included.
    fn eval_string_binary(token: &Token, a: &str, b: &str) -> EvalResult<Value> {
        if token.kind == TokenKind::Plus {
            Ok(Value::String(Rc::from(format!("{a}{b}"))))
        } else {
            Err(unknown_operation(token,
                                  &Value::String(Rc::from(a)),
                                  &Value::String(Rc::from(b))))
        }
    }
}

fn unknown_operation(token: &Token, left: &Value, right: &Value) -> Flow {
    RuntimeError::UnknownBinaryOperation { left:     left.kind(),
                                           operator: token.literal.clone(),
                                           right:    right.kind(),
                                           token:    token.clone(), }.into()
}
