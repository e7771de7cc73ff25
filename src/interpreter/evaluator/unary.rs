use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Flow},
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Applies a prefix operator to its evaluated operand.
    ///
    /// `!` works on every value: it booleanizes the operand's truthiness
    /// and negates it, so `!0` is `false` and `!null` is `true`. `-` is
    /// only defined on integers and wraps on `i32::MIN`.
    pub(in crate::interpreter::evaluator) fn eval_unary(token: &Token,
                                                        right: &Value)
                                                        -> EvalResult<Value> {
        match token.kind {
            TokenKind::Bang => Ok(Value::Boolean(!right.is_truthy())),
            TokenKind::Minus => match right {
                Value::Integer(i) => Ok(Value::Integer(i.wrapping_neg())),
                _ => Err(unknown_operation(token, right)),
            },
            _ => Err(unknown_operation(token, right)),
        }
    }
}

fn unknown_operation(token: &Token, right: &Value) -> Flow {
    RuntimeError::UnknownUnaryOperation { operator: token.literal.clone(),
                                          right:    right.kind(),
                                          token:    token.clone(), }.into()
}
