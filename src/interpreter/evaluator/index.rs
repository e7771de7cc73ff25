use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Token,
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Applies the index operator to its evaluated operands.
    ///
    /// Arrays take integer indices; anything out of range, including
    /// negative indices, yields `Null` rather than an error. Hashes take
    /// any hashable key and yield `Null` on a miss. Indexing any other
    /// kind, or an array with a non-integer, is an error naming the
    /// indexed value's kind.
    pub(in crate::interpreter::evaluator) fn eval_index(token: &Token,
                                                        left: &Value,
                                                        index: &Value)
                                                        -> EvalResult<Value> {
        match (left, index) {
            (Value::Array(elements), Value::Integer(i)) => {
                Ok(usize::try_from(*i).ok()
                                      .and_then(|i| elements.get(i))
                                      .cloned()
                                      .unwrap_or(Value::Null))
            },
            (Value::Hash(pairs), _) => {
                let key = index.hash_key(token)?;
                Ok(pairs.get(&key).map(|pair| pair.value.clone()).unwrap_or(Value::Null))
            },
            _ => Err(RuntimeError::IndexNotSupported { kind:  left.kind(),
                                                       token: token.clone(), }.into()),
        }
    }
}
