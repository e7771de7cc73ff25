use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::builtin,
        value::{
            core::{FunctionValue, HashPair, Value},
            environment::Environment,
        },
    },
};

/// The non-local exits evaluation can take.
///
/// Blocks stop at the first statement that produces either variant.
/// `Return` is unwrapped back into a plain value at function-call
/// boundaries and at the program top level; `Failure` propagates all the
/// way out. Threading both through the error channel is what lets every
/// evaluation step use `?`.
#[derive(Debug)]
pub enum Flow {
    /// A `return` statement fired; carries the returned value.
    Return(Value),
    /// Evaluation failed; carries the error.
    Failure(RuntimeError),
}

impl From<RuntimeError> for Flow {
    fn from(error: RuntimeError) -> Self {
        Self::Failure(error)
    }
}

/// Result type used by the evaluation functions.
pub type EvalResult<T> = Result<T, Flow>;

/// Walks an AST against an environment and produces values.
///
/// The evaluator itself is stateless apart from the output sink that
/// `puts` writes to; all program state lives in the environments threaded
/// through the calls.
pub struct Evaluator<'out> {
    pub(in crate::interpreter::evaluator) out: &'out mut dyn Write,
}

impl<'out> Evaluator<'out> {
    /// Creates an evaluator writing built-in output to `out`.
    pub fn new(out: &'out mut dyn Write) -> Self {
        Self { out }
    }

    /// Evaluates a parsed program in the given environment.
    ///
    /// The program's value is the value of its last statement, unless a
    /// `return` or an error cuts the run short. A top-level `return`
    /// yields its inner value, so the wrapper never escapes to the host.
    ///
    /// # Errors
    /// The first runtime error any statement produces.
    pub fn eval_program(&mut self,
                        program: &Node,
                        env: &Rc<Environment>)
                        -> Result<Value, RuntimeError> {
        match self.eval(program, env) {
            Ok(value) | Err(Flow::Return(value)) => Ok(value),
            Err(Flow::Failure(error)) => Err(error),
        }
    }

    /// Evaluates one node. Every helper funnels back through here for its
    /// subexpressions, so `return` and errors short-circuit uniformly.
    pub(in crate::interpreter::evaluator) fn eval(&mut self,
                                                  node: &Node,
                                                  env: &Rc<Environment>)
                                                  -> EvalResult<Value> {
        match node {
            Node::Block { statements, .. } => self.eval_block(statements, env),
            Node::Return { value, .. } => {
                let value = self.eval(value, env)?;
                Err(Flow::Return(value))
            },
            Node::Declaration { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.set(name.name.clone(), value);
                Ok(Value::Null)
            },
            Node::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                let condition = self.eval(condition, env)?;
                if condition.is_truthy() {
                    self.eval(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval(alternative, env)
                } else {
                    Ok(Value::Null)
                }
            },
            Node::Index { token, left, index } => {
                let left = self.eval(left, env)?;
                let index = self.eval(index, env)?;
                Self::eval_index(token, &left, &index)
            },
            Node::Call { token,
                         callee,
                         arguments, } => self.eval_call(token, callee, arguments, env),
            Node::Unary { token, right } => {
                let right = self.eval(right, env)?;
                Self::eval_unary(token, &right)
            },
            Node::Binary { token, left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(token, &left, &right)
            },
            Node::Identifier(identifier) => {
                env.get(&identifier.name)
                   .or_else(|| builtin::lookup(&identifier.name).map(Value::Builtin))
                   .ok_or_else(|| {
                       RuntimeError::IdentifierNotFound { name:  identifier.name.clone(),
                                                          token: identifier.token.clone(), }.into()
                   })
            },
            Node::BooleanLiteral { value, .. } => Ok(Value::Boolean(*value)),
            Node::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
            Node::StringLiteral { value, .. } => Ok(Value::String(Rc::from(value.as_str()))),
            Node::ArrayLiteral { elements, .. } => {
                let elements = self.eval_expressions(elements, env)?;
                Ok(Value::Array(Rc::new(elements)))
            },
            Node::HashLiteral { pairs, .. } => self.eval_hash_literal(pairs, env),
            Node::FunctionLiteral { parameters, body, .. } => {
                Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                           body:       Rc::clone(body),
                                                           env:        Rc::clone(env), })))
            },
        }
    }

    /// Evaluates statements in order; the block's value is the last
    /// statement's value, `Null` for an empty block.
    fn eval_block(&mut self, statements: &[Node], env: &Rc<Environment>) -> EvalResult<Value> {
        let mut result = Value::Null;
        for statement in statements {
            result = self.eval(statement, env)?;
        }
        Ok(result)
    }

    /// Evaluates an expression list left to right, stopping at the first
    /// failure. Used for array elements and call arguments.
    pub(in crate::interpreter::evaluator) fn eval_expressions(&mut self,
                                                              expressions: &[Node],
                                                              env: &Rc<Environment>)
                                                              -> EvalResult<Vec<Value>> {
        expressions.iter().map(|expression| self.eval(expression, env)).collect()
    }

    /// Builds a hash value from its literal pairs. For each pair the key
    /// is evaluated and checked for hashability before the value is
    /// touched. A repeated key overwrites the earlier entry.
    fn eval_hash_literal(&mut self,
                         pairs: &[(Node, Node)],
                         env: &Rc<Environment>)
                         -> EvalResult<Value> {
        let mut map = HashMap::new();

        for (key_node, value_node) in pairs {
            let key = self.eval(key_node, env)?;
            let hash_key = key.hash_key(key_node.token())?;
            let value = self.eval(value_node, env)?;
            map.insert(hash_key, HashPair { key, value });
        }

        Ok(Value::Hash(Rc::new(map)))
    }
}
