use std::rc::Rc;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Flow},
        lexer::Token,
        value::{core::{FunctionValue, Value}, environment::Environment},
    },
};

impl Evaluator<'_> {
    /// Evaluates a call expression: first the callee, then the arguments
    /// left to right, then the application. The first argument that fails
    /// to evaluate aborts the call with that failure.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       token: &Token,
                                                       callee: &Node,
                                                       arguments: &[Node],
                                                       env: &Rc<Environment>)
                                                       -> EvalResult<Value> {
        let callee = self.eval(callee, env)?;
        let arguments = self.eval_expressions(arguments, env)?;

        match &callee {
            Value::Function(function) => self.apply_function(token, function, &arguments),
            Value::Builtin(builtin) => (builtin.func)(&arguments, token, &mut *self.out),
            _ => Err(RuntimeError::NotAFunction { kind:  callee.kind(),
                                                  token: token.clone(), }.into()),
        }
    }

    /// Applies a closure: checks arity, binds each parameter to its
    /// argument in a fresh environment enclosed over the captured one,
    /// evaluates the body, and unwraps one layer of `return`.
    fn apply_function(&mut self,
                      token: &Token,
                      function: &FunctionValue,
                      arguments: &[Value])
                      -> EvalResult<Value> {
        if function.parameters.len() != arguments.len() {
            return Err(RuntimeError::WrongArgumentCount { expected: function.parameters.len(),
                                                          got:      arguments.len(),
                                                          token:    token.clone(), }.into());
        }

        let env = Environment::enclosed(&function.env);
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            env.set(parameter.name.clone(), argument.clone());
        }

        match self.eval(&function.body, &env) {
            Err(Flow::Return(value)) => Ok(value),
            other => other,
        }
    }
}
