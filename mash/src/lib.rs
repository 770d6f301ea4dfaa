pub mod builtin_functions;
pub mod repl;

use mash_eval::Evaluator;
use mash_parser::parser::Parser;
use mash_value::{Environment, Object};

/// For testing purposes only.
/// Runs `source` in a fresh environment with [`builtin_functions::testing_builtin_vars`] and returns the value
/// of the last statement. Panics on parse errors or as soon as any statement evaluates to an error.
pub fn interpret(source: &str) -> Option<Object> {
    let builtin_vars = builtin_functions::testing_builtin_vars();

    let source = source.into();
    let mut parser = Parser::new(&source);
    let ast = parser.parse_program();

    eprint!("{}", source.errors);
    assert!(source.has_no_errors());

    // any failing statement fails the run
    let env = Environment::new_env();
    let evaluator = Evaluator::new(&builtin_vars);
    let mut result = None;
    for stmt in &ast.stmts {
        result = evaluator.eval_stmt(stmt, &env);
        match result {
            Some(Object::Error(message)) => panic!(
                "evaluation failed at position {}: {}",
                stmt.token().span.start,
                message
            ),
            Some(Object::ReturnValue(val)) => return Some(*val),
            _ => {}
        }
    }
    result
}
