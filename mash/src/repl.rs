//! Interactive front-end: reads a line, runs it, prints the result.

use console::style;
use mash_eval::Evaluator;
use mash_parser::parser::Parser;
use mash_source::Source;
use mash_value::{BuiltinVars, Env, Environment};
use std::io::{self, BufRead, Write};

pub const WELCOME_MESSAGE: &str = "Mashlang 1.0.0";
pub const PROMPT: &str = ">>> ";

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print the parsed program before evaluating it.
    pub dump_ast: bool,
}

/// Parses and evaluates `text` as one program in `env`.
/// Parser diagnostics are printed instead of evaluating; otherwise the resulting value, if any, is printed.
pub fn run_source(
    text: &str,
    env: &Env,
    builtin_vars: &BuiltinVars,
    options: Options,
    out: &mut impl Write,
) -> io::Result<()> {
    let source: Source = text.into();
    let mut parser = Parser::new(&source);
    let ast = parser.parse_program();

    if options.dump_ast {
        writeln!(out, "{}", style(&ast).dim())?;
    }

    if !source.has_no_errors() {
        writeln!(out, " parser errors:")?;
        for message in parser.errors() {
            writeln!(out, "\t{}", style(message).red())?;
        }
        return Ok(());
    }

    match Evaluator::new(builtin_vars).eval_root(&ast, env) {
        Some(result) if result.is_error() => writeln!(out, "{}", style(result).red()),
        Some(result) => writeln!(out, "{}", result),
        None => Ok(()),
    }
}

/// Runs the read-eval-print loop until `input` is exhausted. All lines share one environment.
pub fn start(
    input: impl BufRead,
    mut out: impl Write,
    builtin_vars: &BuiltinVars,
    options: Options,
) -> io::Result<()> {
    let env = Environment::new_env();
    writeln!(out, "{}", WELCOME_MESSAGE)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        run_source(&line, &env, builtin_vars, options, &mut out)?;
    }
}
