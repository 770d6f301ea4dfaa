use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mash::builtin_functions::default_builtin_vars;
use mash::repl::{self, Options};
use mash_value::Environment;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Interpreter for the Mash scripting language.
#[derive(Parser, Debug)]
#[command(name = "mash", version, about, long_about = None)]
struct Cli {
    /// Script to run as a single program. Starts an interactive session when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the parsed program before evaluating it.
    #[arg(long)]
    dump_ast: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let builtin_vars = default_builtin_vars();
    let options = Options {
        dump_ast: cli.dump_ast,
    };

    match cli.file {
        Some(path) => {
            let script = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            info!("running {}", path.display());
            let env = Environment::new_env();
            repl::run_source(&script, &env, &builtin_vars, options, &mut io::stdout())?;
        }
        None => {
            let stdin = io::stdin();
            repl::start(stdin.lock(), io::stdout(), &builtin_vars, options)?;
        }
    }

    Ok(())
}
