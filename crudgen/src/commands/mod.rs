mod completions;
mod crud;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use crud::CrudCommand;
use eyre::Result;

/// Extension trait for exiting on generation errors with pretty formatting.
///
/// Each error kind carries its own exit code so CI scripts can distinguish
/// bad input from render or filesystem failures.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crudgen_typeorm::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                let code = e.exit_code();
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(code);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Scaffold TypeORM + Express CRUD modules from a table name")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Crud(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a CRUD module for a table
    Crud(CrudCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
