mod check;
mod completions;
mod render;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use cornerstone_codegen::{CppPrinter, decorator::DecoratorKind};
use cornerstone_manifest::TreeFile;
use eyre::{Result, WrapErr};
use render::RenderCommand;

/// Extension trait for exiting on tree file errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cornerstone_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "cornerstone")]
#[command(version)]
#[command(about = "Generate C++ headers and sources from declaration trees")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tree file into a header/source pair
    Render(RenderCommand),

    /// Validate a tree file and render it in memory without writing
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Build a printer for the tree file and emit every declaration into it.
///
/// `output` and `decorator` override the tree file's `[output]` settings.
fn emit_tree(
    tree: &TreeFile,
    output: Option<&Path>,
    decorator: Option<DecoratorKind>,
) -> Result<CppPrinter> {
    let settings = &tree.output;
    let destination = output.unwrap_or(settings.path.as_path());
    let decorator = decorator.unwrap_or(settings.decorator).build(&settings.api);

    let mut printer = CppPrinter::new(destination, settings.printer.clone(), decorator);
    printer
        .emit_all(&tree.declarations)
        .wrap_err("Failed to emit declaration tree")?;
    Ok(printer)
}
