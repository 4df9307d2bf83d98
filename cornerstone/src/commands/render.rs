use std::path::PathBuf;

use clap::Args;
use cornerstone_codegen::decorator::DecoratorKind;
use cornerstone_manifest::TreeFile;
use eyre::{Result, WrapErr};

use super::{UnwrapOrExit, emit_tree};

#[derive(Args)]
pub struct RenderCommand {
    /// Path to the tree file (.toml or .json)
    pub tree: PathBuf,

    /// Destination prefix (overrides the tree file's output path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Decorator to apply (overrides the tree file setting)
    #[arg(short, long)]
    pub decorator: Option<DecoratorKind>,

    /// Print both artifacts without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let tree = TreeFile::from_file(&self.tree).unwrap_or_exit();
        let printer = emit_tree(&tree, self.output.as_deref(), self.decorator)?;

        if self.dry_run {
            let (header, source) = printer.artifact_paths();
            let rendered = printer.render();

            println!("── {} ──", header.display());
            println!("{}", rendered.declarations);
            println!("── {} ──", source.display());
            println!("{}", rendered.definitions);
            return Ok(());
        }

        let (header, source) = printer.finish().wrap_err("Failed to write artifacts")?;

        println!(
            "Rendered {} declaration{} from {}",
            tree.node_count(),
            if tree.node_count() == 1 { "" } else { "s" },
            self.tree.display()
        );
        println!("  {}", header.display());
        println!("  {}", source.display());

        Ok(())
    }
}
