use std::path::PathBuf;

use clap::Args;
use cornerstone_manifest::TreeFile;
use eyre::Result;

use super::{UnwrapOrExit, emit_tree};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the tree file (.toml or .json)
    pub tree: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let tree = TreeFile::from_file(&self.tree).unwrap_or_exit();
        let printer = emit_tree(&tree, None, None)?;
        let (header, source) = printer.artifact_paths();
        let rendered = printer.render();

        println!("✓ {} is valid\n", self.tree.display());

        let count = tree.node_count();
        println!("  {} declaration{}", count, if count == 1 { "" } else { "s" });
        println!(
            "  {} ({} bytes)",
            header.display(),
            rendered.declarations.len()
        );
        println!(
            "  {} ({} bytes)",
            source.display(),
            rendered.definitions.len()
        );

        Ok(())
    }
}
