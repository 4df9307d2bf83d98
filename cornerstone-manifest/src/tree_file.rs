use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use cornerstone_codegen::{PrinterConfig, decorator::DecoratorKind, tree::Node};
use serde::Deserialize;

use crate::{
    Error, Result,
    error::SourceContext,
    validate::{find_value_span, validate_identifier},
};

/// Root of a tree file: where to write and what to write.
#[derive(Debug, Deserialize)]
pub struct TreeFile {
    pub output: OutputConfig,

    /// Top-level declarations, emitted in order.
    #[serde(default)]
    pub declarations: Vec<Node>,
}

/// The `[output]` table.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Destination prefix; the header and source extensions are appended.
    pub path: PathBuf,

    /// Export module name handed to the decorator, e.g. `Greeter` for
    /// `GREETER_API`. Empty disables the export token.
    #[serde(default)]
    pub api: String,

    #[serde(default)]
    pub decorator: DecoratorKind,

    #[serde(flatten)]
    pub printer: PrinterConfig,
}

impl FromStr for TreeFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s, "cornerstone.toml")
    }
}

impl TreeFile {
    /// Load a tree file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if extension != "toml" && extension != "json" {
            return Err(Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();

        let tree = if extension == "json" {
            Self::from_json_str(&content, &filename)?
        } else {
            Self::from_toml_str(&content, &filename)?
        };

        tracing::debug!(path = %path.display(), nodes = tree.node_count(), "loaded tree file");
        Ok(tree)
    }

    /// Parse TOML content with a custom filename for error reporting.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let tree: Self = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        tree.validate(&ctx)?;
        Ok(tree)
    }

    /// Parse JSON content with a custom filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let tree: Self = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        tree.validate(&ctx)?;
        Ok(tree)
    }

    /// Total number of declarations, nested ones included.
    pub fn node_count(&self) -> usize {
        self.declarations.iter().map(Node::count).sum()
    }

    fn validate(&self, ctx: &SourceContext<'_>) -> Result<()> {
        let api = &self.output.api;
        if api.is_empty() {
            return Ok(());
        }
        if let Some(reason) = validate_identifier(api) {
            let span = find_value_span(ctx.src(), api);
            return Err(ctx.invalid_identifier_error(api, "export module name", reason, span));
        }
        Ok(())
    }
}
