use serde::Deserialize;

use crate::builder::Indent;

/// Formatting settings of a printer run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    pub indent: Indent,
    /// Lines of the boilerplate banner written at the top of both artifacts.
    pub banner: Vec<String>,
    pub header_extension: String,
    pub source_extension: String,
}

impl PrinterConfig {
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn banner(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.banner = lines.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            banner: [
                "",
                "This file has been generated by the Cornerstone file generator.",
                "",
                "PLEASE, DO NOT EDIT IT MANUALLY",
                "",
            ]
            .map(String::from)
            .to_vec(),
            header_extension: ".h".to_string(),
            source_extension: ".cpp".to_string(),
        }
    }
}
