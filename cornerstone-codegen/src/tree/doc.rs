use serde::{Deserialize, Serialize};

use super::Residence;

/// Javadoc-style comment attached to a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocComment {
    pub lines: Vec<String>,
}

impl DocComment {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&str> for DocComment {
    fn from(text: &str) -> Self {
        Self::new(text.lines())
    }
}

/// A free-standing comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentBlock {
    pub doc: DocComment,
    #[serde(default)]
    pub residence: Residence,
}

impl CommentBlock {
    pub fn new(doc: impl Into<DocComment>) -> Self {
        Self {
            doc: doc.into(),
            residence: Residence::DeclOnly,
        }
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.residence = residence;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_multiline_str() {
        let doc = DocComment::from("Says hello.\nReturns a greeting.");
        assert_eq!(doc.lines, vec!["Says hello.", "Returns a greeting."]);
    }

    #[test]
    fn test_empty() {
        assert!(DocComment::default().is_empty());
        assert!(DocComment::from("").is_empty());
    }
}
