use serde::{Deserialize, Serialize};

use super::{Node, Residence};

/// A `namespace` scope. An empty name opens an anonymous namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub residence: Residence,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.residence = residence;
        self
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}
