//! Preprocessor directives: includes, pragmas and `#if` blocks.

use serde::{Deserialize, Serialize};

use super::{Node, Residence};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludeStyle {
    /// `#include "path"`
    #[default]
    Quoted,
    /// `#include <path>`
    Angled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Include {
    pub path: String,
    #[serde(default)]
    pub style: IncludeStyle,
    #[serde(default)]
    pub residence: Residence,
}

impl Include {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            style: IncludeStyle::Quoted,
            residence: Residence::DeclOnly,
        }
    }

    pub fn angled(mut self) -> Self {
        self.style = IncludeStyle::Angled;
        self
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.residence = residence;
        self
    }

    /// The directive argument, delimited according to the style.
    pub fn target(&self) -> String {
        match self.style {
            IncludeStyle::Quoted => format!("\"{}\"", self.path),
            IncludeStyle::Angled => format!("<{}>", self.path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pragma {
    pub body: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub residence: Residence,
}

impl Pragma {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            comment: None,
            residence: Residence::DeclOnly,
        }
    }

    /// The include guard written at the top of every header.
    pub fn once() -> Self {
        Self::new("once")
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.residence = residence;
        self
    }
}

/// One `#if`/`#elif` arm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub condition: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Branch {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

/// A conditional-compilation block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditional {
    #[serde(rename = "if")]
    pub if_branch: Branch,
    #[serde(default, rename = "elif")]
    pub else_if_branches: Vec<Branch>,
    /// Children of the `#else` arm; the arm is omitted when empty.
    #[serde(default, rename = "else")]
    pub else_branch: Vec<Node>,
    #[serde(default)]
    pub residence: Residence,
}

impl Conditional {
    pub fn new(if_branch: Branch) -> Self {
        Self {
            if_branch,
            ..Self::default()
        }
    }

    pub fn else_if(mut self, branch: Branch) -> Self {
        self.else_if_branches.push(branch);
        self
    }

    pub fn otherwise(mut self, node: impl Into<Node>) -> Self {
        self.else_branch.push(node.into());
        self
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.residence = residence;
        self
    }
}
