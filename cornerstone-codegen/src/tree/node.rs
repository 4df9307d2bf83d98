use serde::{Deserialize, Serialize};

use super::{
    Class, CommentBlock, Conditional, Delegate, Enum, Function, Include, Namespace, Pragma,
    Residence, Struct,
};

/// Every declaration that can appear at file scope, inside a namespace or
/// inside a conditional-compilation branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Include(Include),
    Pragma(Pragma),
    Comment(CommentBlock),
    Struct(Struct),
    Class(Class),
    Enum(Enum),
    Function(Function),
    Namespace(Namespace),
    Conditional(Conditional),
    Delegate(Delegate),
}

impl Node {
    /// Where this node's output goes.
    pub fn residence(&self) -> Residence {
        match self {
            Self::Include(n) => n.residence,
            Self::Pragma(n) => n.residence,
            Self::Comment(n) => n.residence,
            Self::Struct(n) => n.record.residence,
            Self::Class(n) => n.record.residence,
            Self::Enum(n) => n.residence,
            Self::Function(n) => n.residence,
            Self::Namespace(n) => n.residence,
            Self::Conditional(n) => n.residence,
            Self::Delegate(n) => n.residence,
        }
    }

    /// Short variant name, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Include(_) => "include",
            Self::Pragma(_) => "pragma",
            Self::Comment(_) => "comment",
            Self::Struct(_) => "struct",
            Self::Class(_) => "class",
            Self::Enum(_) => "enum",
            Self::Function(_) => "function",
            Self::Namespace(_) => "namespace",
            Self::Conditional(_) => "conditional",
            Self::Delegate(_) => "delegate",
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn count(&self) -> usize {
        let nested: usize = match self {
            Self::Namespace(ns) => ns.children.iter().map(Node::count).sum(),
            Self::Conditional(c) => std::iter::once(&c.if_branch)
                .chain(&c.else_if_branches)
                .flat_map(|b| &b.children)
                .chain(&c.else_branch)
                .map(Node::count)
                .sum(),
            _ => 0,
        };
        1 + nested
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_variant!(
    Include,
    Pragma,
    Struct,
    Class,
    Enum,
    Function,
    Namespace,
    Conditional,
    Delegate,
);

impl From<CommentBlock> for Node {
    fn from(node: CommentBlock) -> Self {
        Self::Comment(node)
    }
}
