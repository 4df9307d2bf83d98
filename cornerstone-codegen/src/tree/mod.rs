//! The declaration tree consumed by the printer.
//!
//! Nodes are plain data: the printer never mutates them. A [`Function`]
//! refers to its declaring record by type rather than by pointer, so the
//! tree stays acyclic by construction.

mod delegate;
mod doc;
mod enums;
mod function;
mod namespace;
mod node;
mod preprocessor;
mod record;
mod residence;
mod types;

pub use delegate::Delegate;
pub use doc::{CommentBlock, DocComment};
pub use enums::{Enum, EnumElement};
pub use function::{Argument, Function, InlineModifier};
pub use namespace::Namespace;
pub use node::Node;
pub use preprocessor::{Branch, Conditional, Include, IncludeStyle, Pragma};
pub use record::{Class, Field, Record, Struct};
pub use residence::Residence;
pub use types::{CppType, Passage, TypeKind};
