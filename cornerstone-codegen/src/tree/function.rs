//! Functions, methods and their arguments.

use serde::{Deserialize, Serialize};

use super::{CppType, DocComment, Residence};

/// A named function argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: CppType,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: CppType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineModifier {
    #[default]
    None,
    Inline,
    ForceInline,
}

impl InlineModifier {
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Inline => Some("inline"),
            Self::ForceInline => Some("FORCEINLINE"),
        }
    }
}

/// A free function or a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub return_type: CppType,
    #[serde(default)]
    pub args: Vec<Argument>,
    /// Template parameters. `Some(vec![])` renders `template <>`.
    #[serde(default)]
    pub generic_params: Option<Vec<CppType>>,
    #[serde(default)]
    pub residence: Residence,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_override: bool,
    #[serde(default)]
    pub inline: InlineModifier,
    /// Pre-rendered body lines, written verbatim.
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub doc: DocComment,
    #[serde(default)]
    pub decorated: bool,
    /// The record this function is a member of. Methods listed inside a
    /// class fall back to that class when this is unset.
    #[serde(default)]
    pub declaring_type: Option<CppType>,
}

impl Function {
    pub fn new(name: impl Into<String>, return_type: CppType) -> Self {
        Self {
            name: name.into(),
            return_type,
            args: Vec::new(),
            generic_params: None,
            residence: Residence::DeclOnly,
            is_virtual: false,
            is_static: false,
            is_const: false,
            is_override: false,
            inline: InlineModifier::None,
            body: Vec::new(),
            doc: DocComment::default(),
            decorated: false,
            declaring_type: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<DocComment>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = Argument>) -> Self {
        self.args.extend(args);
        self
    }

    /// Make this a template with the given parameters.
    pub fn generic(mut self, params: impl IntoIterator<Item = CppType>) -> Self {
        self.generic_params = Some(params.into_iter().collect());
        self
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.residence = residence;
        self
    }

    pub fn virtual_(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn inline(mut self, modifier: InlineModifier) -> Self {
        self.inline = modifier;
        self
    }

    /// Add a line to the body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    pub fn decorated(mut self) -> Self {
        self.decorated = true;
        self
    }

    pub fn declared_in(mut self, owner: CppType) -> Self {
        self.declaring_type = Some(owner);
        self
    }

    pub fn is_generic(&self) -> bool {
        self.generic_params.is_some()
    }
}
