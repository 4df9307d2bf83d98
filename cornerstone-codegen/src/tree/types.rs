//! Type references.

use serde::{Deserialize, Serialize};

/// How a value of a type is passed around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Passage {
    #[default]
    ByValue,
    /// Passed by reference; arguments of this type are `const`-qualified.
    ByRef,
    ByPtr,
}

impl Passage {
    /// Suffix appended to the rendered type name.
    pub fn symbols(self) -> &'static str {
        match self {
            Self::ByValue => "",
            Self::ByRef => "&",
            Self::ByPtr => "*",
        }
    }
}

/// What sort of entity a type names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Primitive,
    Struct,
    Class,
    Enum,
}

impl TypeKind {
    /// Elaborated type specifier used in `friend` declarations.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Enum => "enum class",
            Self::Primitive | Self::Class => "class",
        }
    }
}

/// A reference to a C++ type, e.g. `grpc::Status`, `TArray<FString>&`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CppType {
    pub name: String,
    /// Owning namespaces, outermost first.
    #[serde(default)]
    pub namespaces: Vec<String>,
    #[serde(default)]
    pub generic_args: Vec<CppType>,
    #[serde(default)]
    pub passage: Passage,
    #[serde(default)]
    pub kind: TypeKind,
}

impl CppType {
    /// Create a primitive type passed by value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespaces: Vec::new(),
            generic_args: Vec::new(),
            passage: Passage::ByValue,
            kind: TypeKind::Primitive,
        }
    }

    /// Create a struct type.
    pub fn struct_(name: impl Into<String>) -> Self {
        Self::new(name).kind(TypeKind::Struct)
    }

    /// Create a class type.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name).kind(TypeKind::Class)
    }

    /// Create an enum type.
    pub fn enum_(name: impl Into<String>) -> Self {
        Self::new(name).kind(TypeKind::Enum)
    }

    /// Create a generic type, e.g. `TArray<int32>`.
    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = CppType>) -> Self {
        let mut ty = Self::new(name);
        ty.generic_args.extend(args);
        ty
    }

    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append an owning namespace (call outermost first).
    pub fn namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespaces.push(ns.into());
        self
    }

    pub fn passage(mut self, passage: Passage) -> Self {
        self.passage = passage;
        self
    }

    pub fn by_ref(self) -> Self {
        self.passage(Passage::ByRef)
    }

    pub fn by_ptr(self) -> Self {
        self.passage(Passage::ByPtr)
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_args.is_empty()
    }

    pub fn is_by_ref(&self) -> bool {
        self.passage == Passage::ByRef
    }
}
