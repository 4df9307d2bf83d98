//! Records: structs, classes and their fields.

use serde::{Deserialize, Serialize};

use super::{CppType, DocComment, Function, Residence};

/// A data member of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: CppType,
    #[serde(default)]
    pub doc: DocComment,
    #[serde(default)]
    pub decorated: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: CppType) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: DocComment::default(),
            decorated: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<DocComment>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn decorated(mut self) -> Self {
        self.decorated = true;
        self
    }
}

/// The part shared by structs and classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub ty: CppType,
    #[serde(default)]
    pub doc: DocComment,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub friends: Vec<CppType>,
    #[serde(default)]
    pub residence: Residence,
    #[serde(default)]
    pub decorated: bool,
}

impl Record {
    pub fn new(ty: CppType) -> Self {
        Self {
            ty,
            doc: DocComment::default(),
            fields: Vec::new(),
            friends: Vec::new(),
            residence: Residence::DeclOnly,
            decorated: false,
        }
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// A plain data `struct`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Struct {
    pub record: Record,
}

impl Struct {
    pub fn new(ty: CppType) -> Self {
        Self {
            record: Record::new(ty),
        }
    }

    pub fn doc(mut self, doc: impl Into<DocComment>) -> Self {
        self.record.doc = doc.into();
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.record.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.record.fields.extend(fields);
        self
    }

    pub fn friend(mut self, ty: CppType) -> Self {
        self.record.friends.push(ty);
        self
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.record.residence = residence;
        self
    }

    pub fn decorated(mut self) -> Self {
        self.record.decorated = true;
        self
    }
}

/// A `class` with an optional base and methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    #[serde(flatten)]
    pub record: Record,
    #[serde(default)]
    pub base: Option<CppType>,
    #[serde(default)]
    pub methods: Vec<Function>,
}

impl Class {
    pub fn new(ty: CppType) -> Self {
        Self {
            record: Record::new(ty),
            base: None,
            methods: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<DocComment>) -> Self {
        self.record.doc = doc.into();
        self
    }

    pub fn base(mut self, base: CppType) -> Self {
        self.base = Some(base);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.record.fields.push(field);
        self
    }

    pub fn friend(mut self, ty: CppType) -> Self {
        self.record.friends.push(ty);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: Function) -> Self {
        self.methods.push(method);
        self
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.record.residence = residence;
        self
    }

    pub fn decorated(mut self) -> Self {
        self.record.decorated = true;
        self
    }

    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty()
    }
}
