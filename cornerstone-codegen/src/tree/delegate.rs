use serde::{Deserialize, Serialize};

use super::{Argument, CppType, Residence};

/// An event-delegate declared through one of the multicast delegate macros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegate {
    #[serde(rename = "type")]
    pub ty: CppType,
    /// Macro suffix such as `OneParam`; empty for no suffix.
    #[serde(default)]
    pub tense: String,
    #[serde(default)]
    pub args: Vec<Argument>,
    /// Dynamic delegates are visible to the engine's reflection system.
    #[serde(default)]
    pub dynamic: bool,
    #[serde(default)]
    pub residence: Residence,
}

impl Delegate {
    pub fn new(ty: CppType) -> Self {
        Self {
            ty,
            tense: String::new(),
            args: Vec::new(),
            dynamic: false,
            residence: Residence::DeclOnly,
        }
    }

    pub fn tense(mut self, tense: impl Into<String>) -> Self {
        self.tense = tense.into();
        self
    }

    pub fn arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.residence = residence;
        self
    }
}
