use serde::{Deserialize, Serialize};

use crate::builder::Stream;

/// Which output stream(s) a declaration belongs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Residence {
    /// Header only.
    #[default]
    DeclOnly,
    /// Source file only.
    DefOnly,
    /// Declared in the header, defined in the source file.
    Split,
}

impl Residence {
    /// The stream a node starts writing into.
    ///
    /// Split nodes start with their declaration half.
    pub fn primary_stream(self) -> Stream {
        match self {
            Self::DeclOnly | Self::Split => Stream::Declarations,
            Self::DefOnly => Stream::Definitions,
        }
    }

    /// Every stream that receives output from a node with this residence.
    pub fn streams(self) -> &'static [Stream] {
        match self {
            Self::DeclOnly => &[Stream::Declarations],
            Self::DefOnly => &[Stream::Definitions],
            Self::Split => &[Stream::Declarations, Stream::Definitions],
        }
    }

    /// Whether part of the node lands in the definitions stream.
    pub fn touches_definitions(self) -> bool {
        !matches!(self, Self::DeclOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_stream() {
        assert_eq!(Residence::DeclOnly.primary_stream(), Stream::Declarations);
        assert_eq!(Residence::DefOnly.primary_stream(), Stream::Definitions);
        assert_eq!(Residence::Split.primary_stream(), Stream::Declarations);
    }

    #[test]
    fn test_streams() {
        assert_eq!(Residence::Split.streams().len(), 2);
        assert_eq!(Residence::DefOnly.streams(), &[Stream::Definitions]);
        assert!(!Residence::DeclOnly.touches_definitions());
        assert!(Residence::Split.touches_definitions());
    }
}
