use serde::{Deserialize, Serialize};

use super::{CppType, DocComment, Residence};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumElement {
    pub name: String,
    pub value: i64,
}

impl EnumElement {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A scoped enumeration with explicit element values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    #[serde(rename = "type")]
    pub ty: CppType,
    #[serde(default)]
    pub elements: Vec<EnumElement>,
    #[serde(default)]
    pub doc: DocComment,
    #[serde(default)]
    pub residence: Residence,
    #[serde(default)]
    pub decorated: bool,
}

impl Enum {
    pub fn new(ty: CppType) -> Self {
        Self {
            ty,
            elements: Vec::new(),
            doc: DocComment::default(),
            residence: Residence::DeclOnly,
            decorated: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<DocComment>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn element(mut self, name: impl Into<String>, value: i64) -> Self {
        self.elements.push(EnumElement::new(name, value));
        self
    }

    pub fn residence(mut self, residence: Residence) -> Self {
        self.residence = residence;
        self
    }

    pub fn decorated(mut self) -> Self {
        self.decorated = true;
        self
    }

    /// Elements in ascending value order; equal values keep input order.
    pub fn sorted_elements(&self) -> Vec<&EnumElement> {
        let mut sorted: Vec<_> = self.elements.iter().collect();
        sorted.sort_by_key(|e| e.value);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(e: &Enum) -> Vec<&str> {
        e.sorted_elements().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_value() {
        let e = Enum::new(CppType::enum_("EColor"))
            .element("Blue", 2)
            .element("Red", 0)
            .element("Green", 1);
        assert_eq!(names(&e), vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let e = Enum::new(CppType::enum_("EAlias"))
            .element("Second", 1)
            .element("Zero", 0)
            .element("First", 1);
        assert_eq!(names(&e), vec!["Zero", "Second", "First"]);
    }

    #[test]
    fn test_negative_values() {
        let e = Enum::new(CppType::enum_("ESign"))
            .element("Positive", 1)
            .element("Negative", -1);
        assert_eq!(names(&e), vec!["Negative", "Positive"]);
    }
}
