use super::CppPrinter;
use crate::{Result, decorator::Decorated, tree::Enum};

/// Storage type of every generated enumeration.
const UNDERLYING_TYPE: &str = "uint8";

impl CppPrinter {
    pub(super) fn emit_enum(&mut self, e: &Enum) -> Result<()> {
        self.select_for(e.residence);
        self.write_doc(&e.doc);
        if e.decorated {
            self.decorator
                .write_annotations(self.router.current(), Decorated::Enum(e));
        }

        self.out().write("enum class ");
        self.write_type(&e.ty)?;
        self.out()
            .write(" : ")
            .write_line(UNDERLYING_TYPE)
            .write_line("{")
            .indent();

        for element in e.sorted_elements() {
            let line = format!("{} = {},", element.name, element.value);
            self.out().write_line(&line);
        }

        self.out().dedent()?.write_line("};").new_line();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{emitted, printer, unreal_printer};
    use crate::tree::{CppType, Enum, Residence};

    #[test]
    fn test_elements_sorted_by_value() {
        let e = Enum::new(CppType::enum_("EColor"))
            .element("B", 2)
            .element("A", 1);

        let (decl, _) = emitted(printer(), &[e.into()]).unwrap();

        assert_eq!(
            decl,
            "enum class EColor : uint8\n\
             {\n    \
                 A = 1,\n    \
                 B = 2,\n\
             };\n\
             \n"
        );
    }

    #[test]
    fn test_equal_values_keep_input_order() {
        let e = Enum::new(CppType::enum_("EAlias"))
            .element("Second", 0)
            .element("First", 0)
            .element("Negative", -1);

        let (decl, _) = emitted(printer(), &[e.into()]).unwrap();

        let negative = decl.find("Negative = -1,").unwrap();
        let second = decl.find("Second = 0,").unwrap();
        let first = decl.find("First = 0,").unwrap();
        assert!(negative < second && second < first);
    }

    #[test]
    fn test_empty_enum() {
        let e = Enum::new(CppType::enum_("ENone")).residence(Residence::DefOnly);
        let (decl, def) = emitted(printer(), &[e.into()]).unwrap();
        assert_eq!(decl, "");
        assert_eq!(def, "enum class ENone : uint8\n{\n};\n\n");
    }

    #[test]
    fn test_decorated_enum() {
        let e = Enum::new(CppType::enum_("EMood"))
            .doc("How the greeter feels.")
            .element("Happy", 0)
            .decorated();

        let (decl, _) = emitted(unreal_printer(), &[e.into()]).unwrap();

        assert!(decl.starts_with(
            "/**\n * How the greeter feels.\n */\nUENUM(BlueprintType)\nenum class EMood : uint8\n"
        ));
    }
}
