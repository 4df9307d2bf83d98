//! Multicast event-delegate macros.

use super::CppPrinter;
use crate::{Result, tree::Delegate};

/// How one delegate flavour is spelled.
struct MacroShape {
    name: &'static str,
    /// Whether each parameter type is followed by its name.
    named_args: bool,
}

const STATIC: MacroShape = MacroShape {
    name: "DECLARE_MULTICAST_DELEGATE",
    named_args: false,
};

const DYNAMIC: MacroShape = MacroShape {
    name: "DECLARE_DYNAMIC_MULTICAST_DELEGATE",
    named_args: true,
};

impl CppPrinter {
    pub(super) fn emit_delegate(&mut self, d: &Delegate) -> Result<()> {
        let shape = if d.dynamic { &DYNAMIC } else { &STATIC };

        self.select_for(d.residence);
        self.out().write(shape.name);
        if !d.tense.is_empty() {
            self.out().write("_").write(&d.tense);
        }

        self.out().write("(");
        self.write_type(&d.ty)?;
        for arg in &d.args {
            self.out().write(", ");
            self.write_argument_type(&arg.ty)?;
            if shape.named_args {
                self.out().write(", ").write(&arg.name);
            }
        }
        self.out().write(");").new_line().new_line();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{emitted, printer};
    use crate::tree::{Argument, CppType, Delegate, Node};

    fn on_greeted(dynamic: bool) -> Node {
        let d = Delegate::new(CppType::new("FOnGreeted"))
            .tense("TwoParams")
            .arg(Argument::new("Name", CppType::new("FString").by_ref()))
            .arg(Argument::new("Count", CppType::new("int32")));
        let d = if dynamic { d.dynamic() } else { d };
        d.into()
    }

    #[test]
    fn test_static_delegate_omits_names() {
        let (decl, _) = emitted(printer(), &[on_greeted(false)]).unwrap();
        assert_eq!(
            decl,
            "DECLARE_MULTICAST_DELEGATE_TwoParams(FOnGreeted, const FString&, int32);\n\n"
        );
    }

    #[test]
    fn test_dynamic_delegate_names_arguments() {
        let (decl, _) = emitted(printer(), &[on_greeted(true)]).unwrap();
        assert_eq!(
            decl,
            "DECLARE_DYNAMIC_MULTICAST_DELEGATE_TwoParams(FOnGreeted, const FString&, Name, int32, Count);\n\n"
        );
    }

    #[test]
    fn test_delegate_without_tense_or_args() {
        let d = Delegate::new(CppType::new("FOnReady"));
        let (decl, _) = emitted(printer(), &[d.into()]).unwrap();
        assert_eq!(decl, "DECLARE_MULTICAST_DELEGATE(FOnReady);\n\n");
    }
}
