//! Namespaces and conditional-compilation blocks.
//!
//! Children may switch streams freely, so both scopes reselect their own
//! stream before writing the closing tokens.

use super::CppPrinter;
use crate::{
    Result,
    tree::{Conditional, Namespace, Node, Residence},
};

impl CppPrinter {
    pub(super) fn emit_namespace(&mut self, ns: &Namespace) -> Result<()> {
        self.select_for(ns.residence);
        self.separate();
        if ns.is_anonymous() {
            self.out().write_line("namespace // anonymous");
        } else {
            self.out().write("namespace ").write_line(&ns.name);
        }
        self.out().write_line("{").indent();

        self.emit_all(&ns.children)?;

        self.select_for(ns.residence);
        self.collapse_trailing_blank();
        let out = self.out().dedent()?;
        if ns.is_anonymous() {
            out.write_line("} // end anonymous namespace");
        } else {
            out.write("} // end namespace '").write(&ns.name).write_line("'");
        }
        out.new_line();

        self.router.select_declarations();
        Ok(())
    }

    pub(super) fn emit_conditional(&mut self, c: &Conditional) -> Result<()> {
        self.select_for(c.residence);
        self.separate();

        self.out().write("#if ").write_line(&c.if_branch.condition);
        self.emit_branch(&c.if_branch.children, c.residence)?;

        for branch in &c.else_if_branches {
            self.out().write("#elif ").write_line(&branch.condition);
            self.emit_branch(&branch.children, c.residence)?;
        }

        if !c.else_branch.is_empty() {
            self.out().write_line("#else");
            self.emit_branch(&c.else_branch, c.residence)?;
        }

        self.out().write_line("#endif").new_line();
        Ok(())
    }

    /// Children of one arm, indented one level, leaving the block's own
    /// stream selected.
    fn emit_branch(&mut self, children: &[Node], residence: Residence) -> Result<()> {
        self.out().indent();
        self.emit_all(children)?;
        self.select_for(residence);
        self.collapse_trailing_blank();
        self.out().dedent()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{emitted, printer};
    use crate::{
        builder::Stream,
        tree::{
            Branch, Conditional, CppType, Enum, Function, Include, Namespace, Node, Residence,
            Struct,
        },
    };

    #[test]
    fn test_named_namespace() {
        let ns = Namespace::new("game").child(Struct::new(CppType::struct_("FPawn")));

        let (decl, _) = emitted(printer(), &[ns.into()]).unwrap();

        assert_eq!(
            decl,
            "namespace game\n\
             {\n    \
                 struct FPawn\n    \
                 {\n    \
                 };\n\
             } // end namespace 'game'\n\
             \n"
        );
    }

    #[test]
    fn test_anonymous_namespace() {
        let ns = Namespace::anonymous().residence(Residence::DefOnly);
        let (_, def) = emitted(printer(), &[ns.into()]).unwrap();
        assert_eq!(def, "namespace // anonymous\n{\n} // end anonymous namespace\n\n");
    }

    #[test]
    fn test_namespace_resets_to_declarations() {
        let mut p = printer();
        let ns = Namespace::new("impl").residence(Residence::DefOnly);
        p.emit(&ns.into()).unwrap();
        assert_eq!(p.selected(), Stream::Declarations);
    }

    #[test]
    fn test_namespace_closes_in_its_own_stream() {
        let inner = Function::new("Run", CppType::new("void"))
            .residence(Residence::Split)
            .declared_in(CppType::class("FJob"));
        let ns = Namespace::new("jobs").child(inner);

        let (decl, def) = emitted(printer(), &[ns.into()]).unwrap();

        assert!(decl.ends_with("    void Run();\n} // end namespace 'jobs'\n\n"));
        assert_eq!(def, "void FJob::Run()\n{\n}\n\n");
    }

    #[test]
    fn test_conditional_without_else() {
        let c = Conditional::new(
            Branch::new("WITH_EDITOR").child(Enum::new(CppType::enum_("EMode")).element("Edit", 0)),
        );

        let (decl, _) = emitted(printer(), &[c.into()]).unwrap();

        assert_eq!(
            decl,
            "#if WITH_EDITOR\n    \
                 enum class EMode : uint8\n    \
                 {\n        \
                     Edit = 0,\n    \
                 };\n\
             #endif\n\
             \n"
        );
        assert!(!decl.contains("#else"));
    }

    #[test]
    fn test_conditional_with_all_arms() {
        let body = |name: &str| -> Node {
            Function::new(name, CppType::new("void"))
                .residence(Residence::DefOnly)
                .into()
        };
        let c = Conditional::new(Branch::new("PLATFORM_WINDOWS").child(body("Win")))
            .else_if(Branch::new("PLATFORM_LINUX").child(body("Linux")))
            .otherwise(body("Other"))
            .residence(Residence::DefOnly);

        let (_, def) = emitted(printer(), &[c.into()]).unwrap();

        assert_eq!(
            def,
            "#if PLATFORM_WINDOWS\n    \
                 void Win()\n    \
                 {\n    \
                 }\n\
             #elif PLATFORM_LINUX\n    \
                 void Linux()\n    \
                 {\n    \
                 }\n\
             #else\n    \
                 void Other()\n    \
                 {\n    \
                 }\n\
             #endif\n\
             \n"
        );
    }

    #[test]
    fn test_conditional_separates_from_previous_block() {
        let first = Function::new("First", CppType::new("void")).residence(Residence::DefOnly);
        let c = Conditional::new(Branch::new("DEBUG")).residence(Residence::DefOnly);

        let mut p = printer();
        p.emit(&first.into()).unwrap();
        p.emit(&c.into()).unwrap();

        let def = p.render().definitions;
        assert!(def.ends_with("void First()\n{\n}\n\n#if DEBUG\n#endif\n\n"));
    }

    #[test]
    fn test_namespace_separates_from_includes() {
        let nodes: [Node; 2] = [
            Include::new("CoreMinimal.h").into(),
            Namespace::new("game").into(),
        ];
        let (decl, _) = emitted(printer(), &nodes).unwrap();
        assert_eq!(
            decl,
            "#include \"CoreMinimal.h\"\n\nnamespace game\n{\n} // end namespace 'game'\n\n"
        );
    }

    #[test]
    fn test_nested_namespaces() {
        let ns = Namespace::new("outer").child(Namespace::new("inner"));
        let (decl, _) = emitted(printer(), &[ns.into()]).unwrap();
        assert_eq!(
            decl,
            "namespace outer\n\
             {\n    \
                 namespace inner\n    \
                 {\n    \
                 } // end namespace 'inner'\n\
             } // end namespace 'outer'\n\
             \n"
        );
    }
}
