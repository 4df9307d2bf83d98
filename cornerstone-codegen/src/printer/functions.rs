//! Functions and methods, including the split declaration/definition form.

use super::CppPrinter;
use crate::{
    Error, Result,
    decorator::Decorated,
    tree::{CppType, Function, Residence},
};

impl CppPrinter {
    /// Emit a function. `owner` is the class whose method list holds it, if
    /// any; an explicit `declaring_type` on the function takes precedence.
    pub(super) fn emit_function(&mut self, f: &Function, owner: Option<&CppType>) -> Result<()> {
        if f.decorated && f.is_generic() {
            return Err(Error::DecoratedGeneric {
                function: f.name.clone(),
            });
        }
        let owner = f.declaring_type.as_ref().or(owner);
        if f.residence == Residence::Split && owner.is_none() {
            return Err(Error::MissingDeclaringRecord {
                function: f.name.clone(),
            });
        }

        self.select_for(f.residence);
        self.write_function_head(f, owner, false)?;

        if f.residence == Residence::Split {
            self.out().write(";").new_line().new_line();
            self.router.select_definitions();
            self.write_function_head(f, owner, true)?;
        }

        self.out().new_line().write_line("{").indent();
        for line in &f.body {
            self.out().write_line(line);
        }
        self.out().dedent()?.write("}").new_line().new_line();
        Ok(())
    }

    /// Everything before the body. The definition form drops the keywords
    /// and decorations that are only legal inside a class, and qualifies the
    /// name with the declaring record.
    fn write_function_head(
        &mut self,
        f: &Function,
        owner: Option<&CppType>,
        definition: bool,
    ) -> Result<()> {
        if !definition {
            self.write_doc(&f.doc);

            if let Some(params) = &f.generic_params {
                self.out().write("template <");
                self.write_separated(params, |p, param| {
                    p.out().write("typename ");
                    p.write_type(param)
                })?;
                self.out().write_line(">");
            }

            if f.decorated {
                self.decorator
                    .write_annotations(self.router.current(), Decorated::Function(f));
            }

            if let Some(keyword) = f.inline.keyword() {
                self.out().write(keyword).write(" ");
            }
            if f.is_virtual {
                self.out().write("virtual ");
            }
            if f.is_static {
                self.out().write("static ");
            }
        }

        self.write_type(&f.return_type)?;
        self.out().write(" ");

        if definition {
            let owner = owner.ok_or_else(|| Error::MissingDeclaringRecord {
                function: f.name.clone(),
            })?;
            self.write_type(owner)?;
            self.out().write("::");
        }

        self.out().write(&f.name).write("(");
        self.write_separated(&f.args, Self::write_argument)?;
        self.out().write(")");

        if f.is_const {
            self.out().write(" const");
        }
        if f.is_override && !definition {
            self.out().write(" override");
        }
        Ok(())
    }
}
