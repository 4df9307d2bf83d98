//! Structs, classes and fields.

use super::CppPrinter;
use crate::{
    Result,
    decorator::Decorated,
    tree::{Class, CppType, Field, Record, Struct},
};

impl CppPrinter {
    pub(super) fn emit_struct(&mut self, s: &Struct) -> Result<()> {
        let record = &s.record;
        self.select_for(record.residence);
        self.write_record_body(record, "struct", None, Decorated::Struct(s))?;

        self.select_for(record.residence);
        self.close_record()
    }

    pub(super) fn emit_class(&mut self, c: &Class) -> Result<()> {
        let record = &c.record;
        self.select_for(record.residence);
        self.write_record_body(record, "class", c.base.as_ref(), Decorated::Class(c))?;

        // Methods pick their own stream; give the definitions a clean start.
        if record.residence.touches_definitions() {
            let previous = self.selected();
            self.router.select_definitions();
            self.separate();
            self.router.select(previous);
        }

        if c.has_methods() {
            if record.has_fields() {
                self.separate();
            } else {
                self.write_public_label()?;
            }
            self.write_inline_comment("Methods");
            for method in &c.methods {
                self.emit_function(method, Some(&record.ty))?;
            }
            self.select_for(record.residence);
        }

        self.close_record()
    }

    /// Everything up to (and including) the fields: doc, annotations, head,
    /// opening brace, generated body, friends and the public section.
    fn write_record_body(
        &mut self,
        record: &Record,
        keyword: &str,
        base: Option<&CppType>,
        node: Decorated<'_>,
    ) -> Result<()> {
        self.write_doc(&record.doc);
        if record.decorated {
            self.decorator.write_annotations(self.router.current(), node);
        }

        self.out().write(keyword).write(" ");
        self.decorator.write_api(self.router.current());
        self.write_type(&record.ty)?;
        if let Some(base) = base {
            self.out().write(" : public ");
            self.write_type(base)?;
        }
        self.out().new_line().write_line("{").indent();

        if record.decorated {
            self.decorator
                .write_generated_body(self.router.current(), node);
        }

        if !record.friends.is_empty() {
            for friend in &record.friends {
                self.out().write("friend ").write(friend.kind.keyword()).write(" ");
                self.write_type(friend)?;
                self.out().write_line(";");
            }
            self.out().new_line();
        }

        if record.has_fields() {
            self.write_public_label()?;
            self.write_inline_comment("Fields");
            for field in &record.fields {
                self.write_field(field)?;
                self.out().new_line();
            }
        }

        Ok(())
    }

    fn write_public_label(&mut self) -> Result<()> {
        self.separate();
        self.out().dedent()?.write_line("public:").indent();
        Ok(())
    }

    fn write_field(&mut self, field: &Field) -> Result<()> {
        self.write_doc(&field.doc);
        if field.decorated {
            self.decorator
                .write_annotations(self.router.current(), Decorated::Field(field));
        }
        self.write_type(&field.ty)?;
        self.out().write(" ").write(&field.name).write_line(";");
        Ok(())
    }

    fn close_record(&mut self) -> Result<()> {
        self.collapse_trailing_blank();
        self.out().dedent()?.write_line("};").new_line();
        Ok(())
    }
}
