//! The dual-stream C++ printer.
//!
//! [`CppPrinter`] walks a declaration tree depth-first and renders every node
//! into the declarations (`.h`) or definitions (`.cpp`) buffer, as dictated by
//! the node's [`Residence`]. All writes go through the currently selected
//! buffer of the [`StreamRouter`].

mod delegates;
mod directives;
mod enums;
mod functions;
mod records;
mod scopes;

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use cornerstone_core::{Artifact, persist_all};

use crate::{
    Error, Result,
    builder::{Stream, StreamRouter, TextBuffer},
    config::PrinterConfig,
    decorator::Decorator,
    tree::{Argument, CppType, DocComment, Node, Pragma, Residence},
};

const SEPARATOR: &str = ", ";

/// Both artifacts of a run, rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub declarations: String,
    pub definitions: String,
}

/// Renders declaration trees into a header/source pair.
///
/// One printer serves exactly one run: create it, [`emit`](Self::emit) the
/// top-level nodes in order, then [`finish`](Self::finish) to persist
/// `<destination><header_extension>` and `<destination><source_extension>`.
///
/// # Example
///
/// ```
/// use cornerstone_codegen::{
///     CppPrinter, PrinterConfig,
///     decorator::NoDecorator,
///     tree::{CppType, Function, Node, Residence},
/// };
///
/// let mut printer = CppPrinter::new("Greeter", PrinterConfig::default(), Box::new(NoDecorator));
/// let hello = Function::new("Hello", CppType::new("void")).residence(Residence::DefOnly);
/// printer.emit(&Node::Function(hello)).unwrap();
///
/// let rendered = printer.render();
/// assert!(rendered.declarations.contains("#pragma once"));
/// assert!(rendered.definitions.contains("void Hello()\n{\n}\n"));
/// ```
pub struct CppPrinter {
    destination: PathBuf,
    config: PrinterConfig,
    router: StreamRouter,
    decorator: Box<dyn Decorator>,
}

impl CppPrinter {
    /// Create a printer and write the banner into both buffers, followed by
    /// the include guard in the declarations buffer.
    pub fn new(
        destination: impl Into<PathBuf>,
        config: PrinterConfig,
        decorator: Box<dyn Decorator>,
    ) -> Self {
        let mut printer = Self {
            destination: destination.into(),
            router: StreamRouter::new(config.indent),
            config,
            decorator,
        };

        for stream in [Stream::Declarations, Stream::Definitions] {
            printer.router.select(stream);
            printer.out().new_line();
            for line in printer.config.banner.clone() {
                printer.write_inline_comment(&line);
            }
            printer.out().new_line();
        }

        printer.write_pragma(&Pragma::once());
        printer.out().new_line();
        printer
    }

    /// Emit one node (and, recursively, its children).
    pub fn emit(&mut self, node: &Node) -> Result<()> {
        tracing::trace!(kind = node.kind_name(), residence = ?node.residence(), "emitting node");

        match node {
            Node::Include(include) => {
                self.write_include(include);
                Ok(())
            }
            Node::Pragma(pragma) => {
                self.write_pragma(pragma);
                Ok(())
            }
            Node::Comment(comment) => {
                self.select_for(comment.residence);
                self.write_doc(&comment.doc);
                Ok(())
            }
            Node::Struct(s) => self.emit_struct(s),
            Node::Class(c) => self.emit_class(c),
            Node::Enum(e) => self.emit_enum(e),
            Node::Function(f) => self.emit_function(f, None),
            Node::Namespace(ns) => self.emit_namespace(ns),
            Node::Conditional(c) => self.emit_conditional(c),
            Node::Delegate(d) => self.emit_delegate(d),
        }
    }

    /// Emit every node in order, stopping at the first failure.
    pub fn emit_all<'a>(&mut self, nodes: impl IntoIterator<Item = &'a Node>) -> Result<()> {
        nodes.into_iter().try_for_each(|node| self.emit(node))
    }

    /// The stream subsequent writes go to.
    pub fn selected(&self) -> Stream {
        self.router.selected()
    }

    /// Destination paths of the header and source artifacts.
    pub fn artifact_paths(&self) -> (PathBuf, PathBuf) {
        (
            with_extension(&self.destination, &self.config.header_extension),
            with_extension(&self.destination, &self.config.source_extension),
        )
    }

    /// Consume the printer and return both artifacts without touching disk.
    pub fn render(self) -> Rendered {
        let (declarations, definitions) = self.router.into_buffers();
        Rendered {
            declarations: declarations.build(),
            definitions: definitions.build(),
        }
    }

    /// Consume the printer and persist both artifacts.
    ///
    /// Returns the header and source paths that were written.
    pub fn finish(self) -> Result<(PathBuf, PathBuf)> {
        let (header, source) = self.artifact_paths();
        let rendered = self.render();
        tracing::debug!(
            header = %header.display(),
            header_bytes = rendered.declarations.len(),
            source = %source.display(),
            source_bytes = rendered.definitions.len(),
            "persisting artifacts"
        );

        persist_all(&[
            Artifact::new(&header, rendered.declarations),
            Artifact::new(&source, rendered.definitions),
        ])
        .map_err(Error::Persist)?;

        Ok((header, source))
    }

    // =========================================================================
    // Buffer primitives
    // =========================================================================

    fn out(&mut self) -> &mut TextBuffer {
        self.router.current()
    }

    fn select_for(&mut self, residence: Residence) {
        self.router.select(residence.primary_stream());
    }

    fn write_inline_comment(&mut self, comment: &str) {
        if comment.is_empty() {
            self.out().write_line("//");
        } else {
            self.out().write("// ").write_line(comment);
        }
    }

    /// Remove the blank line the last child left behind before a scope closes.
    fn collapse_trailing_blank(&mut self) {
        let out = self.out();
        if out.last_line_is_blank() {
            out.remove_last_line();
        }
    }

    /// Make sure the next write starts a new section, separated by a blank
    /// line unless a scope was just opened.
    fn separate(&mut self) {
        let out = self.out();
        if out.has_pending() {
            out.new_line();
        }
        let opens_scope = out.last_line().is_some_and(|l| l.trim_end().ends_with('{'));
        if !out.is_empty() && !out.last_line_is_blank() && !opens_scope {
            out.new_line();
        }
    }

    /// Render each item followed by the separator, then strip the last one.
    fn write_separated<T>(
        &mut self,
        items: &[T],
        mut write_item: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        for item in items {
            write_item(self, item)?;
            self.out().write(SEPARATOR);
        }
        self.out().trim_chars(SEPARATOR.chars().count())?;
        Ok(())
    }

    // =========================================================================
    // Shared renderings
    // =========================================================================

    fn write_doc(&mut self, doc: &DocComment) {
        if doc.is_empty() {
            return;
        }
        let out = self.out();
        out.write_line("/**");
        for line in &doc.lines {
            if line.is_empty() {
                out.write_line(" *");
            } else {
                out.write(" * ").write_line(line);
            }
        }
        out.write_line(" */");
    }

    fn write_type(&mut self, ty: &CppType) -> Result<()> {
        for ns in &ty.namespaces {
            self.out().write(ns).write("::");
        }
        self.out().write(&ty.name);

        if ty.is_generic() {
            self.out().write("<");
            self.write_separated(&ty.generic_args, Self::write_type)?;
            self.out().write(">");
        }

        self.out().write(ty.passage.symbols());
        Ok(())
    }

    /// Type of an argument, `const`-qualified when passed by reference.
    fn write_argument_type(&mut self, ty: &CppType) -> Result<()> {
        if ty.is_by_ref() {
            self.out().write("const ");
        }
        self.write_type(ty)
    }

    fn write_argument(&mut self, arg: &Argument) -> Result<()> {
        self.write_argument_type(&arg.ty)?;
        self.out().write(" ").write(&arg.name);
        Ok(())
    }
}

fn with_extension(prefix: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(prefix.as_os_str());
    path.push(extension);
    PathBuf::from(path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        builder::Indent,
        decorator::{NoDecorator, UnrealDecorator},
        tree::{Function, Passage},
    };

    fn config() -> PrinterConfig {
        PrinterConfig::default().indent(Indent::FOUR_SPACES)
    }

    pub(crate) fn printer() -> CppPrinter {
        CppPrinter::new("Out", config(), Box::new(NoDecorator))
    }

    pub(crate) fn unreal_printer() -> CppPrinter {
        CppPrinter::new("Out", config(), Box::new(UnrealDecorator::new("Greeter")))
    }

    /// Render through `emit` and strip the fixed banner/guard prologue, so
    /// tests only see what the nodes wrote.
    pub(crate) fn emitted(mut printer: CppPrinter, nodes: &[Node]) -> Result<(String, String)> {
        let prologue = printer_prologue();
        printer.emit_all(nodes)?;
        let rendered = printer.render();
        Ok((
            rendered
                .declarations
                .strip_prefix(&prologue.declarations)
                .expect("declarations prologue")
                .to_string(),
            rendered
                .definitions
                .strip_prefix(&prologue.definitions)
                .expect("definitions prologue")
                .to_string(),
        ))
    }

    fn printer_prologue() -> Rendered {
        printer().render()
    }

    #[test]
    fn test_prologue() {
        let rendered = printer().render();
        let banner = "\n\
            //\n\
            // This file has been generated by the Cornerstone file generator.\n\
            //\n\
            // PLEASE, DO NOT EDIT IT MANUALLY\n\
            //\n\
            \n";
        assert_eq!(rendered.declarations, format!("{banner}#pragma once\n\n"));
        assert_eq!(rendered.definitions, banner);
    }

    #[test]
    fn test_prologue_with_custom_banner() {
        let config = config().banner(["Generated"]);
        let rendered = CppPrinter::new("Out", config, Box::new(NoDecorator)).render();
        assert_eq!(rendered.declarations, "\n// Generated\n\n#pragma once\n\n");
        assert_eq!(rendered.definitions, "\n// Generated\n\n");
    }

    #[test]
    fn test_type_rendering() {
        let mut p = printer();
        p.router.select(Stream::Definitions);
        let ty = CppType::generic(
            "TMap",
            [
                CppType::new("FString"),
                CppType::generic("TArray", [CppType::new("int32")]),
            ],
        )
        .namespace("ue")
        .by_ref();
        p.write_type(&ty).unwrap();
        p.out().new_line();
        p.write_argument(&Argument::new("Lookup", ty.clone())).unwrap();
        p.out().new_line();
        p.write_argument(&Argument::new("Raw", CppType::new("uint8").passage(Passage::ByPtr)))
            .unwrap();

        let rendered = p.render();
        assert!(rendered.definitions.ends_with(
            "ue::TMap<FString, TArray<int32>>&\n\
             const ue::TMap<FString, TArray<int32>>& Lookup\n\
             uint8* Raw"
        ));
    }

    #[test]
    fn test_separated_empty_list_is_noop() {
        let mut p = printer();
        p.out().write("(");
        p.write_separated(&[] as &[Argument], CppPrinter::write_argument)
            .unwrap();
        p.out().write(")");
        assert!(p.render().declarations.ends_with("\n()"));
    }

    #[test]
    fn test_doc_block() {
        let doc = DocComment::new(["Greets a user.", "", "Thread safe."]);
        let comment = crate::tree::CommentBlock::new(doc);
        let (decl, _) = emitted(printer(), &[comment.into()]).unwrap();
        assert_eq!(decl, "/**\n * Greets a user.\n *\n * Thread safe.\n */\n");
    }

    #[test]
    fn test_empty_doc_writes_nothing() {
        let comment = crate::tree::CommentBlock::new(DocComment::default());
        let (decl, def) = emitted(printer(), &[comment.into()]).unwrap();
        assert_eq!(decl, "");
        assert_eq!(def, "");
    }

    #[test]
    fn test_artifact_paths() {
        let p = CppPrinter::new("out/Greeter", config(), Box::new(NoDecorator));
        let (header, source) = p.artifact_paths();
        assert_eq!(header, PathBuf::from("out/Greeter.h"));
        assert_eq!(source, PathBuf::from("out/Greeter.cpp"));
    }

    #[test]
    fn test_finish_persists_both_artifacts() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut p = CppPrinter::new(temp.path().join("Greeter"), config(), Box::new(NoDecorator));
        let f = Function::new("Greet", CppType::new("void")).residence(Residence::DefOnly);
        p.emit(&f.into()).unwrap();

        let (header, source) = p.finish().unwrap();

        let header_text = std::fs::read_to_string(header).unwrap();
        let source_text = std::fs::read_to_string(source).unwrap();
        assert!(header_text.contains("#pragma once"));
        assert!(source_text.ends_with("void Greet()\n{\n}\n\n"));
    }

    #[test]
    fn test_finish_reports_persist_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let p = CppPrinter::new(blocker.join("Greeter"), config(), Box::new(NoDecorator));
        let err = p.finish().unwrap_err();

        assert!(matches!(err, Error::Persist(_)));
        assert!(!err.is_invariant_violation());
    }
}
