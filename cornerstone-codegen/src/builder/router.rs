//! Selection between the declarations and definitions buffers.

use super::{Indent, TextBuffer};

/// One of the two output streams of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// The header (`.h`) artifact.
    Declarations,
    /// The source (`.cpp`) artifact.
    Definitions,
}

/// Owns both buffers and the "current" selector.
///
/// Emission code only ever writes to [`StreamRouter::current`]; switching
/// the selection is the only way the destination of output changes.
#[derive(Debug, Clone)]
pub struct StreamRouter {
    declarations: TextBuffer,
    definitions: TextBuffer,
    current: Stream,
}

impl StreamRouter {
    /// Create a router with two empty buffers, pointing at declarations.
    pub fn new(indent: Indent) -> Self {
        Self {
            declarations: TextBuffer::new(indent),
            definitions: TextBuffer::new(indent),
            current: Stream::Declarations,
        }
    }

    /// Point subsequent writes at the declarations buffer.
    pub fn select_declarations(&mut self) {
        self.select(Stream::Declarations);
    }

    /// Point subsequent writes at the definitions buffer.
    pub fn select_definitions(&mut self) {
        self.select(Stream::Definitions);
    }

    pub fn select(&mut self, stream: Stream) {
        self.current = stream;
    }

    /// The stream currently selected.
    pub fn selected(&self) -> Stream {
        self.current
    }

    /// The buffer currently selected.
    pub fn current(&mut self) -> &mut TextBuffer {
        match self.current {
            Stream::Declarations => &mut self.declarations,
            Stream::Definitions => &mut self.definitions,
        }
    }

    /// Read-only view of one buffer.
    pub fn buffer(&self, stream: Stream) -> &TextBuffer {
        match stream {
            Stream::Declarations => &self.declarations,
            Stream::Definitions => &self.definitions,
        }
    }

    /// Consume the router, returning `(declarations, definitions)`.
    pub fn into_buffers(self) -> (TextBuffer, TextBuffer) {
        (self.declarations, self.definitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_declarations() {
        let router = StreamRouter::new(Indent::Tab);
        assert_eq!(router.selected(), Stream::Declarations);
    }

    #[test]
    fn test_writes_follow_selection() {
        let mut router = StreamRouter::new(Indent::Tab);
        router.current().write_line("void Tick();");
        router.select_definitions();
        router.current().write_line("void Tick() {}");
        router.select_declarations();
        router.current().write_line("int32 Count;");

        assert_eq!(
            router.buffer(Stream::Declarations).build(),
            "void Tick();\nint32 Count;\n"
        );
        assert_eq!(router.buffer(Stream::Definitions).build(), "void Tick() {}\n");
    }

    #[test]
    fn test_indentation_is_per_buffer() {
        let mut router = StreamRouter::new(Indent::Tab);
        router.current().indent();
        router.select_definitions();
        router.current().write_line("a");
        router.select_declarations();
        router.current().write_line("b");

        let (decl, def) = router.into_buffers();
        assert_eq!(decl.build(), "\tb\n");
        assert_eq!(def.build(), "a\n");
    }
}
