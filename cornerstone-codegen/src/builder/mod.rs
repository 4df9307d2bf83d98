//! Output building blocks.
//!
//! - [`TextBuffer`] - Indentation-aware, line-oriented text sink
//! - [`StreamRouter`] - The declarations/definitions buffer pair and its selector
//! - [`Indent`] - Indentation configuration

mod indent;
mod router;
mod text_buffer;

pub use indent::Indent;
pub use router::{Stream, StreamRouter};
pub use text_buffer::TextBuffer;
