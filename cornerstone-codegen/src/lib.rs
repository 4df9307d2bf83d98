//! Declaration tree and dual-stream C++ emitter for the Cornerstone generator.
//!
//! A run takes an immutable tree of [`tree::Node`]s and renders it into a
//! header (declarations) and a source file (definitions) at the same time.
//! Every node carries a [`tree::Residence`] that decides which of the two it
//! lands in.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text buffers and the stream router
//! - [`tree`] - The declaration tree consumed by the printer
//! - [`decorator`] - Engine metadata hooks (`USTRUCT`, `UFUNCTION`, ...)
//! - [`printer`] - The emission engine
//! - [`config`] - Printer settings
//!
//! # Example
//!
//! ```
//! use cornerstone_codegen::{
//!     CppPrinter, PrinterConfig,
//!     decorator::NoDecorator,
//!     tree::{Argument, Class, CppType, Function, Residence},
//! };
//!
//! let greet = Function::new("Greet", CppType::new("FString"))
//!     .arg(Argument::new("Name", CppType::new("FString").by_ref()))
//!     .residence(Residence::Split)
//!     .body_line("return Name;");
//! let greeter = Class::new(CppType::class("FGreeter"))
//!     .method(greet)
//!     .residence(Residence::Split);
//!
//! let mut printer = CppPrinter::new("Greeter", PrinterConfig::default(), Box::new(NoDecorator));
//! printer.emit(&greeter.into())?;
//!
//! let rendered = printer.render();
//! assert!(rendered.declarations.contains("FString Greet(const FString& Name);"));
//! assert!(rendered.definitions.contains("FString FGreeter::Greet(const FString& Name)"));
//! # Ok::<(), cornerstone_codegen::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod decorator;
mod error;
pub mod printer;
pub mod tree;

pub use config::PrinterConfig;
pub use error::{Error, Result};
pub use printer::{CppPrinter, Rendered};
