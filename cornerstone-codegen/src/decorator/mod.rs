//! Engine metadata decoration.
//!
//! The printer calls a [`Decorator`] at three fixed points: before a
//! decorated declaration, right after the record keyword (export token) and
//! right inside an opened record body. [`NoDecorator`] writes nothing, which
//! is the same as never calling the hooks at all.

mod unreal;

use serde::Deserialize;

pub use unreal::UnrealDecorator;

use crate::{
    builder::TextBuffer,
    tree::{Class, Enum, Field, Function, Struct},
};

/// The declaration a decoration is requested for.
#[derive(Debug, Clone, Copy)]
pub enum Decorated<'a> {
    Struct(&'a Struct),
    Class(&'a Class),
    Field(&'a Field),
    Function(&'a Function),
    Enum(&'a Enum),
}

/// Pluggable writer of engine-specific metadata.
pub trait Decorator {
    /// Write zero or more annotation lines before a declaration.
    fn write_annotations(&self, out: &mut TextBuffer, node: Decorated<'_>);

    /// Write the export-visibility token, inline, after a record keyword.
    fn write_api(&self, out: &mut TextBuffer);

    /// Write the preamble placed first inside a decorated record body.
    fn write_generated_body(&self, out: &mut TextBuffer, node: Decorated<'_>);
}

/// Decorator that emits nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecorator;

impl Decorator for NoDecorator {
    fn write_annotations(&self, _out: &mut TextBuffer, _node: Decorated<'_>) {}

    fn write_api(&self, _out: &mut TextBuffer) {}

    fn write_generated_body(&self, _out: &mut TextBuffer, _node: Decorated<'_>) {}
}

/// Selects a decorator implementation by name in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecoratorKind {
    None,
    #[default]
    Unreal,
}

impl DecoratorKind {
    /// Build the decorator, handing it the export module name.
    pub fn build(self, api_name: &str) -> Box<dyn Decorator> {
        match self {
            Self::None => Box::new(NoDecorator),
            Self::Unreal => Box::new(UnrealDecorator::new(api_name)),
        }
    }
}

impl std::str::FromStr for DecoratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "unreal" => Ok(Self::Unreal),
            other => Err(format!(
                "unknown decorator '{other}', expected 'none' or 'unreal'"
            )),
        }
    }
}
