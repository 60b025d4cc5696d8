//! Shared code emission primitives for the tygen generators.
//!
//! This crate provides the language-agnostic building blocks used by the
//! language-specific generator crates (e.g. `tygen-typescript`):
//!
//! - [`CodeBuilder`] - buffer with indentation tracking
//! - [`CodeFragment`] / [`Renderable`] - intermediate representation for
//!   generated code pieces
//! - [`SourceFormatter`] / [`CanonicalFormatter`] - the formatting seam that
//!   canonicalizes rendered source text
//! - [`CompilerOptions`] - configuration shared across generator backends

mod code_builder;
mod format;
mod indent;
mod options;
mod renderable;

pub use code_builder::CodeBuilder;
pub use format::{CanonicalFormatter, FormatConfig, FormatError, SourceFormatter};
pub use indent::Indent;
pub use options::CompilerOptions;
pub use renderable::{CodeFragment, Renderable};
