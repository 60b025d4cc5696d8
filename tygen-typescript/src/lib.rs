//! TypeScript declaration generator for tygen schema graphs.
//!
//! This crate turns a resolved schema type graph ([`tygen_schema`]) into
//! TypeScript declarations and emits formatted source text.
//!
//! # Usage
//!
//! ```
//! use tygen_schema::{EnumType, ScalarType};
//! use tygen_typescript::{CompilerOptions, Generator, Printer};
//!
//! let generator = Generator::new(CompilerOptions::default());
//! let mut printer = Printer::new();
//!
//! let episode = EnumType::new("Episode").value("EMPIRE").value("JEDI");
//! printer.enqueue(generator.enumeration_declaration(&episode));
//!
//! let date = ScalarType::new("Date");
//! printer.enqueue(generator.scalar_declaration(&date));
//!
//! let output = printer.print_and_clear().unwrap();
//! assert!(output.contains("export enum Episode {"));
//! assert!(output.contains("export type Date = any;"));
//! ```
//!
//! Declarations are plain values; callers that want to inspect or compose
//! before printing can hold on to [`ast::Declaration`] instead of enqueuing
//! it right away.

pub mod ast;

mod docstring;
mod generator;
mod printer;
mod type_mapper;

pub use docstring::{Docstring, docstring};
pub use generator::{Generator, ObjectProperty, PropertyOptions, scoped_name};
pub use printer::{Printable, Printer};
pub use type_mapper::TypeMapper;
pub use tygen_codegen::{CanonicalFormatter, CompilerOptions, FormatConfig, FormatError};
