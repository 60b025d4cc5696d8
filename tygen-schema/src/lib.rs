//! Resolved schema type graph for the tygen generators.
//!
//! This crate defines the read-only representation of a schema type system:
//! scalars, enums, object and input object types, lists, and non-null
//! wrappers. The graph is produced by a schema-loading front end and handed
//! to the generator crates, which only ever read it.

mod types;

pub use types::{
    EnumType, EnumValue, InputField, InputObjectType, ObjectType, ScalarType, SchemaType,
};
