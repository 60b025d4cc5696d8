//! TypeScript AST nodes for generated declarations.
//!
//! These model the small subset of TypeScript syntax the generator emits:
//! type expressions, type aliases, enums, and interfaces. Nodes are built
//! fully-formed (documentation included) and rendered through
//! [`tygen_codegen::CodeBuilder`].

mod declarations;
mod types;

pub use declarations::{
    Declaration, EnumDeclaration, EnumMember, InterfaceDeclaration, PropertySignature, TypeAlias,
};
pub use types::TsType;
