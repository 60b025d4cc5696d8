//! TypeScript declaration nodes.
//!
//! Declarations are immutable once built: documentation is attached through
//! the consuming `doc` builders at construction time, never afterwards.

use tygen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::TsType;
use crate::docstring::{Docstring, docstring};

/// A type alias declaration (`type Name = T;`).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    pub name: String,
    pub ty: TsType,
    pub doc: Option<Docstring>,
    pub exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
            exported: false,
        }
    }

    pub fn doc(mut self, text: &str) -> Self {
        self.doc = docstring(text);
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = doc_fragments(&self.doc);
        fragments.push(CodeFragment::line(format!(
            "{}type {} = {};",
            export, self.name, self.ty
        )));
        fragments
    }
}

/// A member of an enum declaration. Name and string literal value are both
/// set to the schema value's identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let value = name.clone();
        Self { name, value }
    }
}

/// An enum declaration (`enum Name { A = "A", ... }`).
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclaration {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub doc: Option<Docstring>,
    pub exported: bool,
}

impl EnumDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            doc: None,
            exported: false,
        }
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = EnumMember>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn doc(mut self, text: &str) -> Self {
        self.doc = docstring(text);
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }
}

impl Renderable for EnumDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = doc_fragments(&self.doc);

        if self.members.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "{}enum {} {{}}",
                export, self.name
            )));
        } else {
            let body = self
                .members
                .iter()
                .map(|member| {
                    CodeFragment::line(format!("{} = \"{}\",", member.name, member.value))
                })
                .collect();
            fragments.push(CodeFragment::block(
                format!("{}enum {} {{", export, self.name),
                body,
                Some("}".to_string()),
            ));
        }

        fragments
    }
}

/// A property of an interface declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
    pub doc: Option<Docstring>,
}

impl PropertySignature {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn doc(mut self, text: &str) -> Self {
        self.doc = docstring(text);
        self
    }
}

impl Renderable for PropertySignature {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let optional = if self.optional { "?" } else { "" };
        let mut fragments = doc_fragments(&self.doc);
        fragments.push(CodeFragment::line(format!(
            "{}{}: {};",
            self.name, optional, self.ty
        )));
        fragments
    }
}

/// An interface declaration (`interface Name { ... }`).
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub properties: Vec<PropertySignature>,
    pub doc: Option<Docstring>,
    pub exported: bool,
}

impl InterfaceDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            doc: None,
            exported: false,
        }
    }

    pub fn property(mut self, property: PropertySignature) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = PropertySignature>) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn doc(mut self, text: &str) -> Self {
        self.doc = docstring(text);
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }
}

impl Renderable for InterfaceDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = doc_fragments(&self.doc);

        if self.properties.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "{}interface {} {{}}",
                export, self.name
            )));
        } else {
            let body = self
                .properties
                .iter()
                .flat_map(|property| property.to_fragments())
                .collect();
            fragments.push(CodeFragment::block(
                format!("{}interface {} {{", export, self.name),
                body,
                Some("}".to_string()),
            ));
        }

        fragments
    }
}

/// A generated declaration: alias, enum, or interface.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    TypeAlias(TypeAlias),
    Enum(EnumDeclaration),
    Interface(InterfaceDeclaration),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::TypeAlias(alias) => &alias.name,
            Self::Enum(decl) => &decl.name,
            Self::Interface(decl) => &decl.name,
        }
    }

    pub fn is_exported(&self) -> bool {
        match self {
            Self::TypeAlias(alias) => alias.exported,
            Self::Enum(decl) => decl.exported,
            Self::Interface(decl) => decl.exported,
        }
    }

    /// Mark the declaration as publicly exported.
    pub fn exported(self) -> Self {
        match self {
            Self::TypeAlias(alias) => Self::TypeAlias(alias.exported()),
            Self::Enum(decl) => Self::Enum(decl.exported()),
            Self::Interface(decl) => Self::Interface(decl.exported()),
        }
    }

    /// Render the declaration as TypeScript source text.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::TypeAlias(alias) => alias.to_fragments(),
            Self::Enum(decl) => decl.to_fragments(),
            Self::Interface(decl) => decl.to_fragments(),
        }
    }
}

fn doc_fragments(doc: &Option<Docstring>) -> Vec<CodeFragment> {
    doc.as_ref().map(|d| d.to_fragments()).unwrap_or_default()
}
