//! TypeScript type expressions.

use std::fmt;

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// The `string` keyword.
    String,
    /// The `number` keyword.
    Number,
    /// The `boolean` keyword.
    Boolean,
    /// The `any` keyword.
    Any,
    /// The `null` literal type.
    Null,
    /// A named type reference.
    Ref(String),
    /// An array type (`T[]`).
    Array(Box<TsType>),
    /// A union type (`A | B`).
    Union(Vec<TsType>),
    /// A parenthesized type (`(T)`).
    Paren(Box<TsType>),
}

impl TsType {
    /// A named type reference.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref(name.into())
    }

    /// Wrap a type in an array.
    pub fn array(element: TsType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Wrap a type in parentheses.
    pub fn paren(inner: TsType) -> Self {
        Self::Paren(Box::new(inner))
    }

    /// Widen a type to a union with the `null` literal.
    pub fn nullable(self) -> Self {
        Self::Union(vec![self, Self::Null])
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    /// True iff this is a union with a `null` branch.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Union(members) => members.iter().any(|m| matches!(m, Self::Null)),
            _ => false,
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Boolean => f.write_str("boolean"),
            Self::Any => f.write_str("any"),
            Self::Null => f.write_str("null"),
            Self::Ref(name) => f.write_str(name),
            Self::Array(element) => write!(f, "{}[]", element),
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            Self::Paren(inner) => write!(f, "({})", inner),
        }
    }
}
