//! Schema type definitions.
//!
//! Nullability is inverted relative to most target languages: a type is
//! nullable unless it is wrapped in [`SchemaType::NonNull`]. Non-null
//! wrappers are always outermost in a well-formed graph.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A scalar type definition (built-in or custom).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single value of an enum type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An enum type definition. Values are kept in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(mut self, name: impl Into<String>) -> Self {
        self.values.push(EnumValue::new(name));
        self
    }
}

/// An object type definition.
///
/// The generators only reference object types by name, so field selections
/// are resolved by the front end and not carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A field of an input object type. The field name is the map key on
/// [`InputObjectType::fields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    pub description: Option<String>,
    pub ty: SchemaType,
}

impl InputField {
    pub fn new(ty: SchemaType) -> Self {
        Self {
            description: None,
            ty,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An input object type definition. Fields are kept in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, InputField>,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: SchemaType) -> Self {
        self.fields.insert(name.into(), InputField::new(ty));
        self
    }

    pub fn field_with(mut self, name: impl Into<String>, field: InputField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

/// A reference into the schema type graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SchemaType {
    Scalar(ScalarType),
    Enum(EnumType),
    Object(ObjectType),
    InputObject(InputObjectType),
    List(Box<SchemaType>),
    NonNull(Box<SchemaType>),
}

impl SchemaType {
    /// A scalar reference by name, without a description.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar(ScalarType::new(name))
    }

    /// Wrap a type in a list.
    pub fn list(of: SchemaType) -> Self {
        Self::List(Box::new(of))
    }

    /// Wrap a type in a non-null marker.
    pub fn non_null(of: SchemaType) -> Self {
        Self::NonNull(Box::new(of))
    }

    /// The name of a named type definition. Lists and non-null wrappers
    /// are anonymous.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Scalar(scalar) => Some(&scalar.name),
            Self::Enum(ty) => Some(&ty.name),
            Self::Object(ty) => Some(&ty.name),
            Self::InputObject(ty) => Some(&ty.name),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    /// The description of a named type definition.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(scalar) => scalar.description.as_deref(),
            Self::Enum(ty) => ty.description.as_deref(),
            Self::Object(ty) => ty.description.as_deref(),
            Self::InputObject(ty) => ty.description.as_deref(),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_types_expose_name_and_description() {
        let scalar = SchemaType::Scalar(ScalarType::new("Date").description("An ISO date"));
        assert_eq!(scalar.name(), Some("Date"));
        assert_eq!(scalar.description(), Some("An ISO date"));

        let object = SchemaType::Object(ObjectType::new("Droid"));
        assert_eq!(object.name(), Some("Droid"));
        assert_eq!(object.description(), None);
    }

    #[test]
    fn test_wrappers_are_anonymous() {
        let list = SchemaType::list(SchemaType::scalar("String"));
        assert_eq!(list.name(), None);

        let non_null = SchemaType::non_null(SchemaType::scalar("String"));
        assert_eq!(non_null.name(), None);
        assert!(non_null.is_non_null());
        assert!(!list.is_non_null());
    }

    #[test]
    fn test_input_object_preserves_field_order() {
        let input = InputObjectType::new("ReviewInput")
            .field("stars", SchemaType::non_null(SchemaType::scalar("Int")))
            .field("commentary", SchemaType::scalar("String"))
            .field("favorite", SchemaType::scalar("Boolean"));

        let names: Vec<&str> = input.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["stars", "commentary", "favorite"]);
    }

    #[test]
    fn test_enum_values_keep_source_order() {
        let enum_type = EnumType::new("Episode")
            .value("NEWHOPE")
            .value("EMPIRE")
            .value("JEDI");
        let names: Vec<&str> = enum_type.values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["NEWHOPE", "EMPIRE", "JEDI"]);
    }
}
