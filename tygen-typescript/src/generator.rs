//! TypeScript declaration generator.
//!
//! Converts one schema type definition into one [`Declaration`], using the
//! type mapper for field types and the docstring formatter for descriptions.

use tygen_codegen::CompilerOptions;
use tygen_schema::{EnumType, EnumValue, InputObjectType, ScalarType};

use crate::ast::{
    Declaration, EnumDeclaration, EnumMember, InterfaceDeclaration, PropertySignature, TsType,
    TypeAlias,
};
use crate::type_mapper::TypeMapper;

/// One field of a generated interface.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub name: String,
    pub description: Option<String>,
    pub ty: TsType,
}

impl ObjectProperty {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Options for building property signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyOptions {
    /// Mark a property optional when its mapped type is a nullable union,
    /// collapsing "nullable field" into "optional property".
    pub key_inherits_nullability: bool,
}

/// Builds TypeScript declarations from schema type definitions.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    mapper: TypeMapper,
}

impl Generator {
    pub fn new(options: CompilerOptions) -> Self {
        Self {
            mapper: TypeMapper::new(options),
        }
    }

    /// The type mapper configured for this generator.
    pub fn mapper(&self) -> &TypeMapper {
        &self.mapper
    }

    /// `export type Name = any;` for a custom scalar.
    ///
    /// Custom scalars get no structural definition, only a name.
    pub fn scalar_declaration(&self, scalar: &ScalarType) -> Declaration {
        let mut alias = TypeAlias::new(&scalar.name, TsType::Any).exported();
        if let Some(description) = &scalar.description {
            alias = alias.doc(description);
        }
        Declaration::TypeAlias(alias)
    }

    /// An exported enum with members sorted by value name.
    pub fn enumeration_declaration(&self, ty: &EnumType) -> Declaration {
        self.enumeration_declaration_by(ty, |value| value.name.clone())
    }

    /// An exported enum with members sorted by a caller-supplied key.
    ///
    /// The sort is stable: values with equal keys keep their source order.
    pub fn enumeration_declaration_by<K: Ord>(
        &self,
        ty: &EnumType,
        key: impl Fn(&EnumValue) -> K,
    ) -> Declaration {
        let mut values: Vec<&EnumValue> = ty.values.iter().collect();
        values.sort_by_key(|value| key(value));

        let mut decl = EnumDeclaration::new(&ty.name)
            .members(values.into_iter().map(|value| EnumMember::new(&value.name)))
            .exported();
        if let Some(description) = &ty.description {
            decl = decl.doc(description);
        }
        Declaration::Enum(decl)
    }

    /// An exported interface for an input object type.
    ///
    /// Fields are mapped in source order with the key-inherits-nullability
    /// policy, so a nullable field becomes an optional property. Field-level
    /// descriptions are not carried onto the generated properties on this
    /// path.
    pub fn input_object_declaration(&self, ty: &InputObjectType) -> Declaration {
        let fields: Vec<ObjectProperty> = ty
            .fields
            .iter()
            .map(|(name, field)| ObjectProperty::new(name, self.mapper.ts_type(&field.ty, None)))
            .collect();

        let mut decl = InterfaceDeclaration::new(&ty.name)
            .properties(self.properties_from_fields(
                &fields,
                PropertyOptions {
                    key_inherits_nullability: true,
                },
            ))
            .exported();
        if let Some(description) = &ty.description {
            decl = decl.doc(description);
        }
        Declaration::Interface(decl)
    }

    /// Property signatures for a sequence of fields.
    pub fn properties_from_fields(
        &self,
        fields: &[ObjectProperty],
        options: PropertyOptions,
    ) -> Vec<PropertySignature> {
        fields
            .iter()
            .map(|field| {
                let mut signature = PropertySignature::new(&field.name, field.ty.clone());
                if options.key_inherits_nullability && field.ty.is_nullable() {
                    signature = signature.optional();
                }
                if let Some(description) = &field.description {
                    signature = signature.doc(description);
                }
                signature
            })
            .collect()
    }

    /// An unexported interface built from property signatures.
    pub fn interface_declaration(
        &self,
        name: &str,
        fields: &[ObjectProperty],
        options: PropertyOptions,
    ) -> Declaration {
        Declaration::Interface(
            InterfaceDeclaration::new(name)
                .properties(self.properties_from_fields(fields, options)),
        )
    }

    /// An unexported union type alias.
    pub fn type_alias_union(&self, name: &str, members: Vec<TsType>) -> Declaration {
        Declaration::TypeAlias(TypeAlias::new(name, TsType::Union(members)))
    }

    /// Mark a declaration as publicly exported.
    pub fn export_declaration(&self, declaration: Declaration) -> Declaration {
        declaration.exported()
    }

    /// True iff the mapped type is a union with a `null` branch.
    pub fn is_nullable_type(&self, ty: &TsType) -> bool {
        ty.is_nullable()
    }
}

/// Flatten a stack of nested scope names into a collision-resistant
/// identifier, e.g. `["Hero", "Friends"]` -> `"Hero_Friends"`.
pub fn scoped_name<S: AsRef<str>>(scope: &[S]) -> String {
    scope
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<_>>()
        .join("_")
}
