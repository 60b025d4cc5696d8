//! Schema type to TypeScript type mapping.

use tygen_codegen::CompilerOptions;
use tygen_schema::SchemaType;

use crate::ast::TsType;

/// Maps schema types to TypeScript type expressions.
///
/// Schema nullability is inverted relative to TypeScript unions: a schema
/// type not wrapped in a non-null marker maps to `T | null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeMapper {
    options: CompilerOptions,
}

impl TypeMapper {
    pub fn new(options: CompilerOptions) -> Self {
        Self { options }
    }

    /// Map a schema type to a TypeScript type expression.
    ///
    /// `name_override` replaces the fallback name used for named references,
    /// and is threaded through list recursion. It lets callers generate
    /// differently-named variants of the same underlying type.
    pub fn ts_type(&self, ty: &SchemaType, name_override: Option<&str>) -> TsType {
        match ty {
            SchemaType::NonNull(inner) => self.non_nullable(inner, name_override),
            nullable => self.non_nullable(nullable, name_override).nullable(),
        }
    }

    fn non_nullable(&self, ty: &SchemaType, name_override: Option<&str>) -> TsType {
        match ty {
            SchemaType::List(of) => {
                let element = self.ts_type(of, name_override);
                if element.is_union() {
                    // Parenthesize so `[]` binds to the whole union.
                    TsType::array(TsType::paren(element))
                } else {
                    TsType::array(element)
                }
            }
            SchemaType::Scalar(scalar) => {
                match built_in_scalar(name_override.unwrap_or(&scalar.name)) {
                    Some(built_in) => built_in,
                    None if self.options.passthrough_custom_scalars => TsType::Any,
                    None => TsType::reference(&scalar.name),
                }
            }
            // Non-null markers are always outermost in a well-formed graph;
            // unwrap them anyway if one shows up nested.
            SchemaType::NonNull(inner) => self.ts_type(inner, name_override),
            SchemaType::Enum(ty) => TsType::reference(name_override.unwrap_or(&ty.name)),
            SchemaType::Object(ty) => TsType::reference(name_override.unwrap_or(&ty.name)),
            SchemaType::InputObject(ty) => TsType::reference(name_override.unwrap_or(&ty.name)),
        }
    }
}

fn built_in_scalar(name: &str) -> Option<TsType> {
    match name {
        "String" | "ID" => Some(TsType::String),
        "Int" | "Float" => Some(TsType::Number),
        "Boolean" => Some(TsType::Boolean),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tygen_schema::{EnumType, ObjectType};

    fn mapper() -> TypeMapper {
        TypeMapper::new(CompilerOptions::default())
    }

    fn passthrough_mapper() -> TypeMapper {
        TypeMapper::new(CompilerOptions {
            passthrough_custom_scalars: true,
        })
    }

    #[test]
    fn test_built_in_scalars() {
        let cases = [
            ("String", TsType::String),
            ("ID", TsType::String),
            ("Int", TsType::Number),
            ("Float", TsType::Number),
            ("Boolean", TsType::Boolean),
        ];
        for (name, expected) in cases {
            let ty = SchemaType::non_null(SchemaType::scalar(name));
            assert_eq!(mapper().ts_type(&ty, None), expected);
            // Independent of the passthrough option.
            assert_eq!(passthrough_mapper().ts_type(&ty, None), expected);
        }
    }

    #[test]
    fn test_custom_scalar_named_reference() {
        let ty = SchemaType::non_null(SchemaType::scalar("Date"));
        assert_eq!(mapper().ts_type(&ty, None), TsType::reference("Date"));
    }

    #[test]
    fn test_custom_scalar_passthrough() {
        let ty = SchemaType::non_null(SchemaType::scalar("Date"));
        assert_eq!(passthrough_mapper().ts_type(&ty, None), TsType::Any);
    }

    #[test]
    fn test_nullable_wraps_in_null_union() {
        let ty = SchemaType::scalar("String");
        let mapped = mapper().ts_type(&ty, None);
        assert_eq!(mapped, TsType::String.nullable());
        assert!(mapped.is_nullable());
    }

    #[test]
    fn test_non_null_never_unions_with_null() {
        let ty = SchemaType::non_null(SchemaType::scalar("String"));
        let mapped = mapper().ts_type(&ty, None);
        assert_eq!(mapped, TsType::String);
        assert!(!mapped.is_nullable());
    }

    #[test]
    fn test_list_of_nullable_elements_is_parenthesized() {
        // [String] with both list and element nullable.
        let ty = SchemaType::list(SchemaType::scalar("String"));
        let mapped = mapper().ts_type(&SchemaType::non_null(ty), None);
        assert_eq!(mapped.to_string(), "(string | null)[]");
    }

    #[test]
    fn test_nullable_list_of_non_null_elements() {
        // [String!] with the list itself nullable.
        let ty = SchemaType::list(SchemaType::non_null(SchemaType::scalar("String")));
        let mapped = mapper().ts_type(&ty, None);
        assert_eq!(mapped.to_string(), "string[] | null");
    }

    #[test]
    fn test_nested_non_null_is_unwrapped() {
        let ty = SchemaType::non_null(SchemaType::non_null(SchemaType::scalar("Int")));
        assert_eq!(mapper().ts_type(&ty, None), TsType::Number);
    }

    #[test]
    fn test_enum_and_object_references() {
        let episode = SchemaType::Enum(EnumType::new("Episode"));
        assert_eq!(
            mapper().ts_type(&SchemaType::non_null(episode), None),
            TsType::reference("Episode")
        );

        let droid = SchemaType::Object(ObjectType::new("Droid"));
        assert_eq!(
            mapper().ts_type(&SchemaType::non_null(droid), None),
            TsType::reference("Droid")
        );
    }

    #[test]
    fn test_name_override_on_named_reference() {
        let droid = SchemaType::non_null(SchemaType::Object(ObjectType::new("Droid")));
        assert_eq!(
            mapper().ts_type(&droid, Some("Hero_Droid")),
            TsType::reference("Hero_Droid")
        );
    }

    #[test]
    fn test_name_override_resolves_built_ins() {
        // An override naming a built-in maps to the primitive keyword.
        let ty = SchemaType::non_null(SchemaType::scalar("Custom"));
        assert_eq!(mapper().ts_type(&ty, Some("String")), TsType::String);
    }

    #[test]
    fn test_custom_scalar_reference_ignores_override() {
        // Non-built-in scalars are referenced by their own name.
        let ty = SchemaType::non_null(SchemaType::scalar("Date"));
        assert_eq!(
            mapper().ts_type(&ty, Some("Timestamp")),
            TsType::reference("Date")
        );
    }

    #[test]
    fn test_is_nullable_tracks_non_null_wrapping() {
        let shapes = [
            SchemaType::scalar("String"),
            SchemaType::scalar("Date"),
            SchemaType::Enum(EnumType::new("Episode")),
            SchemaType::list(SchemaType::scalar("Int")),
        ];
        for shape in shapes {
            assert!(mapper().ts_type(&shape, None).is_nullable());
            assert!(
                !mapper()
                    .ts_type(&SchemaType::non_null(shape.clone()), None)
                    .is_nullable()
            );
        }
    }
}
