//! Recursive C type translation.
//!
//! Converts one C type expression into one binding-side [`TypeDescriptor`].
//! The translation is total over the supported shape grammar and fails
//! explicitly on everything else: a silently approximated type would produce
//! bindings with the wrong call ABI.

use crate::ast::{ArrayLen, CFunctionType, CTypeExpr};
use crate::error::{Error, Result};
use crate::model::TypeDescriptor;
use crate::resolver::NameResolver;

/// Where a type expression appears.
///
/// Struct fields use the array-output-buffer convention for double pointers:
/// a `T**` field receives a contiguous, externally allocated numeric buffer.
/// Everywhere else `T**` is plain double indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeContext {
    #[default]
    Plain,
    StructField,
}

/// Translate one C type expression into a binding type descriptor.
pub fn translate(
    ty: &CTypeExpr,
    ctx: TypeContext,
    resolver: &NameResolver<'_>,
) -> Result<TypeDescriptor> {
    match ty {
        CTypeExpr::Pointer(inner) => translate_pointer(inner, ctx, resolver),

        CTypeExpr::Named(_) | CTypeExpr::Struct { .. } | CTypeExpr::Enum { .. } => {
            let name = bare_name(ty)?;
            Ok(resolver.resolve(name))
        }

        CTypeExpr::Array { elem, len } => match len {
            // Array elements never use the buffer convention, even inside a
            // struct field.
            ArrayLen::Literal(size) => Ok(TypeDescriptor::FixedArray(
                Box::new(translate(elem, TypeContext::Plain, resolver)?),
                *size,
            )),
            ArrayLen::Expr(expr) => Err(Error::unsupported(format!(
                "array with non-constant dimension `{expr}`"
            ))),
        },

        CTypeExpr::Function(func) => translate_function(func, ctx, resolver),

        CTypeExpr::Union { name } => Err(Error::unsupported(match name {
            Some(name) => format!("union `{name}`"),
            None => "anonymous union".to_string(),
        })),
    }
}

/// Translate the pointee of a pointer type.
fn translate_pointer(
    inner: &CTypeExpr,
    ctx: TypeContext,
    resolver: &NameResolver<'_>,
) -> Result<TypeDescriptor> {
    match inner {
        // Double pointer: either an array of C strings, a contiguous output
        // buffer (struct fields), or plain nested indirection.
        CTypeExpr::Pointer(elem) => {
            let name = bare_name(elem)?;
            if name == "char" {
                return Ok(TypeDescriptor::StringPointerArray);
            }

            let resolved = resolver.resolve(name);
            match ctx {
                TypeContext::StructField => Ok(TypeDescriptor::ArrayBufferPointer(Box::new(
                    resolved,
                ))),
                TypeContext::Plain => Ok(TypeDescriptor::pointer(TypeDescriptor::pointer(
                    resolved,
                ))),
            }
        }

        CTypeExpr::Function(func) => translate_function(func, ctx, resolver),

        CTypeExpr::Named(_) | CTypeExpr::Struct { .. } | CTypeExpr::Enum { .. } => {
            match bare_name(inner)? {
                "void" => Ok(TypeDescriptor::Opaque),
                "char" => Ok(TypeDescriptor::StringPointer),
                name => Ok(TypeDescriptor::pointer(resolver.resolve(name))),
            }
        }

        CTypeExpr::Array { .. } => Err(Error::unsupported("pointer to array")),

        CTypeExpr::Union { name } => Err(Error::unsupported(match name {
            Some(name) => format!("pointer to union `{name}`"),
            None => "pointer to anonymous union".to_string(),
        })),
    }
}

/// Translate a function type into a callback descriptor.
///
/// The context propagates into the signature: a callback stored in a struct
/// field keeps the buffer convention for its own parameters.
fn translate_function(
    func: &CFunctionType,
    ctx: TypeContext,
    resolver: &NameResolver<'_>,
) -> Result<TypeDescriptor> {
    if func.variadic {
        return Err(Error::unsupported("variadic function signature"));
    }

    let ret = translate(&func.ret, ctx, resolver)?;
    let params = func
        .params
        .iter()
        .map(|param| translate(param, ctx, resolver))
        .collect::<Result<Vec<_>>>()?;

    Ok(TypeDescriptor::Callback {
        ret: Box::new(ret),
        params,
    })
}

/// Extract the name of a bare named type (identifier, struct or enum
/// reference). Anything without a name at this position is outside the
/// supported grammar.
fn bare_name(ty: &CTypeExpr) -> Result<&str> {
    match ty {
        CTypeExpr::Named(name) => Ok(name),
        CTypeExpr::Struct {
            name: Some(name), ..
        } => Ok(name),
        CTypeExpr::Enum {
            name: Some(name), ..
        } => Ok(name),
        CTypeExpr::Struct { name: None, .. } => Err(Error::unsupported("nested anonymous struct")),
        CTypeExpr::Enum { name: None, .. } => Err(Error::unsupported("nested anonymous enum")),
        other => Err(Error::unsupported(format!(
            "expected a named type, found {}",
            shape_name(other)
        ))),
    }
}

fn shape_name(ty: &CTypeExpr) -> &'static str {
    match ty {
        CTypeExpr::Named(_) => "identifier",
        CTypeExpr::Struct { .. } => "struct",
        CTypeExpr::Enum { .. } => "enum",
        CTypeExpr::Union { .. } => "union",
        CTypeExpr::Pointer(_) => "pointer",
        CTypeExpr::Array { .. } => "array",
        CTypeExpr::Function(_) => "function",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibraryConfig;
    use crate::model::Primitive;

    fn config() -> LibraryConfig {
        LibraryConfig::new("rascal_", "eqs_").with_plain_int_enum("rascal_indexes_kind")
    }

    fn translate_plain(ty: &CTypeExpr, config: &LibraryConfig) -> Result<TypeDescriptor> {
        translate(ty, TypeContext::Plain, &NameResolver::new(config))
    }

    #[test]
    fn test_char_pointer_is_string() {
        let config = config();
        let ty = CTypeExpr::pointer(CTypeExpr::named("char"));

        assert_eq!(
            translate_plain(&ty, &config).unwrap(),
            TypeDescriptor::StringPointer
        );
    }

    #[test]
    fn test_char_double_pointer_is_string_array() {
        let config = config();
        let ty = CTypeExpr::pointer(CTypeExpr::pointer(CTypeExpr::named("char")));

        assert_eq!(
            translate_plain(&ty, &config).unwrap(),
            TypeDescriptor::StringPointerArray
        );
    }

    #[test]
    fn test_void_pointer_is_opaque() {
        let config = config();
        let ty = CTypeExpr::pointer(CTypeExpr::named("void"));

        assert_eq!(translate_plain(&ty, &config).unwrap(), TypeDescriptor::Opaque);
    }

    #[test]
    fn test_pointer_to_named_type() {
        let config = config();
        let ty = CTypeExpr::pointer(CTypeExpr::struct_ref("rascal_calculator_t"));

        assert_eq!(
            translate_plain(&ty, &config).unwrap(),
            TypeDescriptor::pointer(TypeDescriptor::Named("rascal_calculator_t".to_string()))
        );
    }

    #[test]
    fn test_double_pointer_plain_context() {
        let config = config();
        let ty = CTypeExpr::pointer(CTypeExpr::pointer(CTypeExpr::named("double")));

        assert_eq!(
            translate_plain(&ty, &config).unwrap(),
            TypeDescriptor::pointer(TypeDescriptor::pointer(TypeDescriptor::Primitive(
                Primitive::native("double")
            )))
        );
    }

    #[test]
    fn test_double_pointer_struct_field_is_buffer() {
        let config = config();
        let resolver = NameResolver::new(&config);
        let ty = CTypeExpr::pointer(CTypeExpr::pointer(CTypeExpr::named("double")));

        assert_eq!(
            translate(&ty, TypeContext::StructField, &resolver).unwrap(),
            TypeDescriptor::ArrayBufferPointer(Box::new(TypeDescriptor::Primitive(
                Primitive::native("double")
            )))
        );
    }

    #[test]
    fn test_string_array_wins_over_buffer_convention() {
        // char** stays a string array even in a struct field.
        let config = config();
        let resolver = NameResolver::new(&config);
        let ty = CTypeExpr::pointer(CTypeExpr::pointer(CTypeExpr::named("char")));

        assert_eq!(
            translate(&ty, TypeContext::StructField, &resolver).unwrap(),
            TypeDescriptor::StringPointerArray
        );
    }

    #[test]
    fn test_function_pointer_is_callback() {
        let config = config();
        let sig = CFunctionType::new(
            CTypeExpr::named("void"),
            vec![
                CTypeExpr::pointer(CTypeExpr::named("void")),
                CTypeExpr::named("uintptr_t"),
            ],
        );
        let ty = CTypeExpr::pointer(CTypeExpr::Function(sig));

        assert_eq!(
            translate_plain(&ty, &config).unwrap(),
            TypeDescriptor::Callback {
                ret: Box::new(TypeDescriptor::Void),
                params: vec![
                    TypeDescriptor::Opaque,
                    TypeDescriptor::Primitive(Primitive::UIntPtr),
                ],
            }
        );
    }

    #[test]
    fn test_fixed_array_literal_dimension() {
        let config = config();
        let ty = CTypeExpr::array(CTypeExpr::named("double"), 10);

        assert_eq!(
            translate_plain(&ty, &config).unwrap(),
            TypeDescriptor::FixedArray(
                Box::new(TypeDescriptor::Primitive(Primitive::native("double"))),
                10
            )
        );
    }

    #[test]
    fn test_array_element_ignores_struct_field_context() {
        // double* elem[3] in a struct field: the element stays a plain
        // pointer, the buffer convention applies only to the field itself.
        let config = config();
        let resolver = NameResolver::new(&config);
        let ty = CTypeExpr::Array {
            elem: Box::new(CTypeExpr::pointer(CTypeExpr::named("double"))),
            len: ArrayLen::Literal(3),
        };

        assert_eq!(
            translate(&ty, TypeContext::StructField, &resolver).unwrap(),
            TypeDescriptor::FixedArray(
                Box::new(TypeDescriptor::pointer(TypeDescriptor::Primitive(
                    Primitive::native("double")
                ))),
                3
            )
        );
    }

    #[test]
    fn test_non_constant_array_dimension_fails() {
        let config = config();
        let ty = CTypeExpr::Array {
            elem: Box::new(CTypeExpr::named("double")),
            len: ArrayLen::Expr("n".to_string()),
        };

        let err = translate_plain(&ty, &config).unwrap_err();
        assert!(err.to_string().contains("non-constant dimension"));
    }

    #[test]
    fn test_union_fails() {
        let config = config();
        let ty = CTypeExpr::Union {
            name: Some("rascal_value_t".to_string()),
        };

        assert!(translate_plain(&ty, &config).is_err());
    }

    #[test]
    fn test_variadic_signature_fails() {
        let config = config();
        let sig = CFunctionType::new(
            CTypeExpr::named("int"),
            vec![CTypeExpr::pointer(CTypeExpr::named("char"))],
        )
        .with_variadic();
        let ty = CTypeExpr::pointer(CTypeExpr::Function(sig));

        let err = translate_plain(&ty, &config).unwrap_err();
        assert!(err.to_string().contains("variadic"));
    }

    #[test]
    fn test_triple_pointer_fails() {
        let config = config();
        let ty = CTypeExpr::pointer(CTypeExpr::pointer(CTypeExpr::pointer(CTypeExpr::named(
            "double",
        ))));

        assert!(translate_plain(&ty, &config).is_err());
    }

    #[test]
    fn test_bare_named_types() {
        let config = config();

        assert_eq!(
            translate_plain(&CTypeExpr::named("rascal_status_t"), &config).unwrap(),
            TypeDescriptor::Named("rascal_status_t".to_string())
        );
        assert_eq!(
            translate_plain(&CTypeExpr::enum_ref("rascal_indexes_kind"), &config).unwrap(),
            TypeDescriptor::Primitive(Primitive::native("int"))
        );
        assert_eq!(
            translate_plain(&CTypeExpr::named("int64_t"), &config).unwrap(),
            TypeDescriptor::Primitive(Primitive::Int64)
        );
    }
}
