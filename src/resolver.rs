//! Bare type-name resolution.

use crate::config::LibraryConfig;
use crate::model::{Primitive, TypeDescriptor};

/// Resolves a bare C type name to its binding-side representation.
///
/// Pure lookup over the library configuration; all structural translation
/// (pointers, arrays, function types) happens in the translator.
pub struct NameResolver<'a> {
    config: &'a LibraryConfig,
}

impl<'a> NameResolver<'a> {
    /// Create a resolver for the given configuration.
    pub fn new(config: &'a LibraryConfig) -> Self {
        NameResolver { config }
    }

    /// The configuration this resolver reads.
    pub fn config(&self) -> &LibraryConfig {
        self.config
    }

    /// Resolve a bare type name.
    ///
    /// Library-prefixed names pass through as references to types defined in
    /// this run, except the designated plain-integer enum which crosses the
    /// boundary as a C `int`. Dependency-prefixed names pass through as
    /// references to the companion binding module. Fixed-width aliases map
    /// to explicit widths, and anything left is a native C primitive.
    pub fn resolve(&self, name: &str) -> TypeDescriptor {
        if self.config.is_library_name(name) {
            if self.config.is_plain_int_enum(name) {
                return TypeDescriptor::Primitive(Primitive::native("int"));
            }
            return TypeDescriptor::Named(name.to_string());
        }

        if self.config.is_dependency_name(name) {
            return TypeDescriptor::Named(name.to_string());
        }

        match name {
            "void" => TypeDescriptor::Void,
            "int32_t" => TypeDescriptor::Primitive(Primitive::Int32),
            "uint32_t" => TypeDescriptor::Primitive(Primitive::UInt32),
            "int64_t" => TypeDescriptor::Primitive(Primitive::Int64),
            "uint64_t" => TypeDescriptor::Primitive(Primitive::UInt64),
            "uintptr_t" => TypeDescriptor::Primitive(Primitive::UIntPtr),
            other => TypeDescriptor::Primitive(Primitive::native(other)),
        }
    }
}
