//! Binding declaration model.
//!
//! The structured result of collecting a header: everything a downstream
//! emitter needs to write out a binding module for a dynamically-typed host,
//! with no C syntax left in it. All collections preserve source declaration
//! order.

use serde::{Deserialize, Serialize};

/// Complete set of declarations collected from one header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionResult {
    /// `#define` constants, in declaration order
    pub macros: Vec<MacroConstant>,

    /// Plain type aliases
    pub aliases: Vec<TypeAliasDecl>,

    /// Enum definitions
    pub enums: Vec<EnumDecl>,

    /// Struct definitions
    pub structs: Vec<StructDecl>,

    /// Function signatures
    pub functions: Vec<FunctionDecl>,
}

impl CollectionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
            && self.aliases.is_empty()
            && self.enums.is_empty()
            && self.structs.is_empty()
            && self.functions.is_empty()
    }
}

/// A function signature registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Function name
    pub name: String,

    /// Return type
    pub ret: TypeDescriptor,

    /// Parameter types, in declaration order. Empty if the C declaration
    /// had a single `void` parameter.
    pub params: Vec<TypeDescriptor>,

    /// True when the return type is the library's status type and must be
    /// routed through the external result-checking adapter.
    pub checked: bool,
}

/// A structure definition. Zero fields is valid and marks an opaque struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDecl {
    /// Struct name
    pub name: String,

    /// Fields, in declaration order
    pub fields: Vec<StructFieldDecl>,
}

/// A translated struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructFieldDecl {
    /// Field name
    pub name: String,

    /// Field type
    pub ty: TypeDescriptor,
}

impl StructFieldDecl {
    /// Create a field.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        StructFieldDecl {
            name: name.into(),
            ty,
        }
    }
}

/// An enum definition with verbatim member values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Enum name
    pub name: String,

    /// Members, in declaration order
    pub members: Vec<EnumMemberDecl>,
}

/// An enum member. The value is the literal text from the header, never
/// evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMemberDecl {
    /// Member name
    pub name: String,

    /// Literal value exactly as written
    pub value: String,
}

impl EnumMemberDecl {
    /// Create a member.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        EnumMemberDecl {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A resolved plain type alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasDecl {
    /// Alias name
    pub name: String,

    /// Underlying type
    pub ty: TypeDescriptor,
}

/// An object-like macro constant, carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroConstant {
    /// Macro name
    pub name: String,

    /// Value token exactly as written, never evaluated
    pub value: String,
}

impl MacroConstant {
    /// Create a constant.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        MacroConstant {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A binding-side type descriptor.
///
/// The closed target vocabulary of the translator. Descriptors are
/// host-agnostic: the emitter decides how each variant spells in the
/// generated module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// No value. Only meaningful in return position; as the sole parameter
    /// of a C signature it collapses to an empty parameter list.
    Void,

    /// A numeric primitive.
    Primitive(Primitive),

    /// `void*`: a pointer whose pointee layout is not exposed.
    Opaque,

    /// `char*`: a NUL-terminated C string.
    StringPointer,

    /// `char**`: an array of C strings.
    StringPointerArray,

    /// Pointer to another descriptor.
    Pointer(Box<TypeDescriptor>),

    /// Pointer-to-pointer denoting a contiguous, externally allocated
    /// numeric buffer rather than generic double indirection.
    ArrayBufferPointer(Box<TypeDescriptor>),

    /// Fixed-size inline array.
    FixedArray(Box<TypeDescriptor>, u64),

    /// Function pointer crossing the boundary as a callback.
    Callback {
        ret: Box<TypeDescriptor>,
        params: Vec<TypeDescriptor>,
    },

    /// Reference to a struct, enum or alias defined elsewhere (this run or
    /// a companion binding module).
    Named(String),
}

impl TypeDescriptor {
    /// Pointer to `inner`.
    pub fn pointer(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer(Box::new(inner))
    }

    /// Check if this is the no-value descriptor.
    pub fn is_void(&self) -> bool {
        matches!(self, TypeDescriptor::Void)
    }
}

/// Numeric primitives of the host binding system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    Int32,
    UInt32,
    Int64,
    UInt64,

    /// `uintptr_t`: width resolved when the generated module is loaded
    /// (32-bit vs 64-bit target), not at generation time.
    UIntPtr,

    /// A native C primitive (`int`, `float`, `double`, ...) mapped by name
    /// into the host binding system's native-primitive namespace.
    Native(String),
}

impl Primitive {
    /// Native primitive by name.
    pub fn native(name: impl Into<String>) -> Self {
        Primitive::Native(name.into())
    }
}
