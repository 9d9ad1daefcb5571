//! Parsed C declaration tree.
//!
//! These types are the output of the external preprocessing/parsing step and
//! the input to the collector. They cover exactly the declaration shapes a
//! public C API header uses: function prototypes, typedefs of structs, enums
//! and plain types, pointer chains, fixed arrays and function pointers.
//! Shapes outside that set (unions, bitfields, variadic signatures) are
//! representable so the translator can reject them explicitly.

use serde::{Deserialize, Serialize};

/// A top-level declaration in a C header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CDecl {
    /// A function prototype.
    Function {
        /// Function name
        name: String,

        /// Full signature
        ty: CFunctionType,
    },

    /// A `typedef`.
    Typedef {
        /// New type name
        name: String,

        /// The underlying type expression
        underlying: CTypeExpr,
    },
}

impl CDecl {
    /// Name of the declared entity.
    pub fn name(&self) -> &str {
        match self {
            CDecl::Function { name, .. } => name,
            CDecl::Typedef { name, .. } => name,
        }
    }
}

/// A C type expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CTypeExpr {
    /// Bare identifier: a primitive (`int`, `double`, `uint64_t`) or a
    /// typedef name.
    Named(String),

    /// Struct definition or by-name reference. References carry an empty
    /// field list.
    Struct {
        name: Option<String>,
        fields: Vec<CStructField>,
    },

    /// Enum definition or by-name reference.
    Enum {
        name: Option<String>,
        members: Vec<CEnumMember>,
    },

    /// Union. Never translatable.
    Union { name: Option<String> },

    /// Pointer to another type.
    Pointer(Box<CTypeExpr>),

    /// Array with an explicit dimension.
    Array {
        elem: Box<CTypeExpr>,
        len: ArrayLen,
    },

    /// Function type. Usually appears behind a `Pointer`.
    Function(CFunctionType),
}

impl CTypeExpr {
    /// Bare identifier.
    pub fn named(name: impl Into<String>) -> Self {
        CTypeExpr::Named(name.into())
    }

    /// Pointer to `inner`.
    pub fn pointer(inner: CTypeExpr) -> Self {
        CTypeExpr::Pointer(Box::new(inner))
    }

    /// By-name struct reference.
    pub fn struct_ref(name: impl Into<String>) -> Self {
        CTypeExpr::Struct {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    /// By-name enum reference.
    pub fn enum_ref(name: impl Into<String>) -> Self {
        CTypeExpr::Enum {
            name: Some(name.into()),
            members: Vec::new(),
        }
    }

    /// Array of `elem` with a literal dimension.
    pub fn array(elem: CTypeExpr, len: u64) -> Self {
        CTypeExpr::Array {
            elem: Box::new(elem),
            len: ArrayLen::Literal(len),
        }
    }
}

/// A function signature: return type plus ordered parameter types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CFunctionType {
    /// Return type
    pub ret: Box<CTypeExpr>,

    /// Parameter types, in declaration order
    pub params: Vec<CTypeExpr>,

    /// Whether the signature ends in `...`
    pub variadic: bool,
}

impl CFunctionType {
    /// Create a signature with the given return and parameter types.
    pub fn new(ret: CTypeExpr, params: Vec<CTypeExpr>) -> Self {
        CFunctionType {
            ret: Box::new(ret),
            params,
            variadic: false,
        }
    }

    /// Mark the signature as variadic.
    pub fn with_variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

/// A struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CStructField {
    /// Field name
    pub name: String,

    /// Field type
    pub ty: CTypeExpr,

    /// Bit width for bitfields (None for regular fields)
    pub bit_width: Option<u32>,
}

impl CStructField {
    /// Create a regular (non-bitfield) field.
    pub fn new(name: impl Into<String>, ty: CTypeExpr) -> Self {
        CStructField {
            name: name.into(),
            ty,
            bit_width: None,
        }
    }
}

/// An enumerator with its literal value, carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CEnumMember {
    /// Enumerator name
    pub name: String,

    /// Value exactly as written in the source (`0`, `0x10`, `-1`)
    pub value: String,
}

impl CEnumMember {
    /// Create an enumerator.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        CEnumMember {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An array dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayLen {
    /// Literal integer constant
    Literal(u64),

    /// Any computed expression, kept as text for error reporting
    Expr(String),
}
