//! Declgen - FFI binding declaration generation for C libraries.
//!
//! This crate turns the parsed declarations of a C library's public header
//! (functions, structs, enums, typedefs, `#define` constants) into binding
//! descriptors a dynamically-typed host can register against the shared
//! library. Preprocessing/parsing the header and writing out the generated
//! module are external steps; this crate owns the model in between.

pub mod ast;
pub mod collect;
pub mod config;
pub mod error;
pub mod model;
pub mod resolver;
pub mod translate;

pub use ast::{ArrayLen, CDecl, CEnumMember, CFunctionType, CStructField, CTypeExpr};
pub use collect::{collect, scan_macros};
pub use config::LibraryConfig;
pub use error::{Error, Result};
pub use model::{
    CollectionResult, EnumDecl, EnumMemberDecl, FunctionDecl, MacroConstant, Primitive,
    StructDecl, StructFieldDecl, TypeAliasDecl, TypeDescriptor,
};
pub use resolver::NameResolver;
pub use translate::{translate, TypeContext};
