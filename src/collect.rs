//! Declaration collection.
//!
//! Walks the parsed declaration tree of one header and produces the complete
//! [`CollectionResult`] handed to the emitter. Collection is a single pass:
//! declarations are filtered by the library prefix, classified, and their
//! types run through the translator. Any translation failure aborts the walk
//! so no partially-translated model ever escapes.
//!
//! Macro constants come from a separate scan over the header's raw text,
//! since the preprocessor has already consumed them by the time the
//! declaration tree exists.

use anyhow::{Context, Result};
use regex::Regex;

use crate::ast::{CDecl, CEnumMember, CFunctionType, CStructField, CTypeExpr};
use crate::config::LibraryConfig;
use crate::error::Error;
use crate::model::{
    CollectionResult, EnumDecl, EnumMemberDecl, FunctionDecl, MacroConstant, StructDecl,
    StructFieldDecl, TypeAliasDecl, TypeDescriptor,
};
use crate::resolver::NameResolver;
use crate::translate::{translate, TypeContext};

/// Collect every binding-relevant declaration from one header.
///
/// `decls` is the header's parsed declaration tree and `header_text` its raw
/// text, used only for the `#define` scan. Declarations that do not carry
/// the library prefix are skipped silently.
pub fn collect(
    decls: &[CDecl],
    header_text: &str,
    config: &LibraryConfig,
) -> Result<CollectionResult> {
    let resolver = NameResolver::new(config);
    let mut result = CollectionResult::new();

    result.macros = scan_macros(header_text, config);

    for decl in decls {
        if !config.is_library_name(decl.name()) {
            tracing::debug!("skipping declaration `{}` (foreign prefix)", decl.name());
            continue;
        }

        match decl {
            CDecl::Function { name, ty } => {
                let function = collect_function(name, ty, &resolver)
                    .with_context(|| format!("in function `{name}`"))?;
                result.functions.push(function);
            }

            CDecl::Typedef { name, underlying } => match underlying {
                CTypeExpr::Enum { members, .. } => {
                    result.enums.push(collect_enum(name, members));
                }
                CTypeExpr::Struct { fields, .. } => {
                    let decl = collect_struct(name, fields, &resolver)
                        .with_context(|| format!("in struct `{name}`"))?;
                    result.structs.push(decl);
                }
                other => {
                    let ty = translate(other, TypeContext::Plain, &resolver)
                        .with_context(|| format!("in typedef `{name}`"))?;
                    result.aliases.push(TypeAliasDecl {
                        name: name.clone(),
                        ty,
                    });
                }
            },
        }
    }

    Ok(result)
}

/// Translate one function prototype.
fn collect_function(
    name: &str,
    ty: &CFunctionType,
    resolver: &NameResolver<'_>,
) -> Result<FunctionDecl> {
    if ty.variadic {
        return Err(Error::unsupported("variadic function signature").into());
    }

    let ret = translate(&ty.ret, TypeContext::Plain, resolver).context("in return type")?;

    let mut params = Vec::with_capacity(ty.params.len());
    for (index, param) in ty.params.iter().enumerate() {
        let param = translate(param, TypeContext::Plain, resolver)
            .with_context(|| format!("in parameter {index}"))?;
        params.push(param);
    }

    // `f(void)` takes no parameters.
    if params.len() == 1 && params[0].is_void() {
        params.clear();
    }

    let checked = match &ret {
        TypeDescriptor::Named(name) => resolver.config().is_status_type(name),
        _ => false,
    };

    Ok(FunctionDecl {
        name: name.to_string(),
        ret,
        params,
        checked,
    })
}

/// Translate a struct typedef. Zero fields is a valid opaque marker.
fn collect_struct(
    name: &str,
    fields: &[CStructField],
    resolver: &NameResolver<'_>,
) -> Result<StructDecl> {
    let mut collected = Vec::with_capacity(fields.len());
    for field in fields {
        if field.bit_width.is_some() {
            return Err(Error::unsupported(format!("bitfield `{}`", field.name)).into());
        }

        let ty = translate(&field.ty, TypeContext::StructField, resolver)
            .with_context(|| format!("in field `{}`", field.name))?;
        collected.push(StructFieldDecl::new(&field.name, ty));
    }

    Ok(StructDecl {
        name: name.to_string(),
        fields: collected,
    })
}

/// Carry an enum typedef over verbatim.
fn collect_enum(name: &str, members: &[CEnumMember]) -> EnumDecl {
    EnumDecl {
        name: name.to_string(),
        members: members
            .iter()
            .map(|member| EnumMemberDecl::new(&member.name, &member.value))
            .collect(),
    }
}

/// Scan raw header text for object-like `#define NAME VALUE` constants.
///
/// The value is the single token following the name, carried verbatim with
/// no evaluation. Lines without both tokens (and function-like macros) are
/// skipped, as is the configured include guard.
pub fn scan_macros(header_text: &str, config: &LibraryConfig) -> Vec<MacroConstant> {
    let re = Regex::new(r"#define\s+(\w+)\s+(\S+)").unwrap();

    let mut macros = Vec::new();
    for line in header_text.lines() {
        let Some(captures) = re.captures(line) else {
            if line.contains("#define") {
                tracing::debug!("skipping malformed #define line: {}", line.trim());
            }
            continue;
        };

        let name = &captures[1];
        if config.is_include_guard(name) {
            continue;
        }

        macros.push(MacroConstant::new(name, &captures[2]));
    }

    macros
}
