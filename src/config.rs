//! Per-library generation configuration.
//!
//! Everything that varies between C libraries: the name prefixes that select
//! which declarations belong to the library, the handful of specially-treated
//! type names, and the include directories the preprocessing step needs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for one library's binding generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Prefix of the library's own declarations (e.g. `rascal_`). Only
    /// declarations carrying this prefix are collected.
    pub library_prefix: String,

    /// Prefix of the dependency library's types (e.g. `eqs_`). These pass
    /// through name resolution untouched; a companion binding module is
    /// assumed to define them.
    pub dependency_prefix: String,

    /// Include-guard macro name, excluded from the macro scan.
    pub include_guard: Option<String>,

    /// Status/result type: functions returning it are marked for the
    /// external result-checking adapter.
    pub status_type: Option<String>,

    /// Enum type that crosses the boundary as a plain C `int` rather than
    /// as an enum construct (ABI convention).
    pub plain_int_enum: Option<String>,

    /// Local stub-include directory, passed to the preprocessing step.
    pub stub_include_dir: Option<PathBuf>,

    /// Dependency library's include directory, passed to the preprocessing
    /// step.
    pub dependency_include_dir: Option<PathBuf>,
}

impl LibraryConfig {
    /// Create a configuration from the two library prefixes.
    pub fn new(library_prefix: impl Into<String>, dependency_prefix: impl Into<String>) -> Self {
        LibraryConfig {
            library_prefix: library_prefix.into(),
            dependency_prefix: dependency_prefix.into(),
            include_guard: None,
            status_type: None,
            plain_int_enum: None,
            stub_include_dir: None,
            dependency_include_dir: None,
        }
    }

    /// Set the include-guard macro name.
    pub fn with_include_guard(mut self, name: impl Into<String>) -> Self {
        self.include_guard = Some(name.into());
        self
    }

    /// Set the status/result type name.
    pub fn with_status_type(mut self, name: impl Into<String>) -> Self {
        self.status_type = Some(name.into());
        self
    }

    /// Set the enum type represented as a plain integer.
    pub fn with_plain_int_enum(mut self, name: impl Into<String>) -> Self {
        self.plain_int_enum = Some(name.into());
        self
    }

    /// Set the include directories for the preprocessing step.
    pub fn with_include_dirs(
        mut self,
        stub: impl Into<PathBuf>,
        dependency: impl Into<PathBuf>,
    ) -> Self {
        self.stub_include_dir = Some(stub.into());
        self.dependency_include_dir = Some(dependency.into());
        self
    }

    /// Check if a declaration name belongs to the library itself.
    pub fn is_library_name(&self, name: &str) -> bool {
        name.starts_with(&self.library_prefix)
    }

    /// Check if a type name belongs to the dependency library.
    pub fn is_dependency_name(&self, name: &str) -> bool {
        name.starts_with(&self.dependency_prefix)
    }

    /// Check if a type name is the designated status type.
    pub fn is_status_type(&self, name: &str) -> bool {
        self.status_type.as_deref() == Some(name)
    }

    /// Check if a type name is the plain-integer enum.
    pub fn is_plain_int_enum(&self, name: &str) -> bool {
        self.plain_int_enum.as_deref() == Some(name)
    }

    /// Check if a macro name is the include guard.
    pub fn is_include_guard(&self, name: &str) -> bool {
        self.include_guard.as_deref() == Some(name)
    }
}
