//! Error types for registry construction.

use crate::stubs::ExportKind;

/// Fatal faults raised while building the signature registry.
///
/// The directory and I/O variants are configuration faults: the environment
/// is missing specification package content. The remaining variants are
/// integrity faults in the package itself. Construction is all-or-nothing
/// either way; no partial registry is ever observable.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The human-readable specification directory is absent.
    #[error(
        "specification directory not found: {path}; fetch the bundled specification package (e.g. `git submodule update --init`)"
    )]
    MissingSpecDir { path: String },

    /// The machine-readable stub-module directory is absent.
    #[error(
        "stub directory not found: {path}; fetch the bundled specification package (e.g. `git submodule update --init`)"
    )]
    MissingStubsDir { path: String },

    /// A directory or file in the package could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A stub module is not a valid declaration file.
    #[error("invalid stub module at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A version string is not of the `<year>.<month>` form.
    #[error("invalid api version `{value}`: expected `<digits>.<digits>`")]
    InvalidVersion { value: String },

    /// A module the standard requires is missing from the stub package.
    #[error("stub package has no `{name}` module")]
    MissingModule { name: String },

    /// A module lacks an export the standard requires.
    #[error("module `{module}` does not export `{name}`")]
    MissingExport { module: String, name: String },

    /// An export resolved to something other than a plain callable.
    #[error("module `{module}` export `{name}` is a {kind}, expected a function")]
    NotAFunction {
        module: String,
        name: String,
        kind: ExportKind,
    },

    /// Two modules classified to the same category tag.
    #[error("duplicate category tag `{tag}` (from module `{module}`)")]
    DuplicateCategory { tag: String, module: String },

    /// An alias-marked extension export has no root-namespace counterpart.
    #[error("extension `{module}` aliases `{name}`, but no root-namespace callable of that name exists")]
    AliasTargetMissing { module: String, name: String },

    /// A registry collection came out empty after construction.
    #[error(
        "registry collection `{collection}` is empty; the specification package looks partially installed"
    )]
    EmptyCollection { collection: String },
}
