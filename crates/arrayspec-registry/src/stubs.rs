//! Stub-module declaration files and their discovery.
//!
//! Each stub module is one TOML file under the version's stub directory. The
//! file stem is the module name; the file declares an ordered export list of
//! `(name, kind, doc)` entries. Only declared exports are ever resolved.

use crate::error::RegistryError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// What a declared export is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// A plain callable.
    Function,
    /// A read-only computed attribute.
    Property,
    /// The constructor-like initializer. Exists in the stub for
    /// documentation rendering only; never part of the operational API.
    Constructor,
    /// A redirect to the root-namespace callable of the same name.
    Alias,
}

impl ExportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportKind::Function => "function",
            ExportKind::Property => "property",
            ExportKind::Constructor => "constructor",
            ExportKind::Alias => "alias",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_kind() -> ExportKind {
    ExportKind::Function
}

/// One entry of a stub module's declared export list.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportDecl {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: ExportKind,
    #[serde(default)]
    pub doc: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StubModuleFile {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    exports: Vec<ExportDecl>,
}

/// A loaded stub module: a name plus its declared export surface.
/// Read-only after load.
#[derive(Debug, Clone)]
pub struct StubModule {
    pub name: String,
    pub description: Option<String>,
    pub exports: Vec<ExportDecl>,
}

impl StubModule {
    /// Look up a declared export by name.
    pub fn export(&self, name: &str) -> Option<&ExportDecl> {
        self.exports.iter().find(|export| export.name == name)
    }
}

fn parse_stub_module(name: &str, path: &Path, text: &str) -> Result<StubModule, RegistryError> {
    let file: StubModuleFile =
        toml::from_str(text).map_err(|source| RegistryError::ParseToml {
            path: path.display().to_string(),
            source,
        })?;
    Ok(StubModule {
        name: name.to_string(),
        description: file.description,
        exports: file.exports,
    })
}

/// Load every `*.toml` stub module under `stubs_dir`, keyed by module name.
///
/// Directory iteration order is not relied upon: the result map is sorted,
/// and the special modules (`array_object`, `info`, extensions) are looked
/// up by name rather than by position.
pub fn load_stub_modules(
    stubs_dir: &Path,
) -> Result<BTreeMap<String, StubModule>, RegistryError> {
    let mut modules = BTreeMap::new();
    let entries = fs::read_dir(stubs_dir).map_err(|source| RegistryError::Read {
        path: stubs_dir.display().to_string(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| RegistryError::Read {
            path: stubs_dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let text = fs::read_to_string(&path).map_err(|source| RegistryError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let module = parse_stub_module(name, &path, &text)?;
        modules.insert(name.to_string(), module);
    }
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(prefix: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "arrayspec-stubs-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        path
    }

    #[test]
    fn export_kind_defaults_to_function_and_order_is_preserved() {
        let text = r#"
description = "Sorting functions."

[[exports]]
name = "sort"

[[exports]]
name = "argsort"
doc = "Returns the indices that sort an array."
"#;
        let module =
            parse_stub_module("sorting_functions", Path::new("sorting_functions.toml"), text)
                .expect("stub should parse");
        assert_eq!(module.name, "sorting_functions");
        assert_eq!(module.description.as_deref(), Some("Sorting functions."));
        let names: Vec<&str> = module.exports.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["sort", "argsort"]);
        assert!(module.exports.iter().all(|e| e.kind == ExportKind::Function));
    }

    #[test]
    fn declared_kinds_parse() {
        let text = r#"
[[exports]]
name = "__init__"
kind = "constructor"

[[exports]]
name = "shape"
kind = "property"

[[exports]]
name = "matmul"
kind = "alias"
"#;
        let module = parse_stub_module("array_object", Path::new("array_object.toml"), text)
            .expect("stub should parse");
        let kinds: Vec<ExportKind> = module.exports.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [
                ExportKind::Constructor,
                ExportKind::Property,
                ExportKind::Alias
            ]
        );
        assert_eq!(
            module.export("shape").map(|e| e.kind),
            Some(ExportKind::Property)
        );
        assert!(module.export("missing").is_none());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let text = "[[exports]]\nname = \"x\"\nkind = \"gadget\"\n";
        let err = parse_stub_module("m", Path::new("m.toml"), text)
            .expect_err("unknown kind should fail");
        assert!(matches!(err, RegistryError::ParseToml { .. }));
    }

    #[test]
    fn discovery_keys_by_file_stem_and_ignores_other_entries() {
        let dir = temp_dir("discover");
        fs::write(
            dir.join("elementwise_functions.toml"),
            "[[exports]]\nname = \"add\"\n",
        )
        .expect("stub should be written");
        fs::write(dir.join("README.md"), "not a stub").expect("readme should be written");
        fs::create_dir_all(dir.join("nested")).expect("subdir should be created");

        let modules = load_stub_modules(&dir).expect("discovery should succeed");
        assert_eq!(
            modules.keys().map(String::as_str).collect::<Vec<_>>(),
            ["elementwise_functions"]
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn discovery_fails_on_a_missing_directory() {
        let base = temp_dir("missing");
        let err = load_stub_modules(&base.join("does-not-exist"))
            .expect_err("missing dir should fail");
        assert!(matches!(err, RegistryError::Read { .. }));
        let _ = fs::remove_dir_all(base);
    }
}
