//! Version-gated extension modules and alias resolution.
//!
//! Extensions may re-export root-namespace callables for documentation
//! convenience. Alias-marked exports resolve to the canonical global entry
//! of the same name so the registry never holds two descriptors for what is
//! semantically one callable.

use crate::callable::{CallableRef, callable_from_export};
use crate::error::RegistryError;
use crate::stubs::{ExportKind, StubModule};
use crate::version::FeatureGates;
use std::collections::BTreeMap;

/// Doc-text convention marking an extension export as an alias of the
/// root-namespace callable of the same name. The explicit `alias` export
/// kind resolves through the same path.
pub const ALIAS_MARKER: &str = "Alias";

/// Extension tags active under the given feature gates, in activation order.
pub fn active_extensions(gates: FeatureGates) -> Vec<String> {
    let mut extensions = vec!["linalg".to_string()];
    if gates.fft {
        extensions.push("fft".to_string());
    }
    extensions
}

/// Resolve each active extension module's exports, substituting alias-marked
/// exports with the canonical root-namespace callable of the same name.
pub fn resolve_extensions(
    extensions: &[String],
    modules: &BTreeMap<String, StubModule>,
    name_to_func: &BTreeMap<String, CallableRef>,
) -> Result<BTreeMap<String, Vec<CallableRef>>, RegistryError> {
    let mut extension_to_funcs = BTreeMap::new();
    for ext in extensions {
        let Some(module) = modules.get(ext) else {
            return Err(RegistryError::MissingModule { name: ext.clone() });
        };
        let mut funcs = Vec::with_capacity(module.exports.len());
        for export in &module.exports {
            let aliased = match export.kind {
                ExportKind::Alias => true,
                ExportKind::Function => export
                    .doc
                    .as_deref()
                    .is_some_and(|doc| doc.contains(ALIAS_MARKER)),
                ExportKind::Property | ExportKind::Constructor => {
                    return Err(RegistryError::NotAFunction {
                        module: module.name.clone(),
                        name: export.name.clone(),
                        kind: export.kind,
                    });
                }
            };
            if aliased {
                let Some(canonical) = name_to_func.get(&export.name) else {
                    return Err(RegistryError::AliasTargetMissing {
                        module: module.name.clone(),
                        name: export.name.clone(),
                    });
                };
                funcs.push(canonical.clone());
            } else {
                funcs.push(callable_from_export(&module.name, export));
            }
        }
        extension_to_funcs.insert(ext.clone(), funcs);
    }
    Ok(extension_to_funcs)
}

/// Fold extension-only callables into the global mapping. First writer wins;
/// existing entries are never overwritten, so every callable reachable via
/// an extension stays reachable by name.
pub fn merge_extension_funcs(
    extensions: &[String],
    extension_to_funcs: &BTreeMap<String, Vec<CallableRef>>,
    name_to_func: &mut BTreeMap<String, CallableRef>,
) {
    for ext in extensions {
        let Some(funcs) = extension_to_funcs.get(ext) else {
            continue;
        };
        for func in funcs {
            name_to_func
                .entry(func.name.clone())
                .or_insert_with(|| func.clone());
        }
    }
}
