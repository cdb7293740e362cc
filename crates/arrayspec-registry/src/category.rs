//! Category classification of `*_functions` stub modules.

use crate::callable::{CallableRef, callable_from_export};
use crate::error::RegistryError;
use crate::stubs::{ExportKind, StubModule};
use std::collections::BTreeMap;

/// Module-name suffix marking a function-category module. The category tag
/// is the module name with this suffix stripped.
pub const CATEGORY_SUFFIX: &str = "_functions";

/// Resolve every `*_functions` module into its category tag and ordered
/// callable list.
pub fn classify_categories(
    modules: &BTreeMap<String, StubModule>,
) -> Result<BTreeMap<String, Vec<CallableRef>>, RegistryError> {
    let mut categories = BTreeMap::new();
    for (name, module) in modules {
        let Some(tag) = name.strip_suffix(CATEGORY_SUFFIX) else {
            continue;
        };
        let funcs = resolve_functions(module)?;
        if categories.insert(tag.to_string(), funcs).is_some() {
            return Err(RegistryError::DuplicateCategory {
                tag: tag.to_string(),
                module: name.clone(),
            });
        }
    }
    Ok(categories)
}

/// Resolve a module's declared exports, requiring every one to be a plain
/// callable. Violation means a malformed specification package.
pub(crate) fn resolve_functions(module: &StubModule) -> Result<Vec<CallableRef>, RegistryError> {
    let mut funcs = Vec::with_capacity(module.exports.len());
    for export in &module.exports {
        if export.kind != ExportKind::Function {
            return Err(RegistryError::NotAFunction {
                module: module.name.clone(),
                name: export.name.clone(),
                kind: export.kind,
            });
        }
        funcs.push(callable_from_export(&module.name, export));
    }
    Ok(funcs)
}
