//! Version-gated handling of the `info` stub module.
//!
//! The distinguished `__array_namespace_info__` export is a root-namespace
//! construct; the remaining exports are informational query callables that
//! are name-addressable but belong to no category.

use crate::callable::CallableRef;
use crate::category::resolve_functions;
use crate::error::RegistryError;
use crate::stubs::StubModule;
use std::collections::BTreeMap;

/// Name of the info stub module. Also the tag of the category holding the
/// namespace-level entry point.
pub const INFO_MODULE: &str = "info";

/// The namespace-level introspection entry point.
pub const NAMESPACE_INFO_ENTRY: &str = "__array_namespace_info__";

/// Fold the info module into the global mapping and the category map.
///
/// Every export except [`NAMESPACE_INFO_ENTRY`] is flattened into
/// `name_to_func`, overwriting on name collision. The distinguished entry is
/// inserted globally and becomes the sole member of the `info` category.
pub fn apply_info_functions(
    modules: &BTreeMap<String, StubModule>,
    name_to_func: &mut BTreeMap<String, CallableRef>,
    category_to_funcs: &mut BTreeMap<String, Vec<CallableRef>>,
) -> Result<(), RegistryError> {
    let Some(module) = modules.get(INFO_MODULE) else {
        return Err(RegistryError::MissingModule {
            name: INFO_MODULE.to_string(),
        });
    };
    let mut namespace_entry = None;
    for func in resolve_functions(module)? {
        if func.name == NAMESPACE_INFO_ENTRY {
            namespace_entry = Some(func);
        } else {
            name_to_func.insert(func.name.clone(), func);
        }
    }
    let Some(namespace_entry) = namespace_entry else {
        return Err(RegistryError::MissingExport {
            module: INFO_MODULE.to_string(),
            name: NAMESPACE_INFO_ENTRY.to_string(),
        });
    };
    name_to_func.insert(namespace_entry.name.clone(), namespace_entry.clone());
    if category_to_funcs
        .insert(INFO_MODULE.to_string(), vec![namespace_entry])
        .is_some()
    {
        return Err(RegistryError::DuplicateCategory {
            tag: INFO_MODULE.to_string(),
            module: INFO_MODULE.to_string(),
        });
    }
    Ok(())
}
