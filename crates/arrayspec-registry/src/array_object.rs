//! Array-interface extraction from the `array_object` stub module.

use crate::callable::{CallableRef, callable_from_export};
use crate::error::RegistryError;
use crate::stubs::{ExportKind, StubModule};
use std::collections::BTreeMap;

/// Name of the stub module describing the array type.
pub const ARRAY_OBJECT_MODULE: &str = "array_object";

/// The array type's operational surface: callable methods and read-only
/// attribute names. The constructor-like initializer is excluded.
#[derive(Debug, Clone)]
pub struct ArrayInterface {
    pub methods: Vec<CallableRef>,
    pub attributes: Vec<String>,
}

/// Extract the array interface from the discovered modules.
///
/// Empty method or attribute lists are not rejected here; the registry
/// validator catches them.
pub fn extract_array_interface(
    modules: &BTreeMap<String, StubModule>,
) -> Result<ArrayInterface, RegistryError> {
    let Some(module) = modules.get(ARRAY_OBJECT_MODULE) else {
        return Err(RegistryError::MissingModule {
            name: ARRAY_OBJECT_MODULE.to_string(),
        });
    };
    let mut methods = Vec::new();
    let mut attributes = Vec::new();
    for export in &module.exports {
        match export.kind {
            ExportKind::Function => methods.push(callable_from_export(&module.name, export)),
            ExportKind::Property => attributes.push(export.name.clone()),
            ExportKind::Constructor => {}
            ExportKind::Alias => {
                return Err(RegistryError::NotAFunction {
                    module: module.name.clone(),
                    name: export.name.clone(),
                    kind: export.kind,
                });
            }
        }
    }
    Ok(ArrayInterface {
        methods,
        attributes,
    })
}
