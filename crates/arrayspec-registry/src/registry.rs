//! Registry construction: the one-shot build pipeline and the exposed
//! lookup surface.

use crate::array_object::{ArrayInterface, extract_array_interface};
use crate::callable::CallableRef;
use crate::category::classify_categories;
use crate::error::RegistryError;
use crate::extension::{active_extensions, merge_extension_funcs, resolve_extensions};
use crate::info::apply_info_functions;
use crate::stubs::load_stub_modules;
use crate::version::{ApiVersion, FeatureGates, SpecLayout};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Which specification package to read, and from where.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Root of the specification package checkout.
    pub root: PathBuf,
    /// Specification version to load.
    pub version: ApiVersion,
}

/// The fully-built, immutable signature registry.
///
/// Built exactly once at startup and never mutated afterwards; callable
/// handles are shared, so concurrent readers need no locking. Lookup misses
/// are caller bugs, surfaced as `None` rather than defaults.
#[derive(Debug, Clone)]
pub struct Registry {
    version: ApiVersion,
    name_to_func: BTreeMap<String, CallableRef>,
    array: ArrayInterface,
    category_to_funcs: BTreeMap<String, Vec<CallableRef>>,
    extensions: Vec<String>,
    extension_to_funcs: BTreeMap<String, Vec<CallableRef>>,
}

impl Registry {
    /// Build the registry from an on-disk specification package.
    ///
    /// Construction either completes fully or fails with the first fault
    /// encountered; no partial registry value is produced.
    pub fn build(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let gates = FeatureGates::for_version(&config.version);
        let layout = SpecLayout::resolve(&config.root, &config.version)?;
        let modules = load_stub_modules(&layout.stubs_dir)?;

        let array = extract_array_interface(&modules)?;
        let mut category_to_funcs = classify_categories(&modules)?;

        // Global mapping seed: array methods, then categories in tag order.
        let mut name_to_func: BTreeMap<String, CallableRef> = BTreeMap::new();
        for func in &array.methods {
            name_to_func.insert(func.name.clone(), func.clone());
        }
        for funcs in category_to_funcs.values() {
            for func in funcs {
                name_to_func.insert(func.name.clone(), func.clone());
            }
        }

        if gates.info {
            apply_info_functions(&modules, &mut name_to_func, &mut category_to_funcs)?;
        }

        let extensions = active_extensions(gates);
        let extension_to_funcs = resolve_extensions(&extensions, &modules, &name_to_func)?;
        merge_extension_funcs(&extensions, &extension_to_funcs, &mut name_to_func);

        let registry = Self {
            version: config.version.clone(),
            name_to_func,
            array,
            category_to_funcs,
            extensions,
            extension_to_funcs,
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Every exposed collection must be non-empty; an empty one almost
    /// always means a partially installed specification package.
    fn validate(&self) -> Result<(), RegistryError> {
        fn ensure(collection: String, is_empty: bool) -> Result<(), RegistryError> {
            if is_empty {
                return Err(RegistryError::EmptyCollection { collection });
            }
            Ok(())
        }
        ensure("name_to_func".to_string(), self.name_to_func.is_empty())?;
        ensure("array_methods".to_string(), self.array.methods.is_empty())?;
        ensure(
            "array_attributes".to_string(),
            self.array.attributes.is_empty(),
        )?;
        ensure(
            "category_to_funcs".to_string(),
            self.category_to_funcs.is_empty(),
        )?;
        ensure("extensions".to_string(), self.extensions.is_empty())?;
        ensure(
            "extension_to_funcs".to_string(),
            self.extension_to_funcs.is_empty(),
        )?;
        for (tag, funcs) in &self.category_to_funcs {
            ensure(format!("category `{tag}`"), funcs.is_empty())?;
        }
        for (tag, funcs) in &self.extension_to_funcs {
            ensure(format!("extension `{tag}`"), funcs.is_empty())?;
        }
        Ok(())
    }

    pub fn version(&self) -> &ApiVersion {
        &self.version
    }

    /// Global name-addressable callable mapping.
    pub fn name_to_func(&self) -> &BTreeMap<String, CallableRef> {
        &self.name_to_func
    }

    /// Look up a callable by name. Absence is a caller bug, not a registry
    /// fault.
    pub fn func(&self, name: &str) -> Option<&CallableRef> {
        self.name_to_func.get(name)
    }

    pub fn array(&self) -> &ArrayInterface {
        &self.array
    }

    pub fn category_to_funcs(&self) -> &BTreeMap<String, Vec<CallableRef>> {
        &self.category_to_funcs
    }

    pub fn category(&self, tag: &str) -> Option<&[CallableRef]> {
        self.category_to_funcs.get(tag).map(Vec::as_slice)
    }

    /// Active extension tags, in activation order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn extension_to_funcs(&self) -> &BTreeMap<String, Vec<CallableRef>> {
        &self.extension_to_funcs
    }

    pub fn extension(&self, tag: &str) -> Option<&[CallableRef]> {
        self.extension_to_funcs.get(tag).map(Vec::as_slice)
    }

    /// Deterministic JSON summary of the registry surface.
    pub fn summary_payload(&self) -> Value {
        json!({
            "schema": 1,
            "apiVersion": self.version.as_str(),
            "functionCount": self.name_to_func.len(),
            "arrayMethodCount": self.array.methods.len(),
            "arrayAttributeCount": self.array.attributes.len(),
            "categories": self.category_to_funcs.keys().cloned().collect::<Vec<_>>(),
            "extensions": self.extensions.clone(),
        })
    }

    /// Full JSON projection of the registry: every name per surface.
    pub fn registry_payload(&self) -> Value {
        fn names(funcs: &[CallableRef]) -> Vec<String> {
            funcs.iter().map(|func| func.name.clone()).collect()
        }
        let categories: BTreeMap<String, Vec<String>> = self
            .category_to_funcs
            .iter()
            .map(|(tag, funcs)| (tag.clone(), names(funcs)))
            .collect();
        let extension_funcs: BTreeMap<String, Vec<String>> = self
            .extension_to_funcs
            .iter()
            .map(|(tag, funcs)| (tag.clone(), names(funcs)))
            .collect();
        json!({
            "schema": 1,
            "apiVersion": self.version.as_str(),
            "functions": self.name_to_func.keys().cloned().collect::<Vec<_>>(),
            "arrayMethods": names(&self.array.methods),
            "arrayAttributes": self.array.attributes.clone(),
            "categories": categories,
            "extensions": self.extensions.clone(),
            "extensionFunctions": extension_funcs,
        })
    }
}
