//! Callable descriptors and canonical identity.

use crate::stubs::ExportDecl;
use serde::Serialize;
use std::sync::Arc;

/// One specification-defined callable.
///
/// Documentation text is carried because the packaging convention marks
/// extension aliases there (see [`crate::extension::ALIAS_MARKER`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Callable {
    /// Name of the callable within its namespace.
    pub name: String,
    /// Stub module that defines it.
    pub module: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

/// Shared handle to a canonical [`Callable`].
///
/// The allocation is the identity: alias resolution substitutes the
/// canonical handle, so two entries are the same callable exactly when
/// [`same_callable`] holds.
pub type CallableRef = Arc<Callable>;

/// Whether two handles denote the same canonical callable.
pub fn same_callable(a: &CallableRef, b: &CallableRef) -> bool {
    Arc::ptr_eq(a, b)
}

/// Mint a canonical callable from a declared export.
pub(crate) fn callable_from_export(module: &str, export: &ExportDecl) -> CallableRef {
    Arc::new(Callable {
        name: export.name.clone(),
        module: module.to_string(),
        doc: export.doc.clone(),
    })
}
