//! # Arrayspec Registry
//!
//! In-memory signature registry for a versioned array-computation API
//! specification. The registry is built exactly once from a bundled
//! specification package — TOML stub modules declaring which callables and
//! attributes the standard defines — and exposed as immutable lookup
//! structures for a conformance test suite.
//!
//! The registry answers *which* names exist and *how they are grouped*; it
//! does not validate call signatures or array behavior.
//!
//! ## Build pipeline
//!
//! ```text
//! SpecLayout             ← version-derived package directories
//!     │
//! load_stub_modules      ← name → StubModule
//!     │
//! ArrayInterface         ← array methods + attribute names
//!     │
//! classify_categories    ← "*_functions" modules → tag → callables
//!     │
//! apply_info_functions   ← version-gated info module handling
//!     │
//! resolve_extensions     ← version-gated extensions, alias resolution
//!     │
//! Registry::build        ← merge + non-empty validation
//! ```

pub mod array_object;
pub mod callable;
pub mod category;
pub mod error;
pub mod extension;
pub mod info;
pub mod registry;
pub mod stubs;
pub mod version;

pub use array_object::{ARRAY_OBJECT_MODULE, ArrayInterface, extract_array_interface};
pub use callable::{Callable, CallableRef, same_callable};
pub use category::{CATEGORY_SUFFIX, classify_categories};
pub use error::RegistryError;
pub use extension::{ALIAS_MARKER, active_extensions, merge_extension_funcs, resolve_extensions};
pub use info::{INFO_MODULE, NAMESPACE_INFO_ENTRY, apply_info_functions};
pub use registry::{Registry, RegistryConfig};
pub use stubs::{ExportDecl, ExportKind, StubModule, load_stub_modules};
pub use version::{ApiVersion, FFT_MIN_VERSION, FeatureGates, INFO_MIN_VERSION, SpecLayout};
