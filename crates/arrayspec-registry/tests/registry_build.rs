//! Integration tests: build the registry from a committed synthetic
//! specification package.
//!
//! The fixture package under tests/fixtures/package/ carries stub modules
//! for versions 2021.12 and 2023.12, plus a 2020.12 whose specification
//! documents exist but whose stub directory was never installed.

use arrayspec_registry::{
    NAMESPACE_INFO_ENTRY, Registry, RegistryConfig, RegistryError, same_callable,
};
use std::path::PathBuf;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/package")
}

fn build(version: &str) -> Registry {
    let config = RegistryConfig {
        root: fixture_root(),
        version: version.parse().expect("version should parse"),
    };
    Registry::build(&config).expect("registry should build")
}

fn build_err(version: &str) -> RegistryError {
    let config = RegistryConfig {
        root: fixture_root(),
        version: version.parse().expect("version should parse"),
    };
    Registry::build(&config).expect_err("build should fail")
}

#[test]
fn full_build_covers_every_surface() {
    let registry = build("2023.12");

    assert_eq!(
        registry
            .category_to_funcs()
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>(),
        [
            "elementwise",
            "info",
            "linear_algebra",
            "sorting",
            "statistical"
        ]
    );
    assert_eq!(registry.extensions(), ["linalg", "fft"]);

    let methods: Vec<&str> = registry
        .array()
        .methods
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(methods, ["__add__", "__mul__", "__matmul__", "to_device"]);
    assert!(!methods.contains(&"__init__"));
    assert_eq!(
        registry.array().attributes,
        ["dtype", "device", "ndim", "shape"]
    );

    // Array methods are name-addressable too.
    assert!(registry.func("__add__").is_some());
}

#[test]
fn sorting_category_matches_the_declared_exports() {
    let registry = build("2023.12");
    let sorting = registry.category("sorting").expect("sorting should exist");
    let names: Vec<&str> = sorting.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["sort", "argsort"]);
    for func in sorting {
        let global = registry.func(&func.name).expect("name should be global");
        assert!(same_callable(func, global));
    }
}

#[test]
fn every_category_and_extension_callable_is_globally_reachable() {
    let registry = build("2023.12");
    for (tag, funcs) in registry.category_to_funcs() {
        for func in funcs {
            let global = registry
                .func(&func.name)
                .unwrap_or_else(|| panic!("category `{tag}` entry `{}` not global", func.name));
            assert!(same_callable(func, global), "divergent `{}`", func.name);
        }
    }
    for (tag, funcs) in registry.extension_to_funcs() {
        for func in funcs {
            let global = registry
                .func(&func.name)
                .unwrap_or_else(|| panic!("extension `{tag}` entry `{}` not global", func.name));
            assert!(same_callable(func, global), "divergent `{}`", func.name);
        }
    }
}

#[test]
fn alias_exports_resolve_to_canonical_root_callables() {
    let registry = build("2023.12");
    let linalg = registry.extension("linalg").expect("linalg should exist");

    for aliased in ["matmul", "matrix_transpose", "tensordot"] {
        let ext_func = linalg
            .iter()
            .find(|f| f.name == aliased)
            .unwrap_or_else(|| panic!("linalg should export `{aliased}`"));
        let root_func = registry.func(aliased).expect("root callable should exist");
        assert!(
            same_callable(ext_func, root_func),
            "`{aliased}` resolved to a divergent copy"
        );
        assert_eq!(ext_func.module, "linear_algebra_functions");
    }

    // Direct exports keep their extension-local definition.
    let det = linalg.iter().find(|f| f.name == "det").expect("det");
    assert_eq!(det.module, "linalg");
    assert!(same_callable(det, registry.func("det").expect("det global")));
}

#[test]
fn info_surfaces_follow_the_gate() {
    let registry = build("2023.12");
    let info = registry.category("info").expect("info should exist");
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].name, NAMESPACE_INFO_ENTRY);
    for flattened in ["capabilities", "default_device", "default_dtypes"] {
        assert!(registry.func(flattened).is_some());
        assert!(
            !registry
                .category_to_funcs()
                .values()
                .flatten()
                .any(|f| f.name == flattened),
            "`{flattened}` should not be in any category"
        );
    }

    let registry = build("2021.12");
    assert!(registry.category("info").is_none());
    assert!(registry.func("capabilities").is_none());
    assert!(registry.func(NAMESPACE_INFO_ENTRY).is_none());
}

#[test]
fn fft_extension_follows_the_gate() {
    let registry = build("2021.12");
    assert_eq!(registry.extensions(), ["linalg"]);
    assert!(registry.extension("fft").is_none());

    let registry = build("2023.12");
    let fft = registry.extension("fft").expect("fft should exist");
    let names: Vec<&str> = fft.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["fft", "ifft", "fftn"]);
}

#[test]
fn alias_resolution_is_stable_across_builds() {
    for _ in 0..2 {
        let registry = build("2021.12");
        let linalg = registry.extension("linalg").expect("linalg should exist");
        let matmul = linalg.iter().find(|f| f.name == "matmul").expect("matmul");
        assert!(same_callable(
            matmul,
            registry.func("matmul").expect("matmul global")
        ));
    }
}

#[test]
fn missing_stub_directory_fails_before_any_registry_exists() {
    let err = build_err("2020.12");
    assert!(matches!(err, RegistryError::MissingStubsDir { .. }), "{err}");
}

#[test]
fn missing_specification_directory_fails_first() {
    let err = build_err("2019.12");
    assert!(matches!(err, RegistryError::MissingSpecDir { .. }), "{err}");
}
