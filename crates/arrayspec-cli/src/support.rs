use arrayspec_registry::{ApiVersion, Registry, RegistryConfig};
use serde_json::Value;
use std::path::PathBuf;

pub fn build_registry_or_exit(root: &str, api_version: &str) -> Registry {
    let version: ApiVersion = api_version.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    let config = RegistryConfig {
        root: PathBuf::from(root),
        version,
    };
    Registry::build(&config).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn print_payload_or_exit(payload: &Value) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render payload: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}
