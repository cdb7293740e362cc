use crate::support::{build_registry_or_exit, print_payload_or_exit};

pub fn run(root: String, api_version: String) {
    let registry = build_registry_or_exit(&root, &api_version);
    print_payload_or_exit(&registry.registry_payload());
}
