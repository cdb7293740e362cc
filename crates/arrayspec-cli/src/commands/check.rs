use crate::support::{build_registry_or_exit, print_payload_or_exit};

pub fn run(root: String, api_version: String, json_output: bool) {
    let registry = build_registry_or_exit(&root, &api_version);

    if json_output {
        print_payload_or_exit(&registry.summary_payload());
        return;
    }

    println!("arrayspec check");
    println!("  Api version: {}", registry.version());
    println!("  Functions: {}", registry.name_to_func().len());
    println!(
        "  Array methods: {} / attributes: {}",
        registry.array().methods.len(),
        registry.array().attributes.len()
    );
    let categories: Vec<&str> = registry
        .category_to_funcs()
        .keys()
        .map(String::as_str)
        .collect();
    println!(
        "  Categories ({}): {}",
        categories.len(),
        categories.join(", ")
    );
    println!(
        "  Extensions ({}): {}",
        registry.extensions().len(),
        registry.extensions().join(", ")
    );
}
