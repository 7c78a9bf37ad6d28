//! Catalog lookup and search integration tests
//!
//! Exercises the public catalog API against the built-in table.

use toolbox::tools::{ToolCatalog, categories, get_tools_by_category, search_tools, tools};

fn ids(found: &[&toolbox::tools::Tool]) -> Vec<String> {
    found.iter().map(|t| t.id.clone()).collect()
}

/// Every tool references a category that exists
#[test]
fn test_every_tool_has_known_category() {
    for tool in tools() {
        assert!(
            categories().iter().any(|c| c.id == tool.category),
            "{} has unknown category {}",
            tool.id,
            tool.category
        );
    }
}

/// Unknown categories yield nothing rather than an error
#[test]
fn test_unknown_categories_are_empty() {
    for id in ["", "misc", "Text", "text ", "network-tools"] {
        assert!(get_tools_by_category(id).is_empty(), "category {:?}", id);
    }
}

/// Category lookups partition the catalog
#[test]
fn test_categories_partition_catalog() {
    let total: usize = categories()
        .iter()
        .map(|c| get_tools_by_category(&c.id).len())
        .sum();
    assert_eq!(total, tools().len());
}

#[test]
fn test_network_category_order() {
    assert_eq!(
        ids(&get_tools_by_category("network")),
        vec!["ip-lookup", "browser-info", "url-parser", "useragent-parser", "subnet-calculator"]
    );
}

/// Empty keyword returns the whole catalog in order
#[test]
fn test_empty_search_returns_catalog_order() {
    let all: Vec<String> = tools().iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids(&search_tools("")), all);
}

#[test]
fn test_search_json_any_case() {
    for keyword in ["json", "JSON", "Json"] {
        assert!(
            search_tools(keyword).iter().any(|t| t.id == "json-formatter"),
            "keyword {:?}",
            keyword
        );
    }
}

#[test]
fn test_search_base64_matches_both_tools() {
    let found = ids(&search_tools("base64"));
    assert!(found.contains(&"base64".to_string()));
    assert!(found.contains(&"image-base64".to_string()));
}

#[test]
fn test_search_description_only_match() {
    // "SHA256" appears only in the hash generator's description
    assert_eq!(ids(&search_tools("SHA256")), vec!["hash-generator"]);
}

#[test]
fn test_search_results_are_subsequence_of_catalog() {
    let found = search_tools("转换");
    let mut positions = found
        .iter()
        .map(|f| tools().iter().position(|t| t.id == f.id).unwrap());
    let mut last = positions.next().unwrap();
    for pos in positions {
        assert!(pos > last);
        last = pos;
    }
}

#[test]
fn test_search_is_idempotent() {
    for keyword in ["", "ip", "生成", "CSS"] {
        assert_eq!(ids(&search_tools(keyword)), ids(&search_tools(keyword)));
    }
}

/// Upper-case tags in a custom catalog are not case-folded
#[test]
fn test_custom_catalog_uppercase_tag_not_matched() {
    let catalog = ToolCatalog::from_toml(
        r#"
[[category]]
id = "network"
name = "Network"
icon = "Connection"

[[tool]]
id = "subnet"
name = "Subnet"
description = "Mask math"
icon = "Connection"
category = "network"
keywords = ["CIDR"]
"#,
    )
    .unwrap();

    assert!(catalog.search("cidr").is_empty());
    assert!(catalog.search("CIDR").is_empty());
    assert_eq!(catalog.search("subnet").len(), 1);
}

#[test]
fn test_custom_catalog_rejects_dangling_category() {
    let result = ToolCatalog::from_toml(
        r#"
[[tool]]
id = "lonely"
name = "Lonely"
description = "No category"
icon = "Grid"
category = "nowhere"
"#,
    );
    assert!(result.is_err());
}
