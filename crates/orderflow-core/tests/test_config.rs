use orderflow_core::config::OrderflowConfig;
use std::path::PathBuf;

#[test]
fn test_parse_full_config_json() {
    let json = r#"{
        "workbook": {
            "file": "/data/orders/workbook.json"
        },
        "tables": {
            "requested": "Requested",
            "raw_responses": "Form Responses 1",
            "approved": "Approved",
            "ordered": "Ordered"
        },
        "order_server": {
            "endpoint": "https://orders.internal.test/upload",
            "timeout_secs": 15
        },
        "export": {
            "out_dir": "/data/orders/exports"
        }
    }"#;

    let config = OrderflowConfig::from_json_str(json).expect("Failed to parse config");

    assert_eq!(config.workbook.path, PathBuf::from("/data/orders/workbook.json"), "workbook file should map to path");
    assert_eq!(config.tables.raw_responses, "Form Responses 1");
    assert_eq!(config.order_server.url, "https://orders.internal.test/upload", "endpoint should map to url");
    assert_eq!(config.order_server.timeout_secs, 15);
    assert_eq!(config.export.out_dir, PathBuf::from("/data/orders/exports"));
}

#[test]
fn test_parse_minimal_config() {
    let config = OrderflowConfig::from_json_str("{}").expect("Failed to parse minimal config");

    assert_eq!(config.workbook.path, PathBuf::from("workbook.json"));
    assert_eq!(config.tables.requested, "Requested");
    assert_eq!(config.tables.raw_responses, "Raw Responses");
    assert_eq!(config.tables.approved, "Approved");
    assert_eq!(config.tables.ordered, "Ordered");
    assert_eq!(config.order_server.timeout_secs, 60, "Default timeout");
    assert!(config.order_server.url.starts_with("https://"));
}

#[test]
fn test_validate_config() {
    let empty_url = r#"{ "order_server": { "url": "" } }"#;
    let result = OrderflowConfig::from_json_str(empty_url);
    assert!(result.is_err(), "Parsing should fail with an empty URL");
    assert!(result.unwrap_err().to_string().contains("required"));

    let bad_scheme = r#"{ "order_server": { "url": "ftp://orders" } }"#;
    assert!(OrderflowConfig::from_json_str(bad_scheme).is_err());

    let zero_timeout = r#"{ "order_server": { "timeout_secs": 0 } }"#;
    assert!(OrderflowConfig::from_json_str(zero_timeout).is_err());

    let blank_table = r#"{ "tables": { "approved": "  " } }"#;
    let result = OrderflowConfig::from_json_str(blank_table);
    assert!(result.unwrap_err().to_string().contains("approved"));
}

#[test]
fn test_load_from_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("orderflow.json");
    std::fs::write(
        &path,
        r#"{ "order_server": { "url": "http://localhost:8080/upload" }, "tables": { "ordered": "Sent" } }"#,
    )
    .unwrap();

    let config = OrderflowConfig::from_file(&path).expect("Failed to load config file");

    assert_eq!(config.order_server.url, "http://localhost:8080/upload");
    assert_eq!(config.tables.ordered, "Sent");
    assert_eq!(config.tables.requested, "Requested");
}

#[test]
fn test_missing_file_is_config_error() {
    let result = OrderflowConfig::from_file("/definitely/not/here/orderflow.json");
    assert!(result.unwrap_err().to_string().contains("does not exist"));
}
