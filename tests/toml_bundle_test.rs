use md_bundle::core::ConfigProvider;
use md_bundle::utils::validation::Validate;
use md_bundle::{BundleEngine, LocalStorage, SimplePipeline, TomlConfig};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_bundle_from_toml_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("api")).unwrap();
    fs::create_dir_all(root.join("drafts")).unwrap();
    fs::write(root.join("intro.md"), "# Intro\n").unwrap();
    fs::write(root.join("api/reference.md"), "# API\n").unwrap();
    fs::write(root.join("drafts/wip.md"), "# WIP\n").unwrap();

    let config_path = root.join("bundle.toml");
    fs::write(
        &config_path,
        format!(
            r#"
            [bundle]
            name = "handbook"

            [scan]
            root = "{}"
            exclude_dirs = ["drafts"]

            [output]
            file = "handbook.md"
            manifest = true
            "#,
            root.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();

    let storage = LocalStorage::new(config.root_path().to_string());
    let pipeline = SimplePipeline::new(storage, config);
    let engine = BundleEngine::new(pipeline);

    let output_path = engine.run().await.unwrap();
    assert!(output_path.ends_with("handbook.md"));

    let output = fs::read_to_string(root.join("handbook.md")).unwrap();
    assert!(output.contains("### File: api/reference.md"));
    assert!(output.contains("### File: intro.md"));
    assert!(!output.contains("wip.md"));

    // manifest 也要一起落地
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("bundle_manifest.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["file_count"], 2);
}

#[test]
fn test_from_file_rejects_missing_config() {
    let result = TomlConfig::from_file("/nonexistent/bundle.toml");
    assert!(result.is_err());
}

#[test]
fn test_from_file_rejects_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bundle.toml");
    fs::write(&config_path, "this is not [valid toml").unwrap();

    let result = TomlConfig::from_file(&config_path);
    assert!(result.is_err());
}
