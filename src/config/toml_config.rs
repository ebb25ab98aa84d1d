use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bare_file_name, validate_dir_names, validate_non_empty_string, validate_path,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub bundle: BundleInfo,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_file")]
    pub file: String,
    #[serde(default)]
    pub manifest: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

fn default_root() -> String {
    ".".to_string()
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["migrationGuides".to_string(), "Deprecations".to_string()]
}

fn default_output_file() -> String {
    "documentation.md".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            manifest: false,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn root_path(&self) -> &str {
        &self.scan.root
    }

    fn output_file(&self) -> &str {
        &self.output.file
    }

    fn excluded_dirs(&self) -> &[String] {
        &self.scan.exclude_dirs
    }

    fn manifest_enabled(&self) -> bool {
        self.output.manifest
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("bundle.name", &self.bundle.name)?;
        validate_path("scan.root", &self.scan.root)?;
        validate_bare_file_name("output.file", &self.output.file)?;
        validate_dir_names("scan.exclude_dirs", &self.scan.exclude_dirs)?;
        Ok(())
    }
}
