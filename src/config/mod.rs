pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_bare_file_name, validate_dir_names, validate_path, Validate,
};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "md-bundle")]
#[command(about = "Bundles a markdown documentation tree into a single file")]
pub struct CliConfig {
    /// Documentation root to scan
    #[arg(long, default_value = ".")]
    pub root_path: String,

    /// Name of the aggregated output file, written under the root
    #[arg(long, default_value = "documentation.md")]
    pub output_file: String,

    /// Directory names pruned from the walk (exact segment match)
    #[arg(long, value_delimiter = ',', default_value = "migrationGuides,Deprecations")]
    pub exclude_dirs: Vec<String>,

    /// Also write a JSON manifest describing the bundle
    #[arg(long)]
    pub manifest: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn root_path(&self) -> &str {
        &self.root_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn excluded_dirs(&self) -> &[String] {
        &self.exclude_dirs
    }

    fn manifest_enabled(&self) -> bool {
        self.manifest
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("root_path", &self.root_path)?;
        validate_bare_file_name("output_file", &self.output_file)?;
        validate_dir_names("exclude_dirs", &self.exclude_dirs)?;
        Ok(())
    }
}
