//! # Config Loader
//!
//! Loads merge run configuration.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate stream, separator and sink settings
//! - Produce a `MergeBlueprint`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let blueprint = ConfigLoader::load_from_path(Path::new("merge.toml")).unwrap();
//! println!("left: {}", blueprint.left.path.display());
//! ```

mod parser;
mod validator;

pub use contracts::MergeBlueprint;
pub use parser::ConfigFormat;
pub use validator::{is_ambiguous_separator, validate, MAX_PRECISION};

use contracts::ContractError;
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// The format comes from the file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<MergeBlueprint, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<MergeBlueprint, ContractError> {
        let blueprint = parser::parse(content, format)?;
        validator::validate(&blueprint)?;
        Ok(blueprint)
    }

    /// Serialize MergeBlueprint to TOML string
    pub fn to_toml(blueprint: &MergeBlueprint) -> Result<String, ContractError> {
        toml::to_string_pretty(blueprint)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize MergeBlueprint to JSON string
    pub fn to_json(blueprint: &MergeBlueprint) -> Result<String, ContractError> {
        serde_json::to_string_pretty(blueprint)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }

    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        ConfigFormat::from_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            if ext.is_empty() {
                ContractError::config_parse("cannot determine file format from extension")
            } else {
                ContractError::config_parse(format!("unsupported config format: .{ext}"))
            }
        })
    }

    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
