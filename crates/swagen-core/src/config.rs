//! Project configuration for code generation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::DEFAULT_OPAQUE_TYPE;

/// Project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Swagger document path (local file)
    pub spec: PathBuf,

    /// Directory the generated modules are written to
    pub output_dir: PathBuf,

    /// Name of the generated operations trait
    pub trait_name: String,

    /// Rust type used where a schema cannot be given a precise type
    pub opaque_type: String,

    /// Generate the operations trait alongside the types
    pub stubs: bool,

    /// Module path the operations file imports the types from, e.g.
    /// `crate::petstore_defs`
    pub types_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spec: PathBuf::from("swagger.yaml"),
            output_dir: PathBuf::from("generated"),
            trait_name: "Api".to_string(),
            opaque_type: DEFAULT_OPAQUE_TYPE.to_string(),
            stubs: true,
            types_path: None,
        }
    }
}

impl Config {
    /// Load config from file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e.to_string()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Load from the first default location that exists (.swagen.toml,
    /// .swagen.json, swagen.toml), or the defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns error if a config file exists but cannot be read or parsed
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_from_dir(Path::new("."))
    }

    /// Like [`Config::load_default`], relative to `dir`.
    ///
    /// # Errors
    ///
    /// Returns error if a config file exists but cannot be read or parsed
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let candidates = [".swagen.toml", ".swagen.json", "swagen.toml"];

        for name in candidates {
            let path = dir.join(name);
            if path.exists() {
                tracing::debug!(path = %path.display(), "using config file");
                return Self::load(&path);
            }
        }

        // No config file, return default
        Ok(Self::default())
    }

    /// Create example config file
    #[must_use]
    pub fn example() -> &'static str {
        r#"# swagen configuration

# Swagger 2.0 document (JSON or YAML)
spec = "swagger.yaml"

# Where generated modules are written
output_dir = "generated"

# Name of the generated operations trait
trait_name = "Api"

# Type used for free-form or unsupported schemas
opaque_type = "serde_json::Value"

# Generate the operations trait (default: true)
stubs = true

# Module the operations file imports the types from
# types_path = "crate::generated::swagger_defs"
"#
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {0}: {1}")]
    Io(PathBuf, String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.spec, PathBuf::from("swagger.yaml"));
        assert_eq!(config.trait_name, "Api");
        assert_eq!(config.opaque_type, "serde_json::Value");
        assert!(config.stubs);
    }

    #[test]
    fn parse_toml() {
        let toml = r#"
spec = "petstore.json"
output_dir = "src/api"
trait_name = "PetStore"
stubs = false
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.spec, PathBuf::from("petstore.json"));
        assert_eq!(config.output_dir, PathBuf::from("src/api"));
        assert_eq!(config.trait_name, "PetStore");
        assert!(!config.stubs);
        assert_eq!(config.opaque_type, DEFAULT_OPAQUE_TYPE);
        assert_eq!(config.types_path, None);
    }

    #[test]
    fn example_parses_to_defaults() {
        let config: Config = toml::from_str(Config::example()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_toml_ignores_unknown_keys() {
        let config: Config = toml::from_str("spec = \"a.yaml\"\nbackend = \"beast\"\n").unwrap();
        assert_eq!(config.spec, PathBuf::from("a.yaml"));
    }

    #[test]
    fn load_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swagen.json");
        std::fs::write(&path, r#"{"trait_name": "Client", "types_path": "crate::defs"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.trait_name, "Client");
        assert_eq!(config.types_path.as_deref(), Some("crate::defs"));
    }

    #[test]
    fn load_from_dir_candidates() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_from_dir(dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join("swagen.toml"), "trait_name = \"Late\"\n").unwrap();
        std::fs::write(dir.path().join(".swagen.toml"), "trait_name = \"First\"\n").unwrap();
        assert_eq!(Config::load_from_dir(dir.path()).unwrap().trait_name, "First");
    }

    #[test]
    fn load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io(..))));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "stubs = \"yes\"\n").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse(_))));
    }
}
