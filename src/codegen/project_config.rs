//! Project configuration schema for featgen.yaml
//!
//! The file is optional and lives at the project root:
//!
//! ```yaml
//! features_root: src/features
//! default_fields: [id, name, status, createdAt, updatedAt]
//! ```

use crate::codegen::fields::{build_plan, DEFAULT_FIELDS};
use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Name of the configuration file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "featgen.yaml";

/// Top-level project configuration from featgen.yaml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory holding feature modules, relative to the project root
    #[serde(default = "default_features_root")]
    pub features_root: PathBuf,

    /// Fields used when none are given on the command line
    #[serde(default = "default_fields")]
    pub default_fields: Vec<String>,
}

fn default_features_root() -> PathBuf {
    PathBuf::from("src/features")
}

fn default_fields() -> Vec<String> {
    DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            features_root: default_features_root(),
            default_fields: default_fields(),
        }
    }
}

impl ProjectConfig {
    /// Load project configuration from a featgen.yaml file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: format!("failed to read: {}", e),
        })?;

        Self::from_yaml(&contents, path)
    }

    /// Load `featgen.yaml` from a project root, falling back to defaults
    /// when the file does not exist
    pub fn load_from_root<P: AsRef<Path>>(project_root: P) -> Result<Self> {
        let path = project_root.as_ref().join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(
                "No {} in {}, using defaults",
                CONFIG_FILE_NAME,
                project_root.as_ref().display()
            );
            return Ok(Self::default());
        }

        tracing::debug!("Loading configuration from {}", path.display());
        Self::from_file(&path)
    }

    fn from_yaml(contents: &str, path: &Path) -> Result<Self> {
        // an empty file is a valid, all-defaults config
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ProjectConfig =
            serde_yaml::from_str(contents).map_err(|e| ScaffoldError::Config {
                path: path.to_path_buf(),
                message: format!("failed to parse: {}", e),
            })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Check the values the generator relies on
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.features_root.is_absolute() {
            return Err(ScaffoldError::Config {
                path: path.to_path_buf(),
                message: "features_root must be relative to the project root".to_string(),
            });
        }

        if self
            .features_root
            .components()
            .any(|c| c == Component::ParentDir)
        {
            return Err(ScaffoldError::Config {
                path: path.to_path_buf(),
                message: "features_root must stay inside the project root".to_string(),
            });
        }

        if self.default_fields.is_empty() {
            return Err(ScaffoldError::Config {
                path: path.to_path_buf(),
                message: "default_fields must not be empty".to_string(),
            });
        }

        build_plan(&self.default_fields, &DEFAULT_FIELDS).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: format!("default_fields: {}", e),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = ProjectConfig::load_from_root(temp_dir.path()).unwrap();

        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.features_root, PathBuf::from("src/features"));
        assert_eq!(config.default_fields, vec!["id", "name", "status", "createdAt", "updatedAt"]);
    }

    #[test]
    fn test_parse_sample_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"
features_root: app/modules
default_fields:
  - id
  - title
  - createdAt
"#,
        )
        .unwrap();

        let config = ProjectConfig::load_from_root(temp_dir.path()).unwrap();
        assert_eq!(config.features_root, PathBuf::from("app/modules"));
        assert_eq!(config.default_fields, vec!["id", "title", "createdAt"]);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let path = Path::new("featgen.yaml");
        let config = ProjectConfig::from_yaml("features_root: web/features\n", path).unwrap();
        assert_eq!(config.features_root, PathBuf::from("web/features"));
        assert_eq!(config.default_fields.len(), 5);

        let empty = ProjectConfig::from_yaml("", path).unwrap();
        assert_eq!(empty, ProjectConfig::default());
    }

    #[test]
    fn test_invalid_configs() {
        let path = Path::new("featgen.yaml");

        let unknown = ProjectConfig::from_yaml("feature_root: src\n", path);
        assert!(matches!(unknown, Err(ScaffoldError::Config { .. })));

        let absolute = ProjectConfig::from_yaml("features_root: /etc\n", path);
        assert!(matches!(absolute, Err(ScaffoldError::Config { .. })));

        let duplicate = ProjectConfig::from_yaml("default_fields: [id, id]\n", path);
        assert!(matches!(duplicate, Err(ScaffoldError::Config { .. })));

        let empty_fields = ProjectConfig::from_yaml("default_fields: []\n", path);
        assert!(matches!(empty_fields, Err(ScaffoldError::Config { .. })));
    }

    #[test]
    fn test_features_root_cannot_escape_project() {
        let path = Path::new("featgen.yaml");

        for root in ["../elsewhere", "src/../../outside", ".."] {
            let yaml = format!("features_root: {}\n", root);
            assert!(
                matches!(ProjectConfig::from_yaml(&yaml, path), Err(ScaffoldError::Config { .. })),
                "{} was accepted",
                root
            );
        }

        let nested = ProjectConfig::from_yaml("features_root: ./web/features\n", path).unwrap();
        assert_eq!(nested.features_root, PathBuf::from("./web/features"));
    }
}
