//! Project layout: where each logical root lives on disk
//!
//! The generator never hard-codes directories. It asks a [`ProjectLayout`]
//! for the absolute location of a logical root and for the file extensions
//! to use. [`ConventionalLayout`] is the stock implementation, configured by
//! [`LayoutConfig`].
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDGEN_` prefix)
//! 2. `<project>/crudgen.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # crudgen.toml
//! app_dir = "app"
//! resources_dir = "resources"
//! database_dir = "database"
//! routes_dir = "routes"
//! extension = "php"
//! view_extension = "blade.php"
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the per-project layout file
pub const CONFIG_FILE: &str = "crudgen.toml";

/// Logical directories of a host project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalRoot {
    /// Application code (controllers, models)
    App,
    /// Resources (views)
    Resources,
    /// Database (migrations)
    Database,
    /// Route definition files
    Routes,
}

/// Path-resolution service for a host project
pub trait ProjectLayout {
    /// Absolute directory for a logical root
    fn root(&self, root: LogicalRoot) -> PathBuf;

    /// Extension for source files, without the leading dot
    fn extension(&self) -> &str;

    /// Extension for view files, without the leading dot
    fn view_extension(&self) -> &str;
}

/// Directory and extension settings for [`ConventionalLayout`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Application directory, relative to the project root
    pub app_dir: PathBuf,
    /// Resources directory, relative to the project root
    pub resources_dir: PathBuf,
    /// Database directory, relative to the project root
    pub database_dir: PathBuf,
    /// Routes directory, relative to the project root
    pub routes_dir: PathBuf,
    /// Source file extension
    pub extension: String,
    /// View file extension
    pub view_extension: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            app_dir: PathBuf::from("app"),
            resources_dir: PathBuf::from("resources"),
            database_dir: PathBuf::from("database"),
            routes_dir: PathBuf::from("routes"),
            extension: "php".to_string(),
            view_extension: "blade.php".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Load layout settings for a project
    ///
    /// A missing `crudgen.toml` is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if `crudgen.toml` contains invalid TOML or values of the
    /// wrong type.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_file = project_root.join(CONFIG_FILE);
        tracing::debug!(path = %config_file.display(), exists = config_file.exists(), "loading layout config");

        let config = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("CRUDGEN_").lowercase(true))
            .extract()
            .map_err(Box::new)?;

        Ok(config)
    }
}

/// Layout rooted at a project directory with configurable sub-directories
#[derive(Debug, Clone)]
pub struct ConventionalLayout {
    project_root: PathBuf,
    config: LayoutConfig,
}

impl ConventionalLayout {
    /// Create a layout with explicit settings
    #[must_use]
    pub const fn new(project_root: PathBuf, config: LayoutConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Create a layout with settings loaded from the project
    ///
    /// # Errors
    ///
    /// Returns an error if the layout configuration cannot be loaded.
    pub fn load(project_root: PathBuf) -> Result<Self> {
        let config = LayoutConfig::load(&project_root)?;
        Ok(Self::new(project_root, config))
    }
}

impl ProjectLayout for ConventionalLayout {
    fn root(&self, root: LogicalRoot) -> PathBuf {
        let relative = match root {
            LogicalRoot::App => &self.config.app_dir,
            LogicalRoot::Resources => &self.config.resources_dir,
            LogicalRoot::Database => &self.config.database_dir,
            LogicalRoot::Routes => &self.config.routes_dir,
        };
        self.project_root.join(relative)
    }

    fn extension(&self) -> &str {
        &self.config.extension
    }

    fn view_extension(&self) -> &str {
        &self.config.view_extension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_layout() {
        let layout = ConventionalLayout::new(PathBuf::from("/srv/app"), LayoutConfig::default());
        assert_eq!(layout.root(LogicalRoot::App), PathBuf::from("/srv/app/app"));
        assert_eq!(layout.root(LogicalRoot::Resources), PathBuf::from("/srv/app/resources"));
        assert_eq!(layout.root(LogicalRoot::Database), PathBuf::from("/srv/app/database"));
        assert_eq!(layout.root(LogicalRoot::Routes), PathBuf::from("/srv/app/routes"));
        assert_eq!(layout.extension(), "php");
        assert_eq!(layout.view_extension(), "blade.php");
    }

    #[test]
    fn test_load_without_config_file() {
        let temp_dir = tempdir().unwrap();
        let config = LayoutConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.app_dir, PathBuf::from("app"));
        assert_eq!(config.view_extension, "blade.php");
    }

    #[test]
    fn test_load_overrides_from_config_file() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "app_dir = \"src\"\nview_extension = \"html\"\n",
        )
        .unwrap();

        let config = LayoutConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.app_dir, PathBuf::from("src"));
        assert_eq!(config.view_extension, "html");
        // untouched keys keep their defaults
        assert_eq!(config.database_dir, PathBuf::from("database"));
        assert_eq!(config.extension, "php");
    }

    #[test]
    fn test_load_invalid_config_file() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "app_dir = [1, 2").unwrap();

        assert!(LayoutConfig::load(temp_dir.path()).is_err());
    }
}
