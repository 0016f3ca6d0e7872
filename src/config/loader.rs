//! Configuration loading functionality.
//!
//! This module provides the [`RuleLoader`] type for loading statutory rule
//! parameters from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RuleBook, RuleSections, StatuteMetadata};

/// Loads and provides access to the statutory rule configuration.
///
/// The `RuleLoader` reads YAML configuration files from a directory and
/// exposes the resulting [`RuleBook`] to the calculation pipeline.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/clt/
/// ├── statute.yaml  # Statute metadata
/// └── rules.yaml    # Statutory parameters by concern
/// ```
///
/// # Example
///
/// ```no_run
/// use settlement_engine::config::RuleLoader;
///
/// let loader = RuleLoader::load("./config/clt").unwrap();
/// println!("Statute: {}", loader.statute().name);
/// println!("Notice cap: {} days", loader.rule_book().notice().cap_days);
/// ```
#[derive(Debug, Clone)]
pub struct RuleLoader {
    rule_book: RuleBook,
}

impl RuleLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/clt")
    ///
    /// # Returns
    ///
    /// Returns a `RuleLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use settlement_engine::config::RuleLoader;
    ///
    /// let loader = RuleLoader::load("./config/clt")?;
    /// # Ok::<(), settlement_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load statute.yaml
        let statute_path = path.join("statute.yaml");
        let metadata = Self::load_yaml::<StatuteMetadata>(&statute_path)?;

        // Load rules.yaml
        let rules_path = path.join("rules.yaml");
        let rules = Self::load_yaml::<RuleSections>(&rules_path)?;

        Ok(Self {
            rule_book: RuleBook::new(metadata, rules),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rule book.
    pub fn rule_book(&self) -> &RuleBook {
        &self.rule_book
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.rule_book.statute()
    }
}
