// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validator configuration from a TOML file and command-line overrides.

use crate::cli::Cli;
use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No reference file given: pass --reference or set `reference` in the config file")]
    MissingReference,
}

/// Contents of a TOML configuration file.
///
/// Relative `root` and `submission` paths are resolved against the config
/// file's directory. `reference` is resolved against the root.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Project root the reference path is relative to
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Reference/test file
    #[serde(default)]
    pub reference: Option<PathBuf>,

    /// Submission file
    #[serde(default)]
    pub submission: Option<PathBuf>,
}

impl FileConfig {
    /// Load a config file, resolving its relative paths.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or(Path::new("."));
        Ok(config.relative_to(base))
    }

    /// Parse TOML content without resolving paths
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn relative_to(self, base: &Path) -> Self {
        Self {
            root: self.root.map(|p| base.join(p)),
            reference: self.reference,
            submission: self.submission.map(|p| base.join(p)),
        }
    }
}

/// Fully resolved validator inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub reference: PathBuf,
    pub submission: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from the command line, loading `--config` if given.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let file = cli.config.as_deref().map(FileConfig::load).transpose()?;
        Self::merge(cli, file.unwrap_or_default())
    }

    /// Combine command-line values with a config file. The command line wins.
    pub fn merge(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let reference = cli
            .reference
            .clone()
            .or(file.reference)
            .ok_or(ConfigError::MissingReference)?;

        Ok(Self {
            root: cli
                .root
                .clone()
                .or(file.root)
                .unwrap_or_else(|| PathBuf::from(".")),
            reference,
            submission: cli.submission.clone().or(file.submission),
        })
    }

    pub fn validator(&self) -> Validator {
        Validator::with_root(&self.root, &self.reference, self.submission.clone())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
