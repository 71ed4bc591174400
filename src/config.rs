//! Vocabulary file schema, discovery and loading.
//!
//! A vocabulary file replaces the built-in power and urgency lists:
//!
//! ```yaml
//! version: "1"
//! power: [free, secret, proven]
//! urgency: [now, today]
//! ```
//!
//! A missing list keeps the built-in one.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::vocabulary::{Vocabulary, VocabularyError};

/// File names searched for in the working directory.
pub const DEFAULT_VOCABULARY_NAMES: &[&str] = &["headliner.yaml", ".headliner.yaml"];

/// File name searched for in the user config directory.
pub const USER_VOCABULARY_NAME: &str = "vocabulary.yaml";

/// Errors loading a vocabulary file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid vocabulary in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: VocabularyError,
    },
}

/// On-disk vocabulary definition.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct VocabularyFile {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub power: Option<Vec<String>>,
    #[serde(default)]
    pub urgency: Option<Vec<String>>,
}

impl VocabularyFile {
    /// Parse a vocabulary file from YAML text.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Read and parse a vocabulary file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the vocabulary, falling back to built-in lists for missing keys.
    pub fn to_vocabulary(&self) -> Result<Vocabulary, VocabularyError> {
        let builtin = Vocabulary::builtin();
        let power: Vec<String> = match &self.power {
            Some(words) => words.clone(),
            None => builtin.power().iter().cloned().collect(),
        };
        let urgency: Vec<String> = match &self.urgency {
            Some(words) => words.clone(),
            None => builtin.urgency().iter().cloned().collect(),
        };
        Vocabulary::new(power, urgency)
    }
}

/// Where the active vocabulary came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    BuiltIn,
    File(PathBuf),
}

impl std::fmt::Display for VocabularySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabularySource::BuiltIn => write!(f, "built-in"),
            VocabularySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Platform config file location, e.g. `~/.config/headliner/vocabulary.yaml`.
pub fn user_vocabulary_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "headliner")
        .map(|d| d.config_dir().join(USER_VOCABULARY_NAME))
}

/// Find a vocabulary file in `dir`, then in the user config directory.
pub fn discover_in(dir: &Path) -> Option<PathBuf> {
    for name in DEFAULT_VOCABULARY_NAMES {
        let path = dir.join(name);
        if path.is_file() {
            return Some(path);
        }
    }
    user_vocabulary_path().filter(|p| p.is_file())
}

/// Resolve the vocabulary to use.
///
/// An explicit path must load. Otherwise the first discovered file is used,
/// and with none found the built-in lists apply.
pub fn load_vocabulary(
    explicit: Option<&Path>,
) -> Result<(Vocabulary, VocabularySource), ConfigError> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            discover_in(&cwd)
        }
    };

    let Some(path) = path else {
        debug!("no vocabulary file found, using built-in lists");
        return Ok((Vocabulary::builtin(), VocabularySource::BuiltIn));
    };

    let vocabulary = load_file(&path)?;
    debug!(path = %path.display(), "loaded vocabulary file");
    Ok((vocabulary, VocabularySource::File(path)))
}

/// Load and validate one vocabulary file.
pub fn load_file(path: &Path) -> Result<Vocabulary, ConfigError> {
    let file = VocabularyFile::parse_file(path)?;
    file.to_vocabulary().map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}
