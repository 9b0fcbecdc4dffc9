//! Configuration: file locations, the transform program, and the initial strategy.
//!
//! Defaults are relative to the working directory. A TOML file may override
//! any of them; the binary layers environment variables and flags on top.
//!
//! ```toml
//! input = "data/scientists.xml"
//! saved = "out/SavedScientists.xml"
//! stylesheet = "data/scientists.xsl"
//! html = "out/transformed.html"
//! transform_program = "xsltproc"
//! strategy = "DOM"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::extract::Strategy;
use crate::pipeline::XsltProc;

/// Default file names.
pub mod defaults {
    /// Document loaded at startup.
    pub const INPUT: &str = "scientists.xml";
    /// Where the saved set is written.
    pub const SAVED: &str = "SavedScientists.xml";
    /// Style-sheet handed to the transform.
    pub const STYLESHEET: &str = "scientists.xsl";
    /// Where the transform output is written.
    pub const HTML: &str = "transformed.html";
    /// Config file picked up from the working directory when present.
    pub const CONFIG_FILE: &str = "scholar.toml";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown extraction strategy '{0}'")]
    UnknownStrategy(String),
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub saved_path: PathBuf,
    pub stylesheet_path: PathBuf,
    pub html_path: PathBuf,
    pub transform_program: PathBuf,
    pub default_strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(defaults::INPUT),
            saved_path: PathBuf::from(defaults::SAVED),
            stylesheet_path: PathBuf::from(defaults::STYLESHEET),
            html_path: PathBuf::from(defaults::HTML),
            transform_program: PathBuf::from(XsltProc::DEFAULT_PROGRAM),
            default_strategy: Strategy::default(),
        }
    }
}

/// On-disk form; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub saved: Option<PathBuf>,
    pub stylesheet: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub transform_program: Option<PathBuf>,
    pub strategy: Option<String>,
}

impl ConfigFile {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }
}

impl Config {
    /// Defaults overridden by `file`.
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.merge(file)?;
        Ok(config)
    }

    /// Load from an explicit file, or from `scholar.toml` in the working
    /// directory if it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(ConfigFile::read(path)?),
            None => {
                let implicit = Path::new(defaults::CONFIG_FILE);
                if implicit.is_file() {
                    tracing::debug!(path = %implicit.display(), "using config file");
                    Self::from_file(ConfigFile::read(implicit)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply every key present in `file`.
    pub fn merge(&mut self, file: ConfigFile) -> Result<(), ConfigError> {
        if let Some(p) = file.input {
            self.input_path = p;
        }
        if let Some(p) = file.saved {
            self.saved_path = p;
        }
        if let Some(p) = file.stylesheet {
            self.stylesheet_path = p;
        }
        if let Some(p) = file.html {
            self.html_path = p;
        }
        if let Some(p) = file.transform_program {
            self.transform_program = p;
        }
        if let Some(name) = file.strategy {
            self.default_strategy =
                Strategy::from_name(&name).ok_or(ConfigError::UnknownStrategy(name))?;
        }
        Ok(())
    }

    /// The transform capability this configuration points at.
    pub fn transformer(&self) -> XsltProc {
        XsltProc::new(&self.transform_program)
    }
}
