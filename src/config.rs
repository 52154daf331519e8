use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Character that partitions the input into segments.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default)]
    pub breakdown: BreakdownConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            breakdown: BreakdownConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownConfig {
    /// Tokens shorter than this (in characters) are left out of the breakdown.
    #[serde(default = "default_min_len")]
    pub min_len: usize,
}

impl Default for BreakdownConfig {
    fn default() -> Self {
        Self {
            min_len: default_min_len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default = "default_true")]
    pub headers: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            headers: default_true(),
        }
    }
}

impl TokenizerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }

    pub fn from_json(s: &str) -> InternalResult<Self> {
        from_str(s)
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::config(format!(
            "Failed to open config file {}: {}",
            path.display(),
            e
        ))
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader).map_err(|e| {
        Error::config(format!(
            "Failed to parse config file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_delimiter() -> char {
    crate::tokenizer::segment::DEFAULT_DELIMITER
}

fn default_min_len() -> usize {
    crate::tokenizer::breakdown::DEFAULT_MIN_LEN
}

fn default_separator() -> String {
    "~~~~~".to_string()
}

fn default_true() -> bool {
    true
}
