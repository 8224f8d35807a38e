use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a scene document.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed scene document: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("pose {pose} has no {row} element")]
    MissingRow { pose: String, row: &'static str },
    #[error("pose {pose} row {row} is missing attribute {attribute}")]
    MissingAttribute {
        pose: String,
        row: &'static str,
        attribute: &'static str,
    },
    #[error("pose {pose} row {row} attribute {attribute} is not a number: {value:?}")]
    InvalidNumber {
        pose: String,
        row: &'static str,
        attribute: &'static str,
        value: String,
    },
    #[error("scene document root has no layout name")]
    MissingLayoutName,
}

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("desired pose {pose} has no reached counterpart")]
    Correspondence { pose: String },
    #[error("unknown benchmark layout {layout:?}")]
    Configuration { layout: String },
    #[error("no poses fell into region {region}")]
    NoData { region: usize },
    #[error("invalid scorer config {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize score report")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
