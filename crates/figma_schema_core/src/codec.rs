//! JSON decode/encode entry points for model types.
//!
//! # Responsibility
//! - Turn JSON text, readers and files into typed model values and back.
//! - Report failures as `DecodeError` without adding validation of its own.
//!
//! # Invariants
//! - Decoding never applies documented defaults.
//! - Unknown discriminants and missing required fields surface as
//!   `DecodeError::Json` with serde's message unchanged.

use crate::model::meta::{Comment, Version};
use crate::model::node::Node;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Error returned by every decode/encode helper.
///
/// `Display` names only the failing step; the underlying io or serde error
/// is reachable through `Error::source`.
#[derive(Debug)]
pub enum DecodeError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "failed to read `{}`", path.display()),
            Self::Json(_) => write!(f, "invalid document json"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Decodes any model type from JSON text.
pub fn from_str<T: DeserializeOwned>(input: &str) -> DecodeResult<T> {
    match serde_json::from_str(input) {
        Ok(value) => {
            debug!(
                "event=decode module=codec status=ok source=str bytes={}",
                input.len()
            );
            Ok(value)
        }
        Err(err) => {
            warn!(
                "event=decode module=codec status=error source=str line={} column={} error={}",
                err.line(),
                err.column(),
                err
            );
            Err(err.into())
        }
    }
}

/// Decodes any model type from a reader.
pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> DecodeResult<T> {
    serde_json::from_reader(reader).map_err(|err| {
        warn!(
            "event=decode module=codec status=error source=reader line={} column={} error={}",
            err.line(),
            err.column(),
            err
        );
        DecodeError::from(err)
    })
}

/// Decodes any model type from a JSON file.
pub fn from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> DecodeResult<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        warn!(
            "event=decode module=codec status=error source=file error_code=open_failed path={}",
            path.display()
        );
        DecodeError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let value = from_reader(BufReader::new(file))?;
    debug!(
        "event=decode module=codec status=ok source=file path={}",
        path.display()
    );
    Ok(value)
}

/// Decodes a single node (and its subtree).
pub fn decode_node(input: &str) -> DecodeResult<Node> {
    from_str(input)
}

/// Decodes the `comments` array of a comments listing.
pub fn decode_comments(input: &str) -> DecodeResult<Vec<Comment>> {
    from_str(input)
}

/// Decodes the `versions` array of a version history listing.
pub fn decode_versions(input: &str) -> DecodeResult<Vec<Version>> {
    from_str(input)
}

/// Encodes a model value as compact JSON.
///
/// Fields typed `f64` re-encode integer literals as floats (`8` becomes
/// `8.0`). Values are numerically unchanged.
pub fn to_string<T: Serialize>(value: &T) -> DecodeResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encodes a model value as indented JSON.
pub fn to_string_pretty<T: Serialize>(value: &T) -> DecodeResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
