use crate::domain::model::Xal;
use crate::utils::error::{Result, XalError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Text formats an address tree can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Json, Format::Toml];

    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }

    /// Picks the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| XalError::UnsupportedFormat {
                value: path.display().to_string(),
            })?;
        extension.parse()
    }
}

impl FromStr for Format {
    type Err = XalError;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| XalError::UnsupportedFormat {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub fn encode<T: Serialize>(value: &T, format: Format, pretty: bool) -> Result<String> {
    let output = match (format, pretty) {
        (Format::Json, true) => serde_json::to_string_pretty(value)?,
        (Format::Json, false) => serde_json::to_string(value)?,
        (Format::Toml, true) => toml::to_string_pretty(value)?,
        (Format::Toml, false) => toml::to_string(value)?,
    };
    tracing::debug!("Encoded {} bytes of {}", output.len(), format);
    Ok(output)
}

pub fn decode<T: DeserializeOwned>(input: &str, format: Format) -> Result<T> {
    tracing::debug!("Decoding {} bytes of {}", input.len(), format);
    let value = match format {
        Format::Json => serde_json::from_str(input)?,
        Format::Toml => toml::from_str(input)?,
    };
    Ok(value)
}

/// Reads an xAL document, choosing the format from the file extension.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Xal> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let xal: Xal = decode(&content, format)?;
    tracing::info!(
        "Loaded {} address(es) from {}",
        xal.address_details.len(),
        path.display()
    );
    Ok(xal)
}

/// Writes an xAL document, choosing the format from the file extension.
/// Missing parent directories are created.
pub fn write_document<P: AsRef<Path>>(path: P, xal: &Xal, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    write_document_as(path, xal, Format::from_path(path)?, pretty)
}

pub fn write_document_as<P: AsRef<Path>>(path: P, xal: &Xal, format: Format, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let output = encode(xal, format, pretty)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, output)?;
    tracing::info!(
        "Wrote {} address(es) to {} as {}",
        xal.address_details.len(),
        path.display(),
        format
    );
    Ok(())
}
