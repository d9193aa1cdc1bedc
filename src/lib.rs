//! Typed model of the OASIS xAL (eXtensible Address Language) schema.
//!
//! [`Xal`] is the root of an address tree. Records serialize with serde to
//! lower_snake keys and leave unset fields out; [`crate::core::codec`] wraps the JSON
//! and TOML encoders, and [`domain::schema`] tells attribute fields apart from
//! child elements for consumers that need the XML shape back.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ToolConfig;

pub use crate::core::codec::{decode, encode, read_document, write_document, Format};
pub use domain::model::*;
pub use domain::schema::{lookup_record, Cardinality, Field, FieldKind, Record, RecordInfo, RECORDS};
pub use utils::error::{Result, XalError};
