pub mod codec;

pub use crate::domain::model::Xal;
pub use crate::utils::error::Result;
pub use codec::{decode, encode, read_document, write_document, write_document_as, Format};
