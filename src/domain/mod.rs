// Domain layer: the xAL records and their field metadata. No I/O here, only std and serde.

pub mod model;
pub mod schema;
