pub mod error;
pub mod types;

pub use types::{ExtraCatalog, MediaKind, MetaDetail, MetaItem};
