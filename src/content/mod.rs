//! Content module - records from the content API and their loading

pub mod loader;
mod record;

pub use record::{
    normalize_date, parse_date, ContentRecord, ImageNode, NamedNode, Node, Nodes, RecordKind,
};
