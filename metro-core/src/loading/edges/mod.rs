//! Edge list input: in-memory triples or CSV files

mod parser;
mod raw_types;

pub use parser::{connections_from_reader, load_connections_csv};
pub use raw_types::RawConnection;
