use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::raw_types::RawConnection;
use crate::Error;

/// Reads an edge list from a CSV file with the header `origin,destination,distance`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row cannot be parsed
pub fn load_connections_csv(path: &Path) -> Result<Vec<RawConnection>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    let connections = connections_from_reader(file)?;
    debug!(
        "Read {} connections from {}",
        connections.len(),
        path.display()
    );
    Ok(connections)
}

/// Reads an edge list from any CSV source
///
/// Unlike lenient feed readers, malformed rows are reported instead of skipped.
///
/// # Errors
///
/// Returns `Error::CsvError` for the first row that cannot be deserialized
pub fn connections_from_reader<R: Read>(reader: R) -> Result<Vec<RawConnection>, Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize::<RawConnection>()
        .map(|row| row.map_err(Error::from))
        .collect()
}
