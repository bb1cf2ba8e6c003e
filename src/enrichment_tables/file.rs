use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use snafu::{ResultExt, Snafu};

use super::{LookupTable, PortProtocol};
use crate::internal_events::{LookupRowSkipped, LookupTableLoaded};

#[derive(Debug, Snafu)]
pub enum LookupTableError {
    #[snafu(display("Error reading lookup file: {}: {}", path.display(), source))]
    Open { path: PathBuf, source: io::Error },
    #[snafu(display("Error reading lookup file: {}", source))]
    Read { source: csv::Error },
    #[snafu(display("Error reading lookup file: missing header row"))]
    MissingHeader,
}

/// Loads the lookup table from a CSV file with a `dstport,protocol,tag` header.
pub fn load_lookup_table(path: &Path) -> Result<LookupTable, LookupTableError> {
    let file = File::open(path).context(OpenSnafu { path })?;
    let table = LookupTable::from_reader(file)?;

    emit!(LookupTableLoaded {
        path,
        entries: table.len(),
    });

    Ok(table)
}

impl LookupTable {
    /// Reads lookup rows from CSV data.
    ///
    /// The first row is a header and is never inspected. Rows without
    /// exactly three fields are skipped. Fields are trimmed and the protocol
    /// lowercased; a later row for the same key replaces an earlier one.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LookupTableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        if reader.byte_headers().context(ReadSnafu)?.is_empty() {
            return Err(LookupTableError::MissingHeader);
        }

        let mut table = LookupTable::new();
        for row in reader.records() {
            let row = row.context(ReadSnafu)?;
            if row.len() != 3 {
                emit!(LookupRowSkipped {
                    line: row.position().map_or(0, |position| position.line()),
                    fields: row.len(),
                });
                continue;
            }

            let key = PortProtocol::new(row[0].trim(), row[1].trim());
            table.insert(key, row[2].trim());
        }

        Ok(table)
    }
}
