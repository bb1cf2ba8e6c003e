//! Classification of flow log records and the running tallies behind the report.
use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use snafu::{ResultExt, Snafu};

use crate::{
    enrichment_tables::{LookupTable, PortProtocol},
    internal_events::{FlowLineDiscarded, FlowLogProcessed},
    protocol::protocol_name,
};

/// Tag given to records with no lookup table entry.
pub const UNTAGGED: &str = "Untagged";

/// Lines with fewer whitespace separated fields are discarded.
pub const MIN_FIELDS: usize = 11;

const DSTPORT_FIELD: usize = 6;
const PROTOCOL_FIELD: usize = 7;

pub type TagCounts = BTreeMap<String, u64>;

pub type PortProtocolCounts = BTreeMap<PortProtocol, u64>;

#[derive(Debug, Snafu)]
pub enum FlowLogError {
    #[snafu(display("Error reading flow log file: {}: {}", path.display(), source))]
    Open { path: PathBuf, source: io::Error },
    #[snafu(display("Error reading flow log file: {}", source))]
    Read { source: io::Error },
}

/// The two fields of a flow log line used for classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowRecord<'a> {
    dstport: &'a str,
    protocol: &'a str,
}

impl<'a> FlowRecord<'a> {
    /// Extracts the destination port (field 6) and protocol number (field 7).
    /// Returns `None` for lines with fewer than eleven fields.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let dstport = fields.nth(DSTPORT_FIELD)?;
        let protocol = fields.next()?;

        // The remaining fields are unused, but the last required one must exist.
        fields.nth(MIN_FIELDS - PROTOCOL_FIELD - 2)?;

        Some(Self { dstport, protocol })
    }

    pub fn dstport(&self) -> &'a str {
        self.dstport
    }

    pub fn protocol_number(&self) -> &'a str {
        self.protocol
    }

    /// The classification key: the raw port and the resolved, lowercased
    /// protocol name.
    pub fn key(&self) -> PortProtocol {
        PortProtocol::new(self.dstport, protocol_name(self.protocol))
    }
}

/// Per-tag and per-(port, protocol) counts for every accepted record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowCounts {
    pub tags: TagCounts,
    pub pairs: PortProtocolCounts,
}

impl FlowCounts {
    /// Number of records counted.
    pub fn total(&self) -> u64 {
        self.tags.values().sum()
    }
}

pub struct Aggregator<'a> {
    table: &'a LookupTable,
    counts: FlowCounts,
    discarded: u64,
}

impl<'a> Aggregator<'a> {
    pub fn new(table: &'a LookupTable) -> Self {
        Self {
            table,
            counts: FlowCounts::default(),
            discarded: 0,
        }
    }

    pub fn classify(&self, key: &PortProtocol) -> &'a str {
        self.table.get(key).unwrap_or(UNTAGGED)
    }

    /// Counts one record against both tallies.
    pub fn observe(&mut self, record: &FlowRecord<'_>) {
        let key = record.key();
        let tag = self.classify(&key);

        *self.counts.tags.entry(tag.to_owned()).or_insert(0) += 1;
        *self.counts.pairs.entry(key).or_insert(0) += 1;
    }

    /// Consumes every line of `reader`. Short lines are dropped; only I/O
    /// and decoding failures are errors.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<(), FlowLogError> {
        for (index, line) in reader.lines().enumerate() {
            let line = line.context(ReadSnafu)?;
            match FlowRecord::parse(&line) {
                Some(record) => self.observe(&record),
                None => {
                    self.discarded += 1;
                    emit!(FlowLineDiscarded {
                        line: index as u64 + 1,
                        tokens: line.split_whitespace().count(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn accepted(&self) -> u64 {
        self.counts.total()
    }

    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    pub fn finish(self) -> FlowCounts {
        self.counts
    }
}

/// Classifies every record in the flow log at `path`.
pub fn aggregate(path: &Path, table: &LookupTable) -> Result<FlowCounts, FlowLogError> {
    let file = File::open(path).context(OpenSnafu { path })?;

    let mut aggregator = Aggregator::new(table);
    aggregator.read_from(BufReader::new(file))?;

    emit!(FlowLogProcessed {
        path,
        accepted: aggregator.accepted(),
        discarded: aggregator.discarded(),
    });

    Ok(aggregator.finish())
}
