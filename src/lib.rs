//! Classifies network flow log records by destination port and protocol
//! using a CSV lookup table, and reports counts per tag and per
//! (port, protocol) pair.

#[macro_use]
pub mod internal_events;

pub mod aggregate;
pub mod app;
pub mod cli;
pub mod enrichment_tables;
pub mod protocol;
pub mod report;
#[cfg(test)]
pub mod test_util;
pub mod trace;

pub use aggregate::{FlowCounts, aggregate};
pub use enrichment_tables::{LookupTable, PortProtocol, load_lookup_table};
pub use report::write_report;
