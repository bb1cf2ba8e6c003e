//! Functionality to handle the port/protocol lookup table.
use std::collections::{HashMap, hash_map};

pub mod file;

pub use file::{LookupTableError, load_lookup_table};

/// A destination port paired with a protocol name.
///
/// The protocol is always stored lowercase so keys built from the lookup file
/// and keys built from flow records compare equal regardless of casing. The
/// port is kept exactly as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortProtocol {
    port: String,
    protocol: String,
}

impl PortProtocol {
    pub fn new(port: impl Into<String>, protocol: &str) -> Self {
        Self {
            port: port.into(),
            protocol: protocol.to_lowercase(),
        }
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }
}

/// Maps a (port, protocol) pair to its tag. Built once and read-only
/// afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupTable {
    entries: HashMap<PortProtocol, String>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous tag for the same key.
    pub fn insert(&mut self, key: PortProtocol, tag: impl Into<String>) -> Option<String> {
        self.entries.insert(key, tag.into())
    }

    pub fn get(&self, key: &PortProtocol) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, PortProtocol, String> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a LookupTable {
    type Item = (&'a PortProtocol, &'a String);
    type IntoIter = hash_map::Iter<'a, PortProtocol, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P, Q, T> FromIterator<(P, Q, T)> for LookupTable
where
    P: Into<String>,
    Q: AsRef<str>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, Q, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (port, protocol, tag) in iter {
            table.insert(PortProtocol::new(port, protocol.as_ref()), tag);
        }
        table
    }
}
