use std::collections::BTreeMap;

use crate::Value;

/// One decoded image file directory
///
/// A mapping from well-known tag names to decoded values, together with the
/// directory's own byte offset, the entry count declared in the file (which
/// can exceed [`Ifd::len`] when entries were dropped during decoding), and
/// the trailing pointer to the next directory in the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Ifd {
    offset: u32,
    declared_entries: u16,
    next_ifd_offset: Option<u32>,
    entries: BTreeMap<String, Value>,
}

impl Ifd {
    pub(crate) fn new(
        offset: u32,
        declared_entries: u16,
        next_ifd_offset: Option<u32>,
        entries: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            offset,
            declared_entries,
            next_ifd_offset,
            entries,
        }
    }

    /// Rebuild a directory from a previously exported record
    ///
    /// Used for sidecar loads, where no byte offset exists; the offset is
    /// reported as 0 and the declared count as the record size.
    pub fn from_record(entries: BTreeMap<String, Value>) -> Self {
        let declared_entries = u16::try_from(entries.len()).unwrap_or(u16::MAX);
        Self {
            offset: 0,
            declared_entries,
            next_ifd_offset: None,
            entries,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Entry count as declared by the u16 at the directory offset
    pub fn declared_entries(&self) -> u16 {
        self.declared_entries
    }

    /// Offset of the next directory in the chain, if the file declares one.
    /// Never followed automatically.
    pub fn next_ifd_offset(&self) -> Option<u32> {
        self.next_ifd_offset
    }

    /// Number of entries that decoded to a named value
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_text()
    }

    pub fn uint(&self, name: &str) -> Option<u32> {
        self.get(name)?.as_uint()
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_float()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Clone the name→value mapping for serialization
    ///
    /// The map is ordered, so serialized records are key-sorted.
    pub fn export_record(&self) -> BTreeMap<String, Value> {
        self.entries.clone()
    }
}
