//! Tag reader seam.
//!
//! The reader hardware lives outside this crate. A reader hands over the raw
//! records it found on one tag; [`crate::codec::decode_tag`] decides whether
//! they identify a member.

use crate::error::Result;

/// Raw records read from a single tag, in tag order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRead {
    pub records: Vec<Vec<u8>>,
}

impl TagRead {
    pub fn single(record: impl Into<Vec<u8>>) -> Self {
        Self {
            records: vec![record.into()],
        }
    }
}

/// Something that can wait for a tag to be presented.
pub trait TagReader {
    /// Returns `Ok(None)` when the search ended without a tag.
    fn await_scan(&mut self) -> Result<Option<TagRead>>;
}
