use bincode::{DefaultOptions, Options};
use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

use crate::error::DbcError;

pub const DBC_MAGIC: [u8; 4] = *b"WDBC";
pub const HEADER_SIZE: usize = 20;

/// The fixed header at the start of every DBC file.
#[repr(C)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbcHeader {
    pub magic: [u8; 4],
    pub record_count: u32,
    pub field_count: u32,
    pub record_size: u32,
    pub string_block_size: u32,
}

assert_eq_size!(DbcHeader, [u8; HEADER_SIZE]);

/// Headers are little endian with fixed-width integers.
pub fn dbc_bincode() -> impl Options {
    DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
}

impl DbcHeader {
    pub fn decode(data: &[u8]) -> Result<Self, DbcError> {
        let raw = data.get(..HEADER_SIZE).ok_or(DbcError::Truncated {
            expected: HEADER_SIZE,
            found: data.len(),
        })?;
        let header: DbcHeader = dbc_bincode().deserialize(raw)?;
        if header.magic != DBC_MAGIC {
            return Err(DbcError::InvalidMagic(header.magic));
        }
        Ok(header)
    }

    pub fn encode(&self) -> Result<Vec<u8>, DbcError> {
        Ok(dbc_bincode().serialize(self)?)
    }

    /// Total length of a file with this header.
    pub fn file_size(&self) -> Option<usize> {
        let records = usize::try_from(self.record_count)
            .ok()?
            .checked_mul(usize::try_from(self.record_size).ok()?)?;
        HEADER_SIZE
            .checked_add(records)?
            .checked_add(usize::try_from(self.string_block_size).ok()?)
    }
}

#[cfg(test)]
mod test {
    use super::{DbcHeader, DBC_MAGIC};
    use crate::error::DbcError;

    #[test]
    pub fn header_format() {
        let data = [
            0x57, 0x44, 0x42, 0x43, 0x02, 0x00, 0x00, 0x00, 0x21, 0x00, 0x00, 0x00, 0x84, 0x00,
            0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
        ];
        let header = DbcHeader {
            magic: DBC_MAGIC,
            record_count: 2,
            field_count: 33,
            record_size: 132,
            string_block_size: 1,
        };

        assert_eq!(header.encode().unwrap(), data);
        assert_eq!(DbcHeader::decode(&data).unwrap(), header);
        assert_eq!(header.file_size(), Some(20 + 264 + 1));
    }

    #[test]
    pub fn rejects_bad_magic() {
        let mut data = [0u8; 20];
        data[..4].copy_from_slice(b"WDB2");
        assert!(matches!(
            DbcHeader::decode(&data),
            Err(DbcError::InvalidMagic(m)) if &m == b"WDB2"
        ));
    }

    #[test]
    pub fn rejects_short_header() {
        assert!(matches!(
            DbcHeader::decode(b"WDBC"),
            Err(DbcError::Truncated {
                expected: 20,
                found: 4
            })
        ));
    }
}
