use std::collections::HashMap;

use crate::error::DbcError;

/// The string block at the end of a DBC file. String columns store an
/// offset into this block; offset 0 is always the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringBlock {
    data: Vec<u8>,
    interned: HashMap<String, u32>,
}

impl Default for StringBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl StringBlock {
    pub fn new() -> Self {
        Self {
            data: vec![0],
            interned: HashMap::new(),
        }
    }

    /// An existing block. A non-empty block has to start with the NUL
    /// byte that offset 0 points at.
    pub fn from_bytes(mut data: Vec<u8>) -> Result<Self, DbcError> {
        match data.first() {
            None => data.push(0),
            Some(0) => {}
            Some(first) => return Err(DbcError::InvalidStringBlock(*first)),
        }

        let mut interned = HashMap::new();
        let mut start = 0;
        for (pos, byte) in data.iter().enumerate() {
            if *byte != 0 {
                continue;
            }
            if pos > start {
                if let (Ok(s), Ok(offset)) =
                    (std::str::from_utf8(&data[start..pos]), u32::try_from(start))
                {
                    interned.entry(s.to_owned()).or_insert(offset);
                }
            }
            start = pos + 1;
        }

        Ok(Self { data, interned })
    }

    /// Read the string starting at `offset`. Offsets past the end of the
    /// block read as empty.
    pub fn get(&self, offset: u32) -> String {
        let start = match usize::try_from(offset) {
            Ok(s) if s < self.data.len() => s,
            _ => return String::new(),
        };
        let end = self.data[start..]
            .iter()
            .position(|b| *b == 0)
            .map_or(self.data.len(), |len| start + len);
        String::from_utf8_lossy(&self.data[start..end]).into_owned()
    }

    /// Store a string, reusing the offset of an identical one.
    pub fn intern(&mut self, value: &str) -> u32 {
        if value.is_empty() {
            return 0;
        }
        if let Some(offset) = self.interned.get(value) {
            return *offset;
        }

        // blocks beyond 4GiB cannot be addressed by the client either
        let offset = u32::try_from(self.data.len()).unwrap_or(u32::MAX);
        self.data.extend_from_slice(value.as_bytes());
        self.data.push(0);
        self.interned.insert(value.to_owned(), offset);
        offset
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.len() <= 1
    }
}
