//! field
//!
//! Column descriptors. A descriptor is a byte offset into a record plus
//! the knowledge of how to decode what is stored there. Descriptors are
//! plain `Copy` values so tables can expose them as constants.

use std::marker::PhantomData;

use azerust_cell::{locale::LOCALE_SLOTS, Locale};
use bytes::{Buf, BufMut};

use crate::strings::StringBlock;

/// A readable column.
pub trait Field: Copy {
    type Value;

    fn offset(self) -> usize;

    /// Width of the column in bytes.
    fn size(self) -> usize;

    fn read(self, record: &[u8], strings: &StringBlock) -> Self::Value;
}

/// A writable column. The primary key is deliberately not one.
pub trait FieldMut: Field {
    fn write(self, record: &mut [u8], strings: &mut StringBlock, value: Self::Value);
}

/// A single-value column that can be repeated in an [`Array`].
pub trait Scalar: FieldMut {
    const SIZE: usize;

    fn at(offset: usize) -> Self;
}

macro_rules! scalar_field {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $size:expr, $get:ident, $put:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(usize);

        impl $name {
            pub const fn at(offset: usize) -> Self {
                Self(offset)
            }
        }

        impl Field for $name {
            type Value = $ty;

            fn offset(self) -> usize {
                self.0
            }

            fn size(self) -> usize {
                $size
            }

            fn read(self, record: &[u8], _strings: &StringBlock) -> $ty {
                let mut buf = &record[self.0..self.0 + $size];
                buf.$get()
            }
        }

        impl FieldMut for $name {
            fn write(self, record: &mut [u8], _strings: &mut StringBlock, value: $ty) {
                let mut buf = &mut record[self.0..self.0 + $size];
                buf.$put(value);
            }
        }

        impl Scalar for $name {
            const SIZE: usize = $size;

            fn at(offset: usize) -> Self {
                Self(offset)
            }
        }
    };
}

scalar_field!(
    /// A signed 32 bit column.
    Int, i32, 4, get_i32_le, put_i32_le
);
scalar_field!(
    /// An unsigned 32 bit column, usually a mask or a foreign key.
    UInt, u32, 4, get_u32_le, put_u32_le
);
scalar_field!(Float, f32, 4, get_f32_le, put_f32_le);
scalar_field!(
    /// A single byte. Byte columns are packed, so the columns after them
    /// are not 4-byte aligned.
    Byte, u8, 1, get_u8, put_u8
);

/// The primary key. Read-only: a row only gets a new key by cloning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(usize);

impl Key {
    pub const fn at(offset: usize) -> Self {
        Self(offset)
    }
}

impl Field for Key {
    type Value = u32;

    fn offset(self) -> usize {
        self.0
    }

    fn size(self) -> usize {
        4
    }

    fn read(self, record: &[u8], strings: &StringBlock) -> u32 {
        UInt(self.0).read(record, strings)
    }
}

impl Key {
    pub(crate) fn write(self, record: &mut [u8], id: u32) {
        let mut buf = &mut record[self.0..self.0 + 4];
        buf.put_u32_le(id);
    }
}

/// A string column, stored as an offset into the string block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Str(usize);

impl Str {
    pub const fn at(offset: usize) -> Self {
        Self(offset)
    }
}

impl Field for Str {
    type Value = String;

    fn offset(self) -> usize {
        self.0
    }

    fn size(self) -> usize {
        4
    }

    fn read(self, record: &[u8], strings: &StringBlock) -> String {
        strings.get(UInt(self.0).read(record, strings))
    }
}

impl FieldMut for Str {
    fn write(self, record: &mut [u8], strings: &mut StringBlock, value: String) {
        let offset = strings.intern(&value);
        UInt(self.0).write(record, strings, offset);
    }
}

impl Scalar for Str {
    const SIZE: usize = 4;

    fn at(offset: usize) -> Self {
        Self(offset)
    }
}

/// A localized string: one string per client locale followed by a mask
/// of the locales that are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocString {
    pub values: [String; LOCALE_SLOTS],
    pub mask: u32,
}

impl LocString {
    /// A string that only has its enUS text set.
    pub fn new(en_us: impl Into<String>) -> Self {
        let mut loc = Self::default();
        loc.set(Locale::enUS, en_us);
        loc
    }

    pub fn get(&self, locale: Locale) -> &str {
        &self.values[locale.slot()]
    }

    pub fn set(&mut self, locale: Locale, value: impl Into<String>) -> &mut Self {
        self.values[locale.slot()] = value.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Loc(usize);

impl Loc {
    pub const fn at(offset: usize) -> Self {
        Self(offset)
    }

    /// The string of a single locale.
    pub const fn locale(self, locale: Locale) -> Str {
        Str(self.0 + 4 * (locale as usize))
    }

    pub const fn mask(self) -> UInt {
        UInt(self.0 + 4 * LOCALE_SLOTS)
    }
}

impl Field for Loc {
    type Value = LocString;

    fn offset(self) -> usize {
        self.0
    }

    fn size(self) -> usize {
        4 * LOCALE_SLOTS + 4
    }

    fn read(self, record: &[u8], strings: &StringBlock) -> LocString {
        LocString {
            values: std::array::from_fn(|i| Str(self.0 + 4 * i).read(record, strings)),
            mask: self.mask().read(record, strings),
        }
    }
}

impl FieldMut for Loc {
    fn write(self, record: &mut [u8], strings: &mut StringBlock, value: LocString) {
        for (i, s) in value.values.into_iter().enumerate() {
            Str(self.0 + 4 * i).write(record, strings, s);
        }
        self.mask().write(record, strings, value.mask);
    }
}

/// `N` consecutive columns of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Array<F, const N: usize> {
    offset: usize,
    _field: PhantomData<F>,
}

pub type IntArray<const N: usize> = Array<Int, N>;
pub type UIntArray<const N: usize> = Array<UInt, N>;
pub type FloatArray<const N: usize> = Array<Float, N>;
pub type ByteArray<const N: usize> = Array<Byte, N>;

impl<F: Scalar, const N: usize> Array<F, N> {
    pub const fn at_offset(offset: usize) -> Self {
        Self {
            offset,
            _field: PhantomData,
        }
    }

    /// The element at `index`.
    ///
    /// # Panics
    ///
    /// When `index` is not smaller than `N`, like slice indexing.
    pub fn at(self, index: usize) -> F {
        assert!(index < N, "index {} out of range for array of {}", index, N);
        F::at(self.offset + index * F::SIZE)
    }

    pub const fn len(self) -> usize {
        N
    }

    pub const fn is_empty(self) -> bool {
        N == 0
    }
}

impl<F: Scalar, const N: usize> Field for Array<F, N> {
    type Value = [F::Value; N];

    fn offset(self) -> usize {
        self.offset
    }

    fn size(self) -> usize {
        F::SIZE * N
    }

    fn read(self, record: &[u8], strings: &StringBlock) -> Self::Value {
        std::array::from_fn(|i| self.at(i).read(record, strings))
    }
}

impl<F: Scalar, const N: usize> FieldMut for Array<F, N> {
    fn write(self, record: &mut [u8], strings: &mut StringBlock, value: Self::Value) {
        for (i, v) in value.into_iter().enumerate() {
            self.at(i).write(record, strings, v);
        }
    }
}

#[cfg(test)]
mod test {
    use azerust_cell::Locale;

    use super::{ByteArray, Field, FieldMut, Float, Int, IntArray, Key, Loc, LocString, Str};
    use crate::strings::StringBlock;

    #[test]
    pub fn scalars_are_little_endian() {
        let mut record = [0u8; 12];
        let mut strings = StringBlock::new();
        Int::at(0).write(&mut record, &mut strings, -2);
        Float::at(4).write(&mut record, &mut strings, 1.5);

        assert_eq!(record[..4], [0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(Int::at(0).read(&record, &strings), -2);
        assert_eq!(Float::at(4).read(&record, &strings), 1.5);
        assert_eq!(Key::at(0).read(&record, &strings), u32::MAX - 1);
    }

    #[test]
    pub fn unaligned_byte_and_int_columns() {
        let mut record = [0u8; 14];
        let mut strings = StringBlock::new();
        let bytes: ByteArray<5> = ByteArray::at_offset(0);
        let ints: IntArray<2> = IntArray::at_offset(5);

        bytes.write(&mut record, &mut strings, [1, 2, 3, 4, 5]);
        ints.write(&mut record, &mut strings, [0x0102_0304, 7]);

        assert_eq!(record[5..9], [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(bytes.at(4).read(&record, &strings), 5);
        assert_eq!(ints.read(&record, &strings), [0x0102_0304, 7]);
        assert_eq!(ints.at(1).offset(), 9);
    }

    #[test]
    #[should_panic]
    pub fn array_index_out_of_range() {
        let ints: IntArray<8> = IntArray::at_offset(4);
        ints.at(8);
    }

    #[test]
    pub fn strings_go_through_the_block() {
        let mut record = [0u8; 4];
        let mut strings = StringBlock::new();
        Str::at(0).write(&mut record, &mut strings, "Pick Lock".to_string());
        assert_eq!(record, [1, 0, 0, 0]);
        assert_eq!(Str::at(0).read(&record, &strings), "Pick Lock");
    }

    #[test]
    pub fn localized_strings() {
        let mut record = [0u8; 72];
        let mut strings = StringBlock::new();
        let name = Loc::at(4);
        let mut value = LocString::new("Lockpicking");
        value.set(Locale::deDE, "Schlossknacken").mask = 0xFF_01FE;

        name.write(&mut record, &mut strings, value.clone());

        assert_eq!(name.read(&record, &strings), value);
        assert_eq!(
            name.locale(Locale::deDE).read(&record, &strings),
            "Schlossknacken"
        );
        assert_eq!(name.locale(Locale::frFR).read(&record, &strings), "");
        assert_eq!(name.mask().offset(), 68);
    }
}
