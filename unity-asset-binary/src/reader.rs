//! Binary data reader for Unity files

use crate::error::{BinaryError, Result};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Byte order for reading binary data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Big endian; container headers always use it
    Big,
    /// Little endian; most serialized-file metadata uses it
    #[default]
    Little,
}

/// Bounds-checked reader over an in-memory Unity file
pub struct BinaryReader<'a> {
    cursor: Cursor<&'a [u8]>,
    byte_order: ByteOrder,
}

macro_rules! read_number {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $size:expr) => {
        $(#[$doc])*
        pub fn $name(&mut self) -> Result<$ty> {
            self.ensure($size)?;
            Ok(match self.byte_order {
                ByteOrder::Big => self.cursor.$name::<BigEndian>()?,
                ByteOrder::Little => self.cursor.$name::<LittleEndian>()?,
            })
        }
    };
}

impl<'a> BinaryReader<'a> {
    /// Create a new binary reader from byte slice
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self {
            cursor: Cursor::new(data),
            byte_order,
        }
    }

    /// Get current position in the stream
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Set position in the stream
    ///
    /// Positions past the end are rejected so later reads never start
    /// outside the buffer.
    pub fn set_position(&mut self, pos: u64) -> Result<()> {
        if pos > self.len() as u64 {
            return Err(BinaryError::not_enough_data(pos as usize, self.len()));
        }
        self.cursor.set_position(pos);
        Ok(())
    }

    /// Get the total length of the data
    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get remaining bytes from current position
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position() as usize)
    }

    fn ensure(&self, count: usize) -> Result<()> {
        if self.remaining() < count {
            return Err(BinaryError::not_enough_data(count, self.remaining()));
        }
        Ok(())
    }

    /// Align to the next 4-byte boundary
    pub fn align(&mut self) -> Result<()> {
        self.align_to(4)
    }

    /// Align to the specified byte boundary
    pub fn align_to(&mut self, alignment: u64) -> Result<()> {
        let pos = self.position();
        let aligned = pos.div_ceil(alignment) * alignment;
        if aligned != pos {
            self.set_position(aligned)?;
        }
        Ok(())
    }

    /// Get the current byte order
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Set the byte order
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a boolean stored as one byte
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    read_number!(read_u16, u16, 2);
    read_number!(read_i16, i16, 2);
    read_number!(read_u32, u32, 4);
    read_number!(read_i32, i32, 4);
    read_number!(read_u64, u64, 8);
    read_number!(read_i64, i64, 8);
    read_number!(read_f32, f32, 4);
    read_number!(read_f64, f64, 8);

    /// Borrow the next `count` bytes and advance past them
    pub fn read_slice(&mut self, count: usize) -> Result<&'a [u8]> {
        self.ensure(count)?;
        let start = self.position() as usize;
        let data: &'a [u8] = self.cursor.get_ref();
        self.cursor.set_position((start + count) as u64);
        Ok(&data[start..start + count])
    }

    /// Read a fixed number of bytes
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        Ok(self.read_slice(count)?.to_vec())
    }

    /// Read a fixed-size byte array such as a GUID or hash
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_slice(N)?);
        Ok(out)
    }

    /// Read a null-terminated string
    pub fn read_cstring(&mut self) -> Result<String> {
        let rest = self.remaining_slice();
        let end = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| BinaryError::invalid_data("Unterminated string"))?;
        let bytes = self.read_slice(end)?;
        self.read_u8()?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    /// Read a string with a 32-bit length prefix
    pub fn read_string(&mut self) -> Result<String> {
        let length = self.read_i32()?;
        if length < 0 {
            return Err(BinaryError::invalid_data(format!(
                "Negative string length: {}",
                length
            )));
        }
        let bytes = self.read_slice(length as usize)?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    /// Read a length-prefixed string followed by 4-byte alignment
    pub fn read_aligned_string(&mut self) -> Result<String> {
        let string = self.read_string()?;
        self.align()?;
        Ok(string)
    }

    /// Get a slice of the remaining data
    pub fn remaining_slice(&self) -> &'a [u8] {
        let data: &'a [u8] = self.cursor.get_ref();
        let pos = (self.position() as usize).min(data.len());
        &data[pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_reading() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = BinaryReader::new(&data, ByteOrder::Little);

        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u8().unwrap(), 0x02);
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn test_endianness() {
        let data = [0x01, 0x02, 0x03, 0x04];

        let mut reader_le = BinaryReader::new(&data, ByteOrder::Little);
        assert_eq!(reader_le.read_u32().unwrap(), 0x04030201);

        let mut reader_be = BinaryReader::new(&data, ByteOrder::Big);
        assert_eq!(reader_be.read_u32().unwrap(), 0x01020304);
    }

    #[test]
    fn test_string_reading() {
        let data = b"Hello\0World\0";
        let mut reader = BinaryReader::new(data, ByteOrder::Little);

        assert_eq!(reader.read_cstring().unwrap(), "Hello");
        assert_eq!(reader.read_cstring().unwrap(), "World");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_unterminated_cstring() {
        let mut reader = BinaryReader::new(b"abc", ByteOrder::Little);
        assert!(reader.read_cstring().is_err());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_aligned_string() {
        let mut data = 5i32.to_le_bytes().to_vec();
        data.extend_from_slice(b"level\0\0\0");
        data.extend_from_slice(&7i32.to_le_bytes());

        let mut reader = BinaryReader::new(&data, ByteOrder::Little);
        assert_eq!(reader.read_aligned_string().unwrap(), "level");
        assert_eq!(reader.position(), 12);
        assert_eq!(reader.read_i32().unwrap(), 7);
    }

    #[test]
    fn test_alignment() {
        let data = [0u8; 32];
        let mut reader = BinaryReader::new(&data, ByteOrder::Little);

        reader.read_u8().unwrap();
        reader.align().unwrap();
        assert_eq!(reader.position(), 4);

        reader.align().unwrap();
        assert_eq!(reader.position(), 4);

        reader.align_to(16).unwrap();
        assert_eq!(reader.position(), 16);
    }

    #[test]
    fn test_short_read_is_an_error() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data, ByteOrder::Big);
        let err = reader.read_u32().unwrap_err();
        assert!(matches!(
            err,
            BinaryError::NotEnoughData {
                expected: 4,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_fixed_arrays() {
        let data: Vec<u8> = (0u8..20).collect();
        let mut reader = BinaryReader::new(&data, ByteOrder::Big);
        let hash: [u8; 16] = reader.read_array().unwrap();
        assert_eq!(hash[15], 15);
        assert_eq!(reader.read_slice(4).unwrap(), &[16, 17, 18, 19]);
    }
}
