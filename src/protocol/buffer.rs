//! Buffer utilities for reading and writing column values.

use crate::error::{Error, Result};
use crate::protocol::constants::{TNS_LONG_LENGTH_INDICATOR, TNS_NULL_LENGTH_INDICATOR};
use bytes::{BufMut, Bytes, BytesMut};

const TNS_CHUNK_SIZE: usize = 65536;

/// A cursor over row data received from the server.
pub struct ReadBuffer {
    data: Bytes,
    pos: usize,
}

impl ReadBuffer {
    /// Create a new read buffer from bytes.
    pub fn new(data: Bytes) -> Self {
        Self { data, pos: 0 }
    }

    /// Get the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the remaining bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if the buffer has at least `n` bytes remaining.
    pub fn has_remaining(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    #[track_caller]
    fn ensure(&self, n: usize) -> Result<()> {
        if !self.has_remaining(n) {
            return Err(Error::BufferTooSmall {
                needed: n,
                available: self.remaining(),
                location: std::panic::Location::caller(),
            });
        }
        Ok(())
    }

    /// Read a single byte.
    #[track_caller]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let val = self.data[self.pos];
        self.pos += 1;
        Ok(val)
    }

    /// Read raw bytes.
    #[track_caller]
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        let bytes = self.data.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(bytes)
    }

    /// Read a variable-length u32 (Oracle's UB4 format).
    /// Uses big-endian byte order: first byte is most significant.
    pub fn read_ub4(&mut self) -> Result<u32> {
        let length = self.read_u8()?;
        if length == 0 {
            return Ok(0);
        }
        if length & 0x80 != 0 || length > 4 {
            return Err(Error::protocol(format!(
                "Invalid UB4 length (negative or too large): {}",
                length
            )));
        }
        let mut val: u32 = 0;
        for _ in 0..length {
            val = (val << 8) | (self.read_u8()? as u32);
        }
        Ok(val)
    }

    /// Read bytes with a length prefix.
    ///
    /// Returns `None` for a NULL column value.
    pub fn read_bytes_with_length(&mut self) -> Result<Option<Bytes>> {
        let length = self.read_u8()?;
        if length == TNS_NULL_LENGTH_INDICATOR {
            return Ok(None);
        }
        if length == TNS_LONG_LENGTH_INDICATOR {
            let mut result = BytesMut::new();
            loop {
                let chunk_len = self.read_ub4()?;
                if chunk_len == 0 {
                    break;
                }
                let chunk = self.read_bytes(chunk_len as usize)?;
                result.extend_from_slice(&chunk);
            }
            return Ok(Some(result.freeze()));
        }
        let data = self.read_bytes(length as usize)?;
        Ok(Some(data))
    }
}

/// A buffer for writing column values.
pub struct WriteBuffer {
    data: BytesMut,
}

impl WriteBuffer {
    /// Create a new write buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a new write buffer with specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
        }
    }

    /// Get the current length of the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the buffer contents as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Freeze the buffer into immutable bytes.
    pub fn freeze(self) -> Bytes {
        self.data.freeze()
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, val: u8) {
        self.data.put_u8(val);
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write a variable-length u32 (Oracle's UB4 format), big-endian.
    pub fn write_ub4(&mut self, val: u32) {
        if val == 0 {
            self.write_u8(0);
        } else {
            let bytes = val.to_be_bytes();
            let skip = (val.leading_zeros() / 8) as usize;
            self.write_u8((4 - skip) as u8);
            self.data.extend_from_slice(&bytes[skip..]);
        }
    }

    /// Write a NULL column value.
    pub fn write_null(&mut self) {
        self.write_u8(TNS_NULL_LENGTH_INDICATOR);
    }

    /// Write bytes with a length prefix.
    pub fn write_bytes_with_length(&mut self, bytes: &[u8]) {
        let len = bytes.len();
        if len == 0 {
            self.write_null();
        } else if len < TNS_LONG_LENGTH_INDICATOR as usize {
            self.write_u8(len as u8);
            self.write_bytes(bytes);
        } else {
            self.write_u8(TNS_LONG_LENGTH_INDICATOR);
            for chunk in bytes.chunks(TNS_CHUNK_SIZE) {
                self.write_ub4(chunk.len() as u32);
                self.write_bytes(chunk);
            }
            self.write_ub4(0); // End of chunks
        }
    }
}

impl Default for WriteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bytes_with_length() {
        let mut buf = ReadBuffer::new(Bytes::from_static(&[4, 195, 6, 115, 51, 0]));
        let value = buf.read_bytes_with_length().unwrap();
        assert_eq!(value.as_deref(), Some(&[195u8, 6, 115, 51][..]));
        assert_eq!(buf.read_bytes_with_length().unwrap(), None);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn test_read_bytes_chunked() {
        let data = [TNS_LONG_LENGTH_INDICATOR, 1, 2, 0xAA, 0xBB, 1, 1, 0xCC, 0];
        let mut buf = ReadBuffer::new(Bytes::copy_from_slice(&data));
        let value = buf.read_bytes_with_length().unwrap().unwrap();
        assert_eq!(&value[..], &[0xAA, 0xBB, 0xCC]);
        assert_eq!(buf.position(), data.len());
    }

    #[test]
    fn test_read_past_end() {
        let mut buf = ReadBuffer::new(Bytes::from_static(&[5, 128, 0]));
        match buf.read_bytes_with_length() {
            Err(Error::BufferTooSmall {
                needed, available, ..
            }) => {
                assert_eq!(needed, 5);
                assert_eq!(available, 2);
            }
            other => panic!("Expected BufferTooSmall, got {:?}", other),
        }
    }

    #[test]
    fn test_ub4_round_trip() {
        for val in [0u32, 1, 0xFF, 0x100, 0x12345, u32::MAX] {
            let mut out = WriteBuffer::new();
            out.write_ub4(val);
            let mut buf = ReadBuffer::new(out.freeze());
            assert_eq!(buf.read_ub4().unwrap(), val);
        }
    }

    #[test]
    fn test_write_bytes_with_length_long() {
        let payload = vec![7u8; 300];
        let mut out = WriteBuffer::new();
        out.write_bytes_with_length(&payload);
        assert_eq!(out.as_bytes()[0], TNS_LONG_LENGTH_INDICATOR);

        let mut buf = ReadBuffer::new(out.freeze());
        assert_eq!(buf.read_bytes_with_length().unwrap().unwrap(), payload);
    }
}
