use super::WireError;

/// Bounds-checked cursor over a whole DNS message.
///
/// Keeps the full buffer around so compression pointers can be followed
/// from anywhere in the message.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    #[inline]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let value = *self
            .data
            .get(self.pos)
            .ok_or(WireError::UnexpectedEof { offset: self.pos })?;
        self.pos += 1;
        Ok(value)
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let end = self.pos + len;
        let slice = self
            .data
            .get(self.pos..end)
            .ok_or(WireError::UnexpectedEof { offset: end })?;
        self.pos = end;
        Ok(slice)
    }
}
