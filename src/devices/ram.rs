//! Plain read/write storage as a [`Device`].

use super::Device;

/// A window of RAM that can be laid over any part of the address space.
///
/// Useful as a stand-in for peripheral register files in tests, or to give a
/// host direct access to a region's contents.
///
/// # Examples
///
/// ```rust
/// use cpu6502::{Device, RamDevice};
///
/// let mut ram = RamDevice::new(1024);
/// ram.write(0x42, 0xAA);
/// assert_eq!(ram.read(0x42), 0xAA);
/// ```
#[derive(Debug, Clone)]
pub struct RamDevice {
    data: Vec<u8>,
}

impl RamDevice {
    /// Create a zeroed RAM device of `size` bytes.
    pub fn new(size: u16) -> Self {
        Self {
            data: vec![0; size as usize],
        }
    }

    /// Copy `bytes` in at `offset`. Bytes past the end of the device are
    /// dropped; returns how many were stored.
    ///
    /// ```rust
    /// use cpu6502::{Device, RamDevice};
    ///
    /// let mut ram = RamDevice::new(4);
    /// assert_eq!(ram.load_bytes(2, &[0x01, 0x02, 0x03]), 2);
    /// assert_eq!(ram.read(3), 0x02);
    /// ```
    pub fn load_bytes(&mut self, offset: u16, bytes: &[u8]) -> usize {
        let start = (offset as usize).min(self.data.len());
        let count = bytes.len().min(self.data.len() - start);
        self.data[start..start + count].copy_from_slice(&bytes[..count]);
        count
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Device for RamDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0)
    }

    fn write(&mut self, offset: u16, value: u8) {
        if let Some(slot) = self.data.get_mut(offset as usize) {
            *slot = value;
        }
    }

    fn size(&self) -> u16 {
        self.data.len() as u16
    }
}
