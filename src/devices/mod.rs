//! Memory-mapped peripheral overlay.
//!
//! NES-style hosts put hardware behind small address windows (PPU registers
//! at 0x2000-0x2007, APU and I/O at 0x4000-0x4017). [`MappedMemory`] is a
//! [`MemoryBus`] that forwards accesses inside registered windows to a
//! [`Device`] and keeps every other address as plain RAM in a [`FlatMemory`].
//!
//! # Example
//!
//! ```rust
//! use cpu6502::{regions, MappedMemory, MemoryBus, RamDevice, CPU};
//!
//! let mut memory = MappedMemory::new();
//!
//! // Stand-in for the PPU register window
//! memory
//!     .add_device(*regions::PPU_REGISTERS.start(), Box::new(RamDevice::new(8)))
//!     .unwrap();
//!
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//! let cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! ```

use crate::{FlatMemory, MemoryBus};

pub mod ram;

pub use ram::RamDevice;

/// Abstract interface for memory-mapped hardware devices.
///
/// The mapper calls these methods with offset-based addressing (0 to size-1)
/// so a device does not depend on where it is mapped.
///
/// # Examples
///
/// ```rust
/// use cpu6502::Device;
///
/// struct Latch {
///     value: u8,
/// }
///
/// impl Device for Latch {
///     fn read(&self, _offset: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.value = value;
///     }
///
///     fn size(&self) -> u16 {
///         1
///     }
/// }
/// ```
pub trait Device {
    /// Read byte from device at offset relative to device base address.
    fn read(&self, offset: u16) -> u8;

    /// Write byte to device at offset relative to device base address.
    fn write(&mut self, offset: u16, value: u8);

    /// Number of bytes in the device's address window.
    fn size(&self) -> u16;

    /// Whether the device is currently asserting the shared IRQ line.
    ///
    /// The line is level sensitive: it stays asserted until the handler
    /// acknowledges the device through its registers.
    fn has_interrupt(&self) -> bool {
        false
    }
}

/// Internal mapping of a device to a base address.
struct DeviceMapping {
    base_addr: u16,
    device: Box<dyn Device>,
}

impl DeviceMapping {
    /// Exclusive end of the window as a `u32`, so a window ending at 0xFFFF
    /// does not overflow.
    fn end(&self) -> u32 {
        self.base_addr as u32 + self.device.size() as u32
    }

    fn contains(&self, addr: u16) -> bool {
        addr >= self.base_addr && (addr as u32) < self.end()
    }
}

/// Error returned when device registration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Address range overlaps with an existing device.
    Overlap {
        /// Base address of the new device
        new_base: u16,
        /// Size of the new device
        new_size: u16,
        /// Base address of the conflicting existing device
        existing_base: u16,
        /// Size of the conflicting existing device
        existing_size: u16,
    },
    /// Window would run past the top of the address space.
    OutOfRange {
        /// Base address of the rejected device
        base: u16,
        /// Size of the rejected device
        size: u16,
    },
}

impl std::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DeviceError::Overlap {
                new_base,
                new_size,
                existing_base,
                existing_size,
            } => {
                write!(
                    f,
                    "Device at 0x{:04X}-0x{:04X} overlaps device at 0x{:04X}-0x{:04X}",
                    new_base,
                    new_base.saturating_add(new_size.saturating_sub(1)),
                    existing_base,
                    existing_base.saturating_add(existing_size.saturating_sub(1))
                )
            }
            DeviceError::OutOfRange { base, size } => write!(
                f,
                "Device at 0x{:04X} with size 0x{:X} runs past 0xFFFF",
                base, size
            ),
        }
    }
}

impl std::error::Error for DeviceError {}

/// A bus of flat RAM with device windows laid over it.
///
/// Reads and writes inside a registered window go to the device; everything
/// else hits the backing [`FlatMemory`]. [`MemoryBus::irq_active`] reports
/// true while any device asserts its interrupt line.
///
/// # Examples
///
/// ```rust
/// use cpu6502::{MappedMemory, MemoryBus, RamDevice};
///
/// let mut memory = MappedMemory::new();
/// memory.add_device(0x4000, Box::new(RamDevice::new(0x18))).unwrap();
///
/// memory.write(0x4015, 0x0F); // goes to the device
/// memory.write(0x0300, 0x42); // goes to backing RAM
/// assert_eq!(memory.read(0x4015), 0x0F);
/// assert_eq!(memory.read(0x0300), 0x42);
/// assert_eq!(memory.backing().read(0x4015), 0x00);
/// ```
pub struct MappedMemory {
    backing: FlatMemory,
    devices: Vec<DeviceMapping>,
}

impl MappedMemory {
    /// Create a mapper over zeroed backing memory with no devices.
    pub fn new() -> Self {
        Self::with_backing(FlatMemory::new())
    }

    /// Create a mapper over existing memory contents (a loaded program image).
    pub fn with_backing(backing: FlatMemory) -> Self {
        Self {
            backing,
            devices: Vec::new(),
        }
    }

    /// Register a device at the specified base address.
    ///
    /// The device occupies `base_addr` to `base_addr + device.size() - 1`.
    /// A window may not run past 0xFFFF or overlap another device.
    ///
    /// ```rust
    /// use cpu6502::{DeviceError, MappedMemory, RamDevice};
    ///
    /// let mut memory = MappedMemory::new();
    /// memory.add_device(0x2000, Box::new(RamDevice::new(8))).unwrap();
    ///
    /// let result = memory.add_device(0x2004, Box::new(RamDevice::new(8)));
    /// assert!(matches!(result, Err(DeviceError::Overlap { .. })));
    ///
    /// let result = memory.add_device(0xFFF8, Box::new(RamDevice::new(16)));
    /// assert!(matches!(result, Err(DeviceError::OutOfRange { .. })));
    /// ```
    pub fn add_device(
        &mut self,
        base_addr: u16,
        device: Box<dyn Device>,
    ) -> Result<(), DeviceError> {
        let new = DeviceMapping { base_addr, device };
        let new_size = new.device.size();

        if new.end() > 0x1_0000 {
            return Err(DeviceError::OutOfRange {
                base: base_addr,
                size: new_size,
            });
        }

        for mapping in &self.devices {
            // Half-open ranges [base, end) overlap if each starts before the other ends
            if (new.base_addr as u32) < mapping.end() && new.end() > mapping.base_addr as u32 {
                return Err(DeviceError::Overlap {
                    new_base: base_addr,
                    new_size,
                    existing_base: mapping.base_addr,
                    existing_size: mapping.device.size(),
                });
            }
        }

        self.devices.push(new);
        Ok(())
    }

    /// Number of registered devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    pub fn backing(&self) -> &FlatMemory {
        &self.backing
    }

    pub fn backing_mut(&mut self) -> &mut FlatMemory {
        &mut self.backing
    }

    fn find_device(&mut self, addr: u16) -> Option<(&mut (dyn Device + 'static), u16)> {
        self.devices
            .iter_mut()
            .find(|mapping| mapping.contains(addr))
            .map(|mapping| (mapping.device.as_mut(), addr - mapping.base_addr))
    }

    fn find_device_immut(&self, addr: u16) -> Option<(&dyn Device, u16)> {
        self.devices
            .iter()
            .find(|mapping| mapping.contains(addr))
            .map(|mapping| (mapping.device.as_ref(), addr - mapping.base_addr))
    }
}

impl Default for MappedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MappedMemory {
    fn read(&self, addr: u16) -> u8 {
        match self.find_device_immut(addr) {
            Some((device, offset)) => device.read(offset),
            None => self.backing.read(addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match self.find_device(addr) {
            Some((device, offset)) => device.write(offset, value),
            None => self.backing.write(addr, value),
        }
    }

    fn irq_active(&self) -> bool {
        self.devices.iter().any(|mapping| mapping.device.has_interrupt())
    }
}
