//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! storage behind its 16-bit address space, and `FlatMemory`, the plain 64KB
//! buffer the CPU uses by default.
//!
//! ## Design Principles
//!
//! - No bus errors - reads/writes always succeed
//! - Addresses are `u16`, so every address is already masked to 16 bits
//! - Word reads are little-endian and wrap from 0xFFFF to 0x0000

use crate::ExecutionError;

/// Size of the 6502 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use cpu2a03::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu2a03::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` (low byte) and `addr + 1`
    /// (high byte). The high byte address wraps from 0xFFFF to 0x0000.
    ///
    /// ```
    /// use cpu2a03::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// assert_eq!(mem.read_word(0xFFFC), 0x8000);
    /// ```
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Zero-fills the whole address space.
    ///
    /// The default implementation writes every address through `write`, so
    /// a bus with read-only regions keeps them intact.
    fn clear(&mut self) {
        for addr in 0..=u16::MAX {
            self.write(addr, 0x00);
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are writable RAM, initialized to 0x00 unless built
/// from an image.
///
/// # Examples
///
/// ```
/// use cpu2a03::{FlatMemory, MemoryBus};
///
/// let mem = FlatMemory::from_image(&[0xA9, 0x01]).unwrap();
/// assert_eq!(mem.read(0x0000), 0xA9);
/// assert_eq!(mem.read(0x0001), 0x01);
/// assert_eq!(mem.read(0x0002), 0x00);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Creates memory pre-populated from `image`, starting at address 0x0000.
    ///
    /// Images shorter than 64KB are zero-padded.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::ImageTooLarge` if `image` is longer than
    /// 65536 bytes.
    pub fn from_image(image: &[u8]) -> Result<Self, ExecutionError> {
        if image.len() > MEMORY_SIZE {
            return Err(ExecutionError::ImageTooLarge { len: image.len() });
        }

        let mut memory = Self::new();
        memory.data[..image.len()].copy_from_slice(image);
        Ok(memory)
    }

    /// Zero-fills every cell.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Returns the full memory image, e.g. for a host to persist or diff.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn clear(&mut self) {
        self.reset();
    }
}
