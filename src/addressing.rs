//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the pure
//! resolver for each one. A resolver looks at the register file, memory and
//! the raw operand that follows the opcode, and produces an
//! `AddressingResult`: the operand value, where a result would be written
//! back, and how many operand bytes the instruction consumed.
//!
//! Resolvers never mutate state.

use crate::{MemoryBus, Registers};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wraps within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y register, wraps within zero page.
    ZeroPageY,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register. May cross a page.
    AbsoluteX,

    /// 16-bit address indexed by Y register. May cross a page.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    IndirectY,

    /// Signed 8-bit offset for branch instructions.
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Accumulator | AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Resolves this mode against the current state.
    ///
    /// `oper` is the raw operand: the byte after the opcode for 1-byte
    /// modes, the little-endian word after the opcode for 2-byte modes, and
    /// ignored for 0-byte modes.
    pub fn resolve<M: MemoryBus + ?Sized>(
        self,
        regs: &Registers,
        memory: &M,
        oper: u16,
    ) -> AddressingResult {
        match self {
            AddressingMode::Accumulator => accumulator(regs),
            AddressingMode::Immediate => immediate(oper),
            AddressingMode::Implied => implied(regs),
            AddressingMode::ZeroPage => zero_page(memory, oper),
            AddressingMode::ZeroPageX => zero_page_x(regs, memory, oper),
            AddressingMode::ZeroPageY => zero_page_y(regs, memory, oper),
            AddressingMode::Absolute => absolute(memory, oper),
            AddressingMode::AbsoluteX => absolute_x(regs, memory, oper),
            AddressingMode::AbsoluteY => absolute_y(regs, memory, oper),
            AddressingMode::Indirect => indirect(memory, oper),
            AddressingMode::IndirectX => indirect_x(regs, memory, oper),
            AddressingMode::IndirectY => indirect_y(regs, memory, oper),
            AddressingMode::Relative => relative(regs, memory, oper),
        }
    }
}

/// Where an instruction's result goes, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The accumulator register.
    Accumulator,
    /// No write-back target (implied and immediate operands).
    Implied,
    /// A concrete memory address.
    Memory(u16),
}

/// Output of an addressing-mode resolver, created fresh for every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressingResult {
    /// Resolved 8-bit operand value.
    pub operand: u8,
    /// Write-back target.
    pub target: Target,
    /// Number of operand bytes following the opcode (0, 1 or 2).
    pub length: u8,
}

impl AddressingResult {
    /// The effective memory address, if the mode produced one.
    pub fn address(&self) -> Option<u16> {
        match self.target {
            Target::Memory(addr) => Some(addr),
            Target::Accumulator | Target::Implied => None,
        }
    }

    fn memory<M: MemoryBus + ?Sized>(memory: &M, address: u16, length: u8) -> Self {
        Self {
            operand: memory.read(address),
            target: Target::Memory(address),
            length,
        }
    }
}

/// Reads a pointer from zero page. The high byte wraps within page 0.
fn zero_page_pointer<M: MemoryBus + ?Sized>(memory: &M, pointer: u8) -> u16 {
    let lo = memory.read(pointer as u16) as u16;
    let hi = memory.read(pointer.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

pub fn accumulator(regs: &Registers) -> AddressingResult {
    AddressingResult {
        operand: regs.a,
        target: Target::Accumulator,
        length: 0,
    }
}

pub fn immediate(oper: u16) -> AddressingResult {
    AddressingResult {
        operand: oper as u8,
        target: Target::Implied,
        length: 1,
    }
}

/// The operand is the accumulator, which implied instructions ignore.
pub fn implied(regs: &Registers) -> AddressingResult {
    AddressingResult {
        operand: regs.a,
        target: Target::Implied,
        length: 0,
    }
}

pub fn zero_page<M: MemoryBus + ?Sized>(memory: &M, oper: u16) -> AddressingResult {
    AddressingResult::memory(memory, oper & 0x00FF, 1)
}

pub fn zero_page_x<M: MemoryBus + ?Sized>(
    regs: &Registers,
    memory: &M,
    oper: u16,
) -> AddressingResult {
    let address = (oper as u8).wrapping_add(regs.x) as u16;
    AddressingResult::memory(memory, address, 1)
}

pub fn zero_page_y<M: MemoryBus + ?Sized>(
    regs: &Registers,
    memory: &M,
    oper: u16,
) -> AddressingResult {
    let address = (oper as u8).wrapping_add(regs.y) as u16;
    AddressingResult::memory(memory, address, 1)
}

pub fn absolute<M: MemoryBus + ?Sized>(memory: &M, oper: u16) -> AddressingResult {
    AddressingResult::memory(memory, oper, 2)
}

pub fn absolute_x<M: MemoryBus + ?Sized>(
    regs: &Registers,
    memory: &M,
    oper: u16,
) -> AddressingResult {
    AddressingResult::memory(memory, oper.wrapping_add(regs.x as u16), 2)
}

pub fn absolute_y<M: MemoryBus + ?Sized>(
    regs: &Registers,
    memory: &M,
    oper: u16,
) -> AddressingResult {
    AddressingResult::memory(memory, oper.wrapping_add(regs.y as u16), 2)
}

/// One level of indirection: the target is the word stored at `oper`.
pub fn indirect<M: MemoryBus + ?Sized>(memory: &M, oper: u16) -> AddressingResult {
    AddressingResult::memory(memory, memory.read_word(oper), 2)
}

pub fn indirect_x<M: MemoryBus + ?Sized>(
    regs: &Registers,
    memory: &M,
    oper: u16,
) -> AddressingResult {
    let pointer = (oper as u8).wrapping_add(regs.x);
    AddressingResult::memory(memory, zero_page_pointer(memory, pointer), 1)
}

pub fn indirect_y<M: MemoryBus + ?Sized>(
    regs: &Registers,
    memory: &M,
    oper: u16,
) -> AddressingResult {
    let base = zero_page_pointer(memory, oper as u8);
    AddressingResult::memory(memory, base.wrapping_add(regs.y as u16), 1)
}

/// Branch target: the signed offset is applied to the address of the next
/// instruction (`PC + 2`), where `regs.pc` holds the branch opcode address.
pub fn relative<M: MemoryBus + ?Sized>(
    regs: &Registers,
    memory: &M,
    oper: u16,
) -> AddressingResult {
    let offset = oper as u8 as i8;
    let next = regs.pc.wrapping_add(2);
    AddressingResult::memory(memory, next.wrapping_add_signed(offset as i16), 1)
}
