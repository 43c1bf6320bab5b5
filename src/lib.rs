//! # 2A03 CPU Core
//!
//! An instruction-level emulator of the 6502 core found in the Ricoh 2A03,
//! intended for retro-computing tooling and emulator test benches.
//!
//! The crate models the processor state machine only: the register file,
//! the 13 addressing modes, opcode decode and dispatch, per-instruction flag
//! semantics, and the stack and interrupt vectoring built on top of page 1.
//! Like the 2A03, arithmetic is always binary; the decimal flag is stored but
//! never changes the result of `ADC`/`SBC`.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu2a03::{FlatMemory, MemoryBus, CPU};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0x8000, 0xA9); // LDA #$42
//! memory.write(0x8001, 0x42);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.set_pc(0x8000);
//! cpu.step().unwrap();
//!
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! assert_eq!(cpu.cycles(), 2);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, host API and the dispatch loop
//! - `registers` - register file snapshot
//! - `status` - status byte packing and N/Z helpers
//! - `memory` - `MemoryBus` trait and the flat 64KB implementation
//! - `addressing` - addressing modes and their resolvers
//! - `stack` - byte and word push/pop over page 1
//! - `interrupts` - NMI/IRQ/RST entry and the vector table
//! - `opcodes` - static opcode table
//! - `config` - construction-time CPU options
//!
//! Nothing in the core prints. Execution is reported through the `log`
//! facade at `trace`/`debug`/`warn` level; install any logger to see it.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod stack;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

pub use addressing::{AddressingMode, AddressingResult, Target};
pub use config::CpuConfig;
pub use cpu::CPU;
pub use interrupts::{BrkVector, IRQ_VECTOR, NMI_VECTOR, RST_VECTOR};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{Instruction, OpcodeEntry, OPCODE_TABLE};
pub use registers::Registers;

/// Errors that can occur while driving the CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched opcode has no entry in the opcode table.
    ///
    /// CPU state is left exactly as it was before the fetch, so the host can
    /// inspect it and decide whether to halt, patch memory, or skip ahead.
    IllegalOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u16,
    },

    /// A memory image handed to the constructor does not fit in 64KB.
    ImageTooLarge {
        /// Length of the rejected image in bytes.
        len: usize,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, pc } => {
                write!(f, "Illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc)
            }
            ExecutionError::ImageTooLarge { len } => {
                write!(
                    f,
                    "Memory image of {} bytes exceeds the {} byte address space",
                    len, MEMORY_SIZE
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
