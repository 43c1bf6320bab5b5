//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y, PC, SP and the eight status flags (`Registers`)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Memory**: exclusively owned `MemoryBus` implementation
//!
//! ## Execution Model
//!
//! - `step()`: Execute exactly one instruction
//! - `run()`: Execute up to a number of instructions
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted
//!
//! One `step()` fetches the opcode at PC, looks it up in `OPCODE_TABLE`,
//! resolves the addressing mode, charges the base cycles, executes, and
//! finally advances PC past the instruction unless the instruction already
//! redirected it.

use crate::addressing::AddressingMode;
use crate::instructions::{self, Flow};
use crate::opcodes::lookup;
use crate::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, Registers};

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait, with
/// `FlatMemory` as the default.
///
/// # Examples
///
/// ```
/// use cpu2a03::{FlatMemory, MemoryBus, CPU};
///
/// let cpu = CPU::new(FlatMemory::new());
///
/// assert_eq!(cpu.pc(), 0xFFFC);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Register file
    pub(crate) regs: Registers,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Construction-time options
    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl CPU<FlatMemory> {
    /// Creates a CPU whose memory is pre-populated from `image`.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::ImageTooLarge` for images over 64KB.
    pub fn from_image(image: &[u8]) -> Result<Self, ExecutionError> {
        Ok(Self::new(FlatMemory::from_image(image)?))
    }
}

impl Default for CPU<FlatMemory> {
    fn default() -> Self {
        Self::new(FlatMemory::new())
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU over `memory` with the default configuration.
    ///
    /// PC starts at 0xFFFC and SP at 0xFD. The reset vector is not followed;
    /// call `rst()` to vector through it.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU over `memory` with explicit options.
    ///
    /// ```
    /// use cpu2a03::{CpuConfig, FlatMemory, CPU};
    ///
    /// let config = CpuConfig::builder().initial_pc(0xC000).build();
    /// let cpu = CPU::with_config(FlatMemory::new(), config);
    /// assert_eq!(cpu.pc(), 0xC000);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            regs: Registers::new(config.initial_pc, config.initial_sp),
            cycles: 0,
            config,
            memory,
        }
    }

    /// Restores PC and SP to their initial values and zeroes the cycle
    /// counter. Memory and the remaining registers are left untouched.
    pub fn reset(&mut self) {
        self.regs.pc = self.config.initial_pc;
        self.regs.sp = self.config.initial_sp;
        self.cycles = 0;
    }

    /// Zero-fills memory without touching registers.
    pub fn clear(&mut self) {
        self.memory.clear();
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::IllegalOpcode` if the byte at PC has no
    /// opcode table entry. Nothing is modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu2a03::{ExecutionError, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x8000, 0xEA); // NOP
    /// mem.write(0x8001, 0x02); // illegal
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_pc(0x8000);
    ///
    /// assert!(cpu.step().is_ok());
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::IllegalOpcode { opcode: 0x02, pc: 0x8001 })
    /// );
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);

        let entry = match lookup(opcode) {
            Some(entry) => entry,
            None => {
                log::warn!("illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc);
                return Err(ExecutionError::IllegalOpcode { opcode, pc });
            }
        };

        let oper = self.fetch_operand(entry.mode);
        let step = entry.mode.resolve(&self.regs, &self.memory, oper);

        log::trace!("{:04X}  {:02X}  {}  {}", pc, opcode, entry, self.regs);

        self.cycles += entry.base_cycles as u64;

        match instructions::execute(self, entry.instruction, &step) {
            Flow::Advance => {
                self.regs.pc = self.regs.pc.wrapping_add(step.length as u16 + 1);
            }
            Flow::Jump => {}
        }

        Ok(())
    }

    /// Executes up to `max_steps` instructions.
    ///
    /// Returns `max_steps` when every step succeeds. The first error stops
    /// the loop and is returned as-is; `cycles()` and `pc()` show how far
    /// execution got.
    pub fn run(&mut self, max_steps: usize) -> Result<usize, ExecutionError> {
        for _ in 0..max_steps {
            self.step()?;
        }
        Ok(max_steps)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error
    /// occurs. Returns the actual number of cycles consumed, which may exceed
    /// the budget by up to one instruction. A budget of `u64::MAX` runs until
    /// the first error.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Raw operand following the opcode: one byte, a little-endian word, or
    /// nothing, depending on the mode.
    fn fetch_operand(&self, mode: AddressingMode) -> u16 {
        let operand_addr = self.regs.pc.wrapping_add(1);
        match mode.operand_len() {
            0 => 0,
            1 => self.memory.read(operand_addr) as u16,
            _ => self.memory.read_word(operand_addr),
        }
    }

    // ========== Memory Access ==========

    /// Reads a byte from memory.
    pub fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Reads a little-endian word from memory.
    pub fn read_word(&self, addr: u16) -> u16 {
        self.memory.read_word(addr)
    }

    /// Writes a byte to memory.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Copies `bytes` into memory starting at `addr`, wrapping at 0xFFFF.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut target = addr;
        for &byte in bytes {
            self.memory.write(target, byte);
            target = target.wrapping_add(1);
        }
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands its memory back.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// The options this CPU was built with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Register Getters ==========

    /// Snapshot of the full register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (`NVUBDIZC`).
    pub fn status(&self) -> u8 {
        self.regs.status()
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    /// Returns the negative flag.
    pub fn flag_n(&self) -> bool {
        self.regs.flag_n
    }

    /// Returns the overflow flag.
    pub fn flag_v(&self) -> bool {
        self.regs.flag_v
    }

    /// Returns the unused status bit 5.
    pub fn flag_u(&self) -> bool {
        self.regs.flag_u
    }

    /// Returns the break flag.
    pub fn flag_b(&self) -> bool {
        self.regs.flag_b
    }

    /// Returns the decimal mode flag.
    pub fn flag_d(&self) -> bool {
        self.regs.flag_d
    }

    /// Returns the interrupt disable flag.
    pub fn flag_i(&self) -> bool {
        self.regs.flag_i
    }

    /// Returns the zero flag.
    pub fn flag_z(&self) -> bool {
        self.regs.flag_z
    }

    /// Returns the carry flag.
    pub fn flag_c(&self) -> bool {
        self.regs.flag_c
    }

    // ========== Register Setters (tooling and tests) ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Unpacks all eight status bits, including U and B.
    pub fn set_status(&mut self, value: u8) {
        self.regs.set_status(value);
    }

    /// Updates Z and N from `value`.
    pub fn set_zero_negative(&mut self, value: u8) {
        self.regs.set_zero_negative(value);
    }

    /// Sets the negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.flag_n = value;
    }

    /// Sets the overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.flag_v = value;
    }

    /// Sets the break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.flag_b = value;
    }

    /// Sets the decimal mode flag. Arithmetic stays binary.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.flag_d = value;
    }

    /// Sets the interrupt disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.flag_i = value;
    }

    /// Sets the zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.flag_z = value;
    }

    /// Sets the carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.flag_c = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_pc(0x8000);
        cpu
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = CPU::new(FlatMemory::new());

        assert_eq!(cpu.pc(), 0xFFFC);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.status(), 0b0010_0000);
    }

    #[test]
    fn test_from_image() {
        let cpu = CPU::from_image(&[0xA9, 0x42]).unwrap();

        assert_eq!(cpu.read(0x0000), 0xA9);
        assert_eq!(cpu.read(0x0001), 0x42);
    }

    #[test]
    fn test_reset_keeps_memory_and_registers() {
        let mut cpu = setup_cpu();
        cpu.write(0x0200, 0x55);
        cpu.set_a(0x12);
        cpu.set_sp(0x10);
        cpu.cycles = 100;

        cpu.reset();

        assert_eq!(cpu.pc(), 0xFFFC);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.a(), 0x12);
        assert_eq!(cpu.read(0x0200), 0x55);
    }

    #[test]
    fn test_clear_keeps_registers() {
        let mut cpu = setup_cpu();
        cpu.write(0x0200, 0x55);
        cpu.set_x(0x34);

        cpu.clear();

        assert_eq!(cpu.read(0x0200), 0x00);
        assert_eq!(cpu.x(), 0x34);
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn test_step_one_byte_instruction() {
        let mut cpu = setup_cpu();
        cpu.write(0x8000, 0xEA); // NOP

        cpu.step().unwrap();

        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.cycles(), 2);
    }

    #[test]
    fn test_step_three_byte_instruction() {
        let mut cpu = setup_cpu();
        cpu.load(0x8000, &[0xAD, 0x34, 0x12]); // LDA $1234
        cpu.write(0x1234, 0x99);

        cpu.step().unwrap();

        assert_eq!(cpu.a(), 0x99);
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.cycles(), 4);
    }

    #[test]
    fn test_step_illegal_opcode_leaves_state() {
        let mut cpu = setup_cpu();
        cpu.write(0x8000, 0x02);
        let before = cpu.registers();

        let result = cpu.step();

        assert_eq!(
            result,
            Err(ExecutionError::IllegalOpcode {
                opcode: 0x02,
                pc: 0x8000
            })
        );
        assert_eq!(cpu.registers(), before);
        assert_eq!(cpu.cycles(), 0);
    }

    #[test]
    fn test_pc_wraps_at_top_of_memory() {
        let mut cpu = setup_cpu();
        cpu.set_pc(0xFFFF);
        cpu.write(0xFFFF, 0xEA);

        cpu.step().unwrap();

        assert_eq!(cpu.pc(), 0x0000);
    }

    #[test]
    fn test_run_stops_at_error() {
        let mut cpu = setup_cpu();
        cpu.load(0x8000, &[0xEA, 0xEA, 0x02]);

        assert_eq!(cpu.run(2), Ok(2));
        assert!(cpu.run(5).is_err());
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn test_run_for_cycles() {
        let mut cpu = setup_cpu();
        for addr in 0x8000..=0x8010 {
            cpu.write(addr, 0xEA);
        }

        let consumed = cpu.run_for_cycles(10).unwrap();

        assert_eq!(consumed, 10);
        assert_eq!(cpu.pc(), 0x8005);
    }

    #[test]
    fn test_run_for_cycles_unbounded_budget() {
        let mut cpu = setup_cpu();
        cpu.load(0x8000, &[0xEA, 0xEA, 0xEA, 0x02]);
        cpu.step().unwrap();

        let result = cpu.run_for_cycles(u64::MAX);

        assert_eq!(
            result,
            Err(ExecutionError::IllegalOpcode {
                opcode: 0x02,
                pc: 0x8003
            })
        );
        assert_eq!(cpu.cycles(), 6);
    }

    #[test]
    fn test_run_error_reports_progress_through_state() {
        let mut cpu = setup_cpu();
        cpu.load(0x8000, &[0xEA, 0xEA, 0xEA, 0x02]);

        assert!(cpu.run(10).is_err());
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.cycles(), 6);
    }

    #[test]
    fn test_load_wraps() {
        let mut cpu = setup_cpu();
        cpu.load(0xFFFF, &[0x11, 0x22]);

        assert_eq!(cpu.read(0xFFFF), 0x11);
        assert_eq!(cpu.read(0x0000), 0x22);
    }
}
