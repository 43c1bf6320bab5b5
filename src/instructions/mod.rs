//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone function taking the CPU and the
//! `AddressingResult` resolved for the current step. Base cycles are charged
//! by the dispatcher before the instruction runs; instructions only add
//! conditional extras (a taken branch).
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

use crate::{AddressingResult, Instruction, MemoryBus, Target, CPU};

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

/// What the dispatcher does with PC after an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Advance PC past the instruction.
    Advance,
    /// PC was set by the instruction; leave it alone.
    Jump,
}

/// Runs `instruction` against the resolved operand.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: Instruction,
    step: &AddressingResult,
) -> Flow {
    match instruction {
        Instruction::Adc => alu::execute_adc(cpu, step),
        Instruction::Sbc => alu::execute_sbc(cpu, step),
        Instruction::And => alu::execute_and(cpu, step),
        Instruction::Ora => alu::execute_ora(cpu, step),
        Instruction::Eor => alu::execute_eor(cpu, step),
        Instruction::Cmp => alu::execute_cmp(cpu, step),
        Instruction::Cpx => alu::execute_cpx(cpu, step),
        Instruction::Cpy => alu::execute_cpy(cpu, step),
        Instruction::Bit => alu::execute_bit(cpu, step),

        Instruction::Bcc => branches::execute_bcc(cpu, step),
        Instruction::Bcs => branches::execute_bcs(cpu, step),
        Instruction::Beq => branches::execute_beq(cpu, step),
        Instruction::Bne => branches::execute_bne(cpu, step),
        Instruction::Bmi => branches::execute_bmi(cpu, step),
        Instruction::Bpl => branches::execute_bpl(cpu, step),
        Instruction::Bvc => branches::execute_bvc(cpu, step),
        Instruction::Bvs => branches::execute_bvs(cpu, step),

        Instruction::Asl => shifts::execute_asl(cpu, step),
        Instruction::Lsr => shifts::execute_lsr(cpu, step),
        Instruction::Rol => shifts::execute_rol(cpu, step),
        Instruction::Ror => shifts::execute_ror(cpu, step),

        Instruction::Lda => load_store::execute_lda(cpu, step),
        Instruction::Ldx => load_store::execute_ldx(cpu, step),
        Instruction::Ldy => load_store::execute_ldy(cpu, step),
        Instruction::Sta => load_store::execute_sta(cpu, step),
        Instruction::Stx => load_store::execute_stx(cpu, step),
        Instruction::Sty => load_store::execute_sty(cpu, step),

        Instruction::Inc => inc_dec::execute_inc(cpu, step),
        Instruction::Dec => inc_dec::execute_dec(cpu, step),
        Instruction::Inx => inc_dec::execute_inx(cpu),
        Instruction::Iny => inc_dec::execute_iny(cpu),
        Instruction::Dex => inc_dec::execute_dex(cpu),
        Instruction::Dey => inc_dec::execute_dey(cpu),

        Instruction::Jmp => control::execute_jmp(cpu, step),
        Instruction::Jsr => control::execute_jsr(cpu, step),
        Instruction::Rts => control::execute_rts(cpu),
        Instruction::Rti => control::execute_rti(cpu),
        Instruction::Brk => control::execute_brk(cpu),
        Instruction::Nop => Flow::Advance,

        Instruction::Pha => stack::execute_pha(cpu),
        Instruction::Php => stack::execute_php(cpu),
        Instruction::Pla => stack::execute_pla(cpu),
        Instruction::Plp => stack::execute_plp(cpu),

        Instruction::Clc => flags::execute_clc(cpu),
        Instruction::Cld => flags::execute_cld(cpu),
        Instruction::Cli => flags::execute_cli(cpu),
        Instruction::Clv => flags::execute_clv(cpu),
        Instruction::Sec => flags::execute_sec(cpu),
        Instruction::Sed => flags::execute_sed(cpu),
        Instruction::Sei => flags::execute_sei(cpu),

        Instruction::Tax => transfer::execute_tax(cpu),
        Instruction::Tay => transfer::execute_tay(cpu),
        Instruction::Txa => transfer::execute_txa(cpu),
        Instruction::Tya => transfer::execute_tya(cpu),
        Instruction::Tsx => transfer::execute_tsx(cpu),
        Instruction::Txs => transfer::execute_txs(cpu),
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Commits `value` to the instruction's target.
    pub(crate) fn write_back(&mut self, target: Target, value: u8) {
        match target {
            Target::Accumulator => self.regs.a = value,
            Target::Memory(addr) => self.memory.write(addr, value),
            Target::Implied => {}
        }
    }
}
