//! Tests for LDA, LDX, LDY, STA, STX and STY across their addressing modes.

use cpu2a03::{FlatMemory, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0x8000);
    cpu
}

// ========== Load Tests ==========

#[test]
fn test_lda_immediate_sets_flags() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0xA9, 0x00, 0xA9, 0x80]);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());

    assert_eq!(cpu.pc(), 0x8004);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0xA5, 0x0A]);
    cpu.write(0x000A, 0xCD);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xCD);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_lda_absolute_y() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0xB9, 0xF0, 0x12]);
    cpu.write(0x1300, 0x77);
    cpu.set_y(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_indirect_x() {
    let mut cpu = setup_cpu();

    // LDA ($20,X) with X=4: pointer at 0x24 -> 0x4000
    cpu.load(0x8000, &[0xA1, 0x20]);
    cpu.write(0x0024, 0x00);
    cpu.write(0x0025, 0x40);
    cpu.write(0x4000, 0x99);
    cpu.set_x(0x04);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let mut cpu = setup_cpu();

    // Pointer at 0xFF: low byte from 0x00FF, high byte from 0x0000
    cpu.load(0x8000, &[0xA1, 0xFF]);
    cpu.write(0x00FF, 0x34);
    cpu.write(0x0000, 0x12);
    cpu.write(0x1234, 0x5A);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0xB6, 0x10]);
    cpu.write(0x0015, 0x42);
    cpu.set_y(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0xBC, 0x00, 0x30]);
    cpu.write(0x3001, 0xFE);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0xFE);
    assert!(cpu.flag_n());
}

// ========== Store Tests ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0x85, 0x40]);
    cpu.set_a(0x00);
    cpu.set_flag_z(false);

    cpu.step().unwrap();

    assert_eq!(cpu.read(0x0040), 0x00);
    // Stores never touch flags
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_sta_absolute_x() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0x9D, 0x00, 0x02]);
    cpu.set_a(0x11);
    cpu.set_x(0x08);

    cpu.step().unwrap();

    assert_eq!(cpu.read(0x0208), 0x11);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0x91, 0x30]);
    cpu.write(0x0030, 0x00);
    cpu.write(0x0031, 0x06);
    cpu.set_y(0x21);
    cpu.set_a(0xAB);

    cpu.step().unwrap();

    assert_eq!(cpu.read(0x0621), 0xAB);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0x96, 0xFF]);
    cpu.set_x(0x33);
    cpu.set_y(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.read(0x0001), 0x33);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();

    cpu.load(0x8000, &[0x8C, 0x00, 0x07]);
    cpu.set_y(0x44);

    cpu.step().unwrap();

    assert_eq!(cpu.read(0x0700), 0x44);
    assert_eq!(cpu.pc(), 0x8003);
}
