use super::alu::ShiftOp;
use super::*;

/// Flat 64 KiB memory with IE/IF mapped at their usual addresses.
struct TestBus {
    memory: [u8; 0x10000],
    cycles: u64,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
            cycles: 0,
        }
    }
}

impl TestBus {
    fn with_program(origin: u16, program: &[u8]) -> Self {
        let mut bus = Self::default();
        let start = origin as usize;
        bus.memory[start..start + program.len()].copy_from_slice(program);
        bus
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn clock(&mut self, cycles: u32) {
        self.cycles += u64::from(cycles);
    }

    fn interrupt_enable(&self) -> u8 {
        self.memory[0xFFFF]
    }

    fn interrupt_flag(&self) -> u8 {
        self.memory[0xFF0F] & 0x1F
    }

    fn set_interrupt_flag(&mut self, value: u8) {
        self.memory[0xFF0F] = value & 0x1F;
    }
}

fn cpu_at(pc: u16) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.regs.pc = pc;
    cpu
}

#[test]
fn post_boot_register_state() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);

    let cold = Cpu::power_on();
    assert_eq!(cold.regs, Registers::default());
}

#[test]
fn nop_advances_pc_and_clocks_bus() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    let cycles = cpu.step(&mut bus).unwrap();

    assert_eq!(cycles, 4);
    assert_eq!(bus.cycles, 4);
    assert_eq!(cpu.regs.pc, 0x0001);
}

#[test]
fn add_then_sub_restores_operand_with_matching_carries() {
    let mut cpu = Cpu::new();

    for a in 0..=255u8 {
        for b in 0..=255u8 {
            cpu.regs.a = a;
            cpu.alu_add(b, false);
            let add_h = cpu.get_flag(Flag::H);
            let add_c = cpu.get_flag(Flag::C);

            cpu.alu_sub(b, false);
            assert_eq!(cpu.regs.a, a, "a={a:#04x} b={b:#04x}");
            // The borrow out of the subtract mirrors the carry out of the add.
            assert_eq!(cpu.get_flag(Flag::H), add_h, "a={a:#04x} b={b:#04x}");
            assert_eq!(cpu.get_flag(Flag::C), add_c, "a={a:#04x} b={b:#04x}");
            assert!(cpu.get_flag(Flag::N));
        }
    }
}

#[test]
fn swap_is_an_involution() {
    let mut cpu = Cpu::new();
    for n in 0..=255u8 {
        let once = cpu.alu_shift(ShiftOp::Swap, n);
        assert_eq!(once, n.rotate_left(4));
        assert_eq!(cpu.alu_shift(ShiftOp::Swap, once), n);
    }
}

#[test]
fn swap_a_through_cb_prefix() {
    // SWAP A
    let mut bus = TestBus::with_program(0x0100, &[0xCB, 0x37]);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0xF0;
    cpu.set_flag(Flag::C, true);

    let cycles = cpu.step(&mut bus).unwrap();

    assert_eq!(cycles, 8);
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn push_then_pop_yields_same_value_for_every_word() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();

    for v in 0..=0xFFFFu16 {
        cpu.regs.sp = 0xDFF0;
        cpu.push_u16(&mut bus, v);
        assert_eq!(cpu.regs.sp, 0xDFEE);
        // Little-endian in memory.
        assert_eq!(bus.memory[0xDFEE], v as u8);
        assert_eq!(bus.memory[0xDFEF], (v >> 8) as u8);

        assert_eq!(cpu.pop_u16(&mut bus), v);
        assert_eq!(cpu.regs.sp, 0xDFF0);
    }
}

#[test]
fn push_and_pop_instructions_and_pop_af_masks_low_flags() {
    // PUSH BC; POP DE; POP AF
    let mut bus = TestBus::with_program(0x0100, &[0xC5, 0xD1, 0xF1]);
    let mut cpu = Cpu::new();
    cpu.regs.sp = 0xFFFE;
    cpu.regs.set_bc(0x1234);

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(cpu.regs.sp, 0xFFFC);

    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);

    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x3F;
    bus.memory[0xFFFD] = 0x12;

    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0x30);
}

#[test]
fn vblank_interrupt_is_dispatched_in_one_step() {
    let mut cpu = cpu_at(0x0150);
    let mut bus = TestBus::default();
    cpu.regs.sp = 0xFFFE;
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;

    let cycles = cpu.step(&mut bus).unwrap();

    assert_eq!(cycles, 20);
    assert_eq!(bus.cycles, 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x50);
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert!(!cpu.ime);
    assert_eq!(bus.interrupt_flag(), 0x00);
}

#[test]
fn interrupts_are_serviced_in_priority_order() {
    let mut cpu = cpu_at(0x0200);
    let mut bus = TestBus::default();
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x1F;
    // Timer and joypad both pending; timer wins.
    bus.memory[0xFF0F] = 0x14;

    cpu.step(&mut bus).unwrap();

    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.interrupt_flag(), 0x10);
}

#[test]
fn masked_interrupt_is_not_serviced() {
    let mut cpu = cpu_at(0x0200);
    let mut bus = TestBus::default();
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x00;
    bus.memory[0xFF0F] = 0x01;

    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.regs.pc, 0x0201);
    assert_eq!(bus.interrupt_flag(), 0x01);
}

#[test]
fn inc_a_wraps_and_leaves_carry_alone() {
    for carry in [true, false] {
        // INC A
        let mut bus = TestBus::with_program(0x0100, &[0x3C]);
        let mut cpu = Cpu::new();
        cpu.regs.a = 0xFF;
        cpu.set_flag(Flag::C, carry);

        assert_eq!(cpu.step(&mut bus), Ok(4));
        assert_eq!(cpu.regs.a, 0x00);
        assert!(cpu.get_flag(Flag::Z));
        assert!(cpu.get_flag(Flag::H));
        assert!(!cpu.get_flag(Flag::N));
        assert_eq!(cpu.get_flag(Flag::C), carry);
    }
}

#[test]
fn inc_dec_hl_memory() {
    // INC (HL); DEC (HL)
    let mut bus = TestBus::with_program(0x0100, &[0x34, 0x35]);
    let mut cpu = Cpu::new();
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x0F;

    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(bus.memory[0xC000], 0x10);
    assert!(cpu.get_flag(Flag::H));

    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(bus.memory[0xC000], 0x0F);
    assert!(cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));
}

#[test]
fn illegal_opcode_locks_the_cpu() {
    let mut bus = TestBus::with_program(0x0100, &[0xD3, 0x00]);
    let mut cpu = Cpu::new();

    let err = cpu.step(&mut bus).unwrap_err();
    assert_eq!(
        err,
        CpuError::IllegalOpcode {
            addr: 0x0100,
            opcode: 0xD3
        }
    );
    assert_eq!(err.to_string(), "illegal opcode 0xD3 at 0x0100");
    assert_eq!(bus.cycles, 0);

    let pc = cpu.regs.pc;
    assert_eq!(cpu.step(&mut bus), Err(err));
    assert_eq!(cpu.regs.pc, pc);
    assert_eq!(cpu.locked(), Some(err));

    cpu.reset();
    assert_eq!(cpu.locked(), None);
}

#[test]
fn every_unused_slot_is_rejected() {
    for opcode in [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ] {
        let mut bus = TestBus::with_program(0x0100, &[opcode]);
        let mut cpu = Cpu::new();
        assert_eq!(
            cpu.step(&mut bus),
            Err(CpuError::IllegalOpcode {
                addr: 0x0100,
                opcode
            })
        );
    }
}

#[test]
fn ei_takes_effect_after_the_next_instruction() {
    // EI; NOP; NOP
    let mut bus = TestBus::with_program(0x0100, &[0xFB, 0x00, 0x00]);
    let mut cpu = Cpu::new();
    bus.memory[0xFFFF] = 0x04;
    bus.memory[0xFF0F] = 0x04;

    cpu.step(&mut bus).unwrap();
    assert!(!cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0101);

    cpu.step(&mut bus).unwrap();
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0102);

    // Now the pending timer interrupt is taken.
    assert_eq!(cpu.step(&mut bus), Ok(20));
    assert_eq!(cpu.regs.pc, 0x0050);
}

#[test]
fn di_cancels_a_pending_ei() {
    // EI; DI; NOP
    let mut bus = TestBus::with_program(0x0100, &[0xFB, 0xF3, 0x00]);
    let mut cpu = Cpu::new();

    for _ in 0..3 {
        cpu.step(&mut bus).unwrap();
    }
    assert!(!cpu.ime);
}

#[test]
fn reti_enables_ime_immediately() {
    // RETI
    let mut bus = TestBus::with_program(0x0040, &[0xD9]);
    let mut cpu = cpu_at(0x0040);
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x34;
    bus.memory[0xFFFD] = 0x12;

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn halt_idles_until_an_interrupt_is_pending() {
    // HALT; INC A
    let mut bus = TestBus::with_program(0x0100, &[0x76, 0x3C]);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x00;
    bus.memory[0xFFFF] = 0x01;

    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert!(cpu.halted);

    for _ in 0..3 {
        assert_eq!(cpu.step(&mut bus), Ok(4));
        assert_eq!(cpu.regs.pc, 0x0101);
    }

    // IME is off: the CPU wakes and carries on without dispatching.
    bus.memory[0xFF0F] = 0x01;
    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert_eq!(bus.interrupt_flag(), 0x01);
}

#[test]
fn halt_with_ime_dispatches_the_interrupt() {
    let mut bus = TestBus::with_program(0x0100, &[0x76]);
    let mut cpu = Cpu::new();
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x02;

    cpu.step(&mut bus).unwrap();
    assert!(cpu.halted);

    bus.memory[0xFF0F] = 0x02;
    assert_eq!(cpu.step(&mut bus), Ok(20));
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0048);
    // Return address is the instruction after HALT.
    assert_eq!(bus.memory[cpu.regs.sp as usize], 0x01);
    assert_eq!(bus.memory[cpu.regs.sp as usize + 1], 0x01);
}

#[test]
fn stop_consumes_padding_and_waits_for_input() {
    // STOP 0x00; INC A
    let mut bus = TestBus::with_program(0x0100, &[0x10, 0x00, 0x3C]);
    let mut cpu = Cpu::new();
    bus.memory[0xFF00] = 0xFF;

    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert!(cpu.stopped);
    assert_eq!(cpu.regs.pc, 0x0102);

    let clocked = bus.cycles;
    assert_eq!(cpu.step(&mut bus), Ok(0));
    assert_eq!(bus.cycles, clocked);
    assert!(cpu.stopped);

    // A selected line pulled low.
    bus.memory[0xFF00] = 0xEE;
    assert_eq!(cpu.step(&mut bus), Ok(0));
    assert!(!cpu.stopped);

    let a = cpu.regs.a;
    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.regs.a, a.wrapping_add(1));
}

#[test]
fn conditional_branches_cost_more_when_taken() {
    // JR NZ,+2 ; JR NZ,+2
    let mut bus = TestBus::with_program(0x0100, &[0x20, 0x02, 0x20, 0x02]);
    let mut cpu = Cpu::new();

    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.pc, 0x0102);

    cpu.set_flag(Flag::Z, false);
    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.regs.pc, 0x0106);

    // JP C,a16
    let mut bus = TestBus::with_program(0x0100, &[0xDA, 0x00, 0x20, 0xDA, 0x00, 0x20]);
    let mut cpu = Cpu::new();
    cpu.set_flag(Flag::C, false);
    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.regs.pc, 0x0103);
    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(cpu.regs.pc, 0x2000);

    // CALL Z,a16 then RET NZ / RET Z at the target.
    let mut bus = TestBus::with_program(0x0100, &[0xCC, 0x00, 0x30]);
    bus.memory[0x3000] = 0xC0;
    bus.memory[0x3001] = 0xC8;
    let mut cpu = Cpu::new();
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus), Ok(24));
    assert_eq!(cpu.regs.pc, 0x3000);
    assert_eq!(cpu.regs.sp, 0xFFFC);

    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.pc, 0x3001);

    assert_eq!(cpu.step(&mut bus), Ok(20));
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn jr_backwards_and_rst() {
    // JR -2 loops on itself.
    let mut bus = TestBus::with_program(0x0200, &[0x18, 0xFE]);
    let mut cpu = cpu_at(0x0200);
    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.regs.pc, 0x0200);

    // RST 38h
    let mut bus = TestBus::with_program(0x0200, &[0xFF]);
    let mut cpu = cpu_at(0x0200);
    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(cpu.regs.pc, 0x0038);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x01);
    assert_eq!(bus.memory[0xFFFD], 0x02);
}

#[test]
fn ld_forms_and_cycle_counts() {
    // LD BC,0x1234; LD (BC),A; LD A,(BC); LD (HL+),A; LD (a16),SP; LDH (a8),A
    let program = [
        0x01, 0x34, 0x12, 0x02, 0x0A, 0x22, 0x08, 0x00, 0xC1, 0xE0, 0x80,
    ];
    let mut bus = TestBus::with_program(0x0100, &program);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0xAB;
    cpu.regs.set_hl(0xC010);
    cpu.regs.sp = 0xBEEF;

    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.regs.bc(), 0x1234);

    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(bus.memory[0x1234], 0xAB);

    cpu.regs.a = 0;
    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.a, 0xAB);

    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(bus.memory[0xC010], 0xAB);
    assert_eq!(cpu.regs.hl(), 0xC011);

    assert_eq!(cpu.step(&mut bus), Ok(20));
    assert_eq!(bus.memory[0xC100], 0xEF);
    assert_eq!(bus.memory[0xC101], 0xBE);

    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(bus.memory[0xFF80], 0xAB);
}

#[test]
fn ld_r_r_covers_hl_source_and_destination() {
    // LD B,A; LD (HL),B; LD C,(HL)
    let mut bus = TestBus::with_program(0x0100, &[0x47, 0x70, 0x4E]);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x5A;
    cpu.regs.set_hl(0xC200);

    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.regs.b, 0x5A);
    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(bus.memory[0xC200], 0x5A);
    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.c, 0x5A);
}

#[test]
fn add_hl_and_sp_relative_arithmetic() {
    // ADD HL,BC; ADD SP,+8; LD HL,SP-1
    let mut bus = TestBus::with_program(0x0100, &[0x09, 0xE8, 0x08, 0xF8, 0xFF]);
    let mut cpu = Cpu::new();
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.set_flag(Flag::Z, true);

    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
    // Z untouched by 16-bit add.
    assert!(cpu.get_flag(Flag::Z));

    cpu.regs.sp = 0xFFF8;
    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(cpu.regs.sp, 0x0000);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));

    cpu.regs.sp = 0x0001;
    assert_eq!(cpu.step(&mut bus), Ok(12));
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.regs.sp, 0x0001);
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn daa_corrects_bcd_addition_and_subtraction() {
    // ADD A,0x38; DAA; SUB 0x05; DAA
    let mut bus = TestBus::with_program(0x0100, &[0xC6, 0x38, 0x27, 0xD6, 0x05, 0x27]);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x45;

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.regs.a, 0x83);
    assert!(!cpu.get_flag(Flag::C));

    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x78);
    assert!(cpu.get_flag(Flag::N));
}

#[test]
fn cpl_scf_ccf() {
    // CPL; SCF; CCF
    let mut bus = TestBus::with_program(0x0100, &[0x2F, 0x37, 0x3F]);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x35;

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0xCA);
    assert!(cpu.get_flag(Flag::N) && cpu.get_flag(Flag::H));

    cpu.step(&mut bus).unwrap();
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::N) && !cpu.get_flag(Flag::H));

    cpu.step(&mut bus).unwrap();
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn rotate_a_clears_zero() {
    // RLCA; RRA
    let mut bus = TestBus::with_program(0x0100, &[0x07, 0x1F]);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x80;

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));

    cpu.regs.a = 0x01;
    cpu.set_flag(Flag::C, false);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn cb_register_and_hl_forms() {
    // RLC B; BIT 5,H; BIT 0,(HL); RES 0,(HL); SET 7,(HL); SRL (HL)
    let program = [0xCB, 0x00, 0xCB, 0x6C, 0xCB, 0x46, 0xCB, 0x86, 0xCB, 0xFE, 0xCB, 0x3E];
    let mut bus = TestBus::with_program(0x0100, &program);
    let mut cpu = Cpu::new();
    cpu.regs.b = 0x85;
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x01;

    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert_eq!(cpu.regs.b, 0x0B);
    assert!(cpu.get_flag(Flag::C));

    assert_eq!(cpu.step(&mut bus), Ok(8));
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert!(!cpu.get_flag(Flag::Z));

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(bus.memory[0xC000], 0x00);

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(bus.memory[0xC000], 0x80);

    assert_eq!(cpu.step(&mut bus), Ok(16));
    assert_eq!(bus.memory[0xC000], 0x40);
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn logic_ops_set_expected_flags() {
    let mut cpu = Cpu::new();

    cpu.regs.a = 0xF0;
    cpu.alu_and(0x0F);
    assert_eq!(cpu.regs.a, 0);
    assert!(cpu.get_flag(Flag::Z) && cpu.get_flag(Flag::H));

    cpu.regs.a = 0xF0;
    cpu.alu_or(0x0F);
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.regs.f, 0x00);

    cpu.alu_xor(0xFF);
    assert_eq!(cpu.regs.a, 0);
    assert_eq!(cpu.regs.f, 0x80);

    cpu.regs.a = 0x10;
    cpu.alu_cp(0x20);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.get_flag(Flag::C) && cpu.get_flag(Flag::N));
}

#[test]
fn adc_and_sbc_use_carry_in() {
    let mut cpu = Cpu::new();

    cpu.regs.a = 0x0F;
    cpu.set_flag(Flag::C, true);
    cpu.alu_add(0x00, true);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.get_flag(Flag::H));

    cpu.regs.a = 0x10;
    cpu.set_flag(Flag::C, true);
    cpu.alu_sub(0x0F, true);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn bit_hl_costs_sixteen_cycles_for_every_bit() {
    for bit in 0..8u8 {
        // BIT b,(HL)
        let mut bus = TestBus::with_program(0x0100, &[0xCB, 0x46 | (bit << 3)]);
        let mut cpu = Cpu::new();
        cpu.regs.set_hl(0xC000);
        bus.memory[0xC000] = 1 << bit;

        assert_eq!(cpu.step(&mut bus), Ok(16), "bit {bit}");
        assert_eq!(bus.cycles, 16);
        assert!(!cpu.get_flag(Flag::Z));
        assert_eq!(bus.memory[0xC000], 1 << bit);
    }
}

#[test]
fn rrca_and_rla_pick_their_shift() {
    // RRCA; RLA
    let mut bus = TestBus::with_program(0x0100, &[0x0F, 0x17]);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x01;
    cpu.set_flag(Flag::C, false);

    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.get_flag(Flag::C));

    cpu.regs.a = 0x40;
    assert_eq!(cpu.step(&mut bus), Ok(4));
    assert_eq!(cpu.regs.a, 0x81);
    assert!(!cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
}
