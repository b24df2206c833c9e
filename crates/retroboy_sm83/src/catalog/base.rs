use super::{AluOp, Cond, Indirect, Instruction, Op, Stack16, R16, R8};

/// Unprefixed opcode space. Opcode holes map to [`Op::Invalid`] with a zero
/// cost; `0xCB` maps to the escape entry whose cost is superseded by the
/// extended entry it selects.
pub static BASE: [Instruction; 256] = [
    // 0x00
    Instruction::new("NOP", Op::Nop, 1, 4),
    Instruction::new("LD BC, 0x%04X", Op::LdImm16(R16::Bc), 3, 12),
    Instruction::new("LD [BC], A", Op::StoreA(Indirect::Bc), 1, 8),
    Instruction::new("INC BC", Op::Inc16(R16::Bc), 1, 8),
    Instruction::new("INC B", Op::Inc(R8::B), 1, 4),
    Instruction::new("DEC B", Op::Dec(R8::B), 1, 4),
    Instruction::new("LD B, 0x%02X", Op::LdImm(R8::B), 2, 8),
    Instruction::new("RLCA", Op::Rlca, 1, 4),
    Instruction::new("LD [0x%04X], SP", Op::StoreSp, 3, 20),
    Instruction::new("ADD HL, BC", Op::AddHl(R16::Bc), 1, 8),
    Instruction::new("LD A, [BC]", Op::LoadA(Indirect::Bc), 1, 8),
    Instruction::new("DEC BC", Op::Dec16(R16::Bc), 1, 8),
    Instruction::new("INC C", Op::Inc(R8::C), 1, 4),
    Instruction::new("DEC C", Op::Dec(R8::C), 1, 4),
    Instruction::new("LD C, 0x%02X", Op::LdImm(R8::C), 2, 8),
    Instruction::new("RRCA", Op::Rrca, 1, 4),
    // 0x10
    Instruction::new("STOP", Op::Stop, 2, 4),
    Instruction::new("LD DE, 0x%04X", Op::LdImm16(R16::De), 3, 12),
    Instruction::new("LD [DE], A", Op::StoreA(Indirect::De), 1, 8),
    Instruction::new("INC DE", Op::Inc16(R16::De), 1, 8),
    Instruction::new("INC D", Op::Inc(R8::D), 1, 4),
    Instruction::new("DEC D", Op::Dec(R8::D), 1, 4),
    Instruction::new("LD D, 0x%02X", Op::LdImm(R8::D), 2, 8),
    Instruction::new("RLA", Op::Rla, 1, 4),
    Instruction::new("JR 0x%02X", Op::Jr, 2, 12),
    Instruction::new("ADD HL, DE", Op::AddHl(R16::De), 1, 8),
    Instruction::new("LD A, [DE]", Op::LoadA(Indirect::De), 1, 8),
    Instruction::new("DEC DE", Op::Dec16(R16::De), 1, 8),
    Instruction::new("INC E", Op::Inc(R8::E), 1, 4),
    Instruction::new("DEC E", Op::Dec(R8::E), 1, 4),
    Instruction::new("LD E, 0x%02X", Op::LdImm(R8::E), 2, 8),
    Instruction::new("RRA", Op::Rra, 1, 4),
    // 0x20
    Instruction::new("JR NZ, 0x%02X", Op::JrCc(Cond::Nz), 2, 8),
    Instruction::new("LD HL, 0x%04X", Op::LdImm16(R16::Hl), 3, 12),
    Instruction::new("LD [HL+], A", Op::StoreA(Indirect::HlInc), 1, 8),
    Instruction::new("INC HL", Op::Inc16(R16::Hl), 1, 8),
    Instruction::new("INC H", Op::Inc(R8::H), 1, 4),
    Instruction::new("DEC H", Op::Dec(R8::H), 1, 4),
    Instruction::new("LD H, 0x%02X", Op::LdImm(R8::H), 2, 8),
    Instruction::new("DAA", Op::Daa, 1, 4),
    Instruction::new("JR Z, 0x%02X", Op::JrCc(Cond::Z), 2, 8),
    Instruction::new("ADD HL, HL", Op::AddHl(R16::Hl), 1, 8),
    Instruction::new("LD A, [HL+]", Op::LoadA(Indirect::HlInc), 1, 8),
    Instruction::new("DEC HL", Op::Dec16(R16::Hl), 1, 8),
    Instruction::new("INC L", Op::Inc(R8::L), 1, 4),
    Instruction::new("DEC L", Op::Dec(R8::L), 1, 4),
    Instruction::new("LD L, 0x%02X", Op::LdImm(R8::L), 2, 8),
    Instruction::new("CPL", Op::Cpl, 1, 4),
    // 0x30
    Instruction::new("JR NC, 0x%02X", Op::JrCc(Cond::Nc), 2, 8),
    Instruction::new("LD SP, 0x%04X", Op::LdImm16(R16::Sp), 3, 12),
    Instruction::new("LD [HL-], A", Op::StoreA(Indirect::HlDec), 1, 8),
    Instruction::new("INC SP", Op::Inc16(R16::Sp), 1, 8),
    Instruction::new("INC [HL]", Op::Inc(R8::HlInd), 1, 12),
    Instruction::new("DEC [HL]", Op::Dec(R8::HlInd), 1, 12),
    Instruction::new("LD [HL], 0x%02X", Op::LdImm(R8::HlInd), 2, 12),
    Instruction::new("SCF", Op::Scf, 1, 4),
    Instruction::new("JR C, 0x%02X", Op::JrCc(Cond::C), 2, 8),
    Instruction::new("ADD HL, SP", Op::AddHl(R16::Sp), 1, 8),
    Instruction::new("LD A, [HL-]", Op::LoadA(Indirect::HlDec), 1, 8),
    Instruction::new("DEC SP", Op::Dec16(R16::Sp), 1, 8),
    Instruction::new("INC A", Op::Inc(R8::A), 1, 4),
    Instruction::new("DEC A", Op::Dec(R8::A), 1, 4),
    Instruction::new("LD A, 0x%02X", Op::LdImm(R8::A), 2, 8),
    Instruction::new("CCF", Op::Ccf, 1, 4),
    // 0x40
    Instruction::new("LD B, B", Op::Ld(R8::B, R8::B), 1, 4),
    Instruction::new("LD B, C", Op::Ld(R8::B, R8::C), 1, 4),
    Instruction::new("LD B, D", Op::Ld(R8::B, R8::D), 1, 4),
    Instruction::new("LD B, E", Op::Ld(R8::B, R8::E), 1, 4),
    Instruction::new("LD B, H", Op::Ld(R8::B, R8::H), 1, 4),
    Instruction::new("LD B, L", Op::Ld(R8::B, R8::L), 1, 4),
    Instruction::new("LD B, [HL]", Op::Ld(R8::B, R8::HlInd), 1, 8),
    Instruction::new("LD B, A", Op::Ld(R8::B, R8::A), 1, 4),
    Instruction::new("LD C, B", Op::Ld(R8::C, R8::B), 1, 4),
    Instruction::new("LD C, C", Op::Ld(R8::C, R8::C), 1, 4),
    Instruction::new("LD C, D", Op::Ld(R8::C, R8::D), 1, 4),
    Instruction::new("LD C, E", Op::Ld(R8::C, R8::E), 1, 4),
    Instruction::new("LD C, H", Op::Ld(R8::C, R8::H), 1, 4),
    Instruction::new("LD C, L", Op::Ld(R8::C, R8::L), 1, 4),
    Instruction::new("LD C, [HL]", Op::Ld(R8::C, R8::HlInd), 1, 8),
    Instruction::new("LD C, A", Op::Ld(R8::C, R8::A), 1, 4),
    // 0x50
    Instruction::new("LD D, B", Op::Ld(R8::D, R8::B), 1, 4),
    Instruction::new("LD D, C", Op::Ld(R8::D, R8::C), 1, 4),
    Instruction::new("LD D, D", Op::Ld(R8::D, R8::D), 1, 4),
    Instruction::new("LD D, E", Op::Ld(R8::D, R8::E), 1, 4),
    Instruction::new("LD D, H", Op::Ld(R8::D, R8::H), 1, 4),
    Instruction::new("LD D, L", Op::Ld(R8::D, R8::L), 1, 4),
    Instruction::new("LD D, [HL]", Op::Ld(R8::D, R8::HlInd), 1, 8),
    Instruction::new("LD D, A", Op::Ld(R8::D, R8::A), 1, 4),
    Instruction::new("LD E, B", Op::Ld(R8::E, R8::B), 1, 4),
    Instruction::new("LD E, C", Op::Ld(R8::E, R8::C), 1, 4),
    Instruction::new("LD E, D", Op::Ld(R8::E, R8::D), 1, 4),
    Instruction::new("LD E, E", Op::Ld(R8::E, R8::E), 1, 4),
    Instruction::new("LD E, H", Op::Ld(R8::E, R8::H), 1, 4),
    Instruction::new("LD E, L", Op::Ld(R8::E, R8::L), 1, 4),
    Instruction::new("LD E, [HL]", Op::Ld(R8::E, R8::HlInd), 1, 8),
    Instruction::new("LD E, A", Op::Ld(R8::E, R8::A), 1, 4),
    // 0x60
    Instruction::new("LD H, B", Op::Ld(R8::H, R8::B), 1, 4),
    Instruction::new("LD H, C", Op::Ld(R8::H, R8::C), 1, 4),
    Instruction::new("LD H, D", Op::Ld(R8::H, R8::D), 1, 4),
    Instruction::new("LD H, E", Op::Ld(R8::H, R8::E), 1, 4),
    Instruction::new("LD H, H", Op::Ld(R8::H, R8::H), 1, 4),
    Instruction::new("LD H, L", Op::Ld(R8::H, R8::L), 1, 4),
    Instruction::new("LD H, [HL]", Op::Ld(R8::H, R8::HlInd), 1, 8),
    Instruction::new("LD H, A", Op::Ld(R8::H, R8::A), 1, 4),
    Instruction::new("LD L, B", Op::Ld(R8::L, R8::B), 1, 4),
    Instruction::new("LD L, C", Op::Ld(R8::L, R8::C), 1, 4),
    Instruction::new("LD L, D", Op::Ld(R8::L, R8::D), 1, 4),
    Instruction::new("LD L, E", Op::Ld(R8::L, R8::E), 1, 4),
    Instruction::new("LD L, H", Op::Ld(R8::L, R8::H), 1, 4),
    Instruction::new("LD L, L", Op::Ld(R8::L, R8::L), 1, 4),
    Instruction::new("LD L, [HL]", Op::Ld(R8::L, R8::HlInd), 1, 8),
    Instruction::new("LD L, A", Op::Ld(R8::L, R8::A), 1, 4),
    // 0x70
    Instruction::new("LD [HL], B", Op::Ld(R8::HlInd, R8::B), 1, 8),
    Instruction::new("LD [HL], C", Op::Ld(R8::HlInd, R8::C), 1, 8),
    Instruction::new("LD [HL], D", Op::Ld(R8::HlInd, R8::D), 1, 8),
    Instruction::new("LD [HL], E", Op::Ld(R8::HlInd, R8::E), 1, 8),
    Instruction::new("LD [HL], H", Op::Ld(R8::HlInd, R8::H), 1, 8),
    Instruction::new("LD [HL], L", Op::Ld(R8::HlInd, R8::L), 1, 8),
    Instruction::new("HALT", Op::Halt, 1, 4),
    Instruction::new("LD [HL], A", Op::Ld(R8::HlInd, R8::A), 1, 8),
    Instruction::new("LD A, B", Op::Ld(R8::A, R8::B), 1, 4),
    Instruction::new("LD A, C", Op::Ld(R8::A, R8::C), 1, 4),
    Instruction::new("LD A, D", Op::Ld(R8::A, R8::D), 1, 4),
    Instruction::new("LD A, E", Op::Ld(R8::A, R8::E), 1, 4),
    Instruction::new("LD A, H", Op::Ld(R8::A, R8::H), 1, 4),
    Instruction::new("LD A, L", Op::Ld(R8::A, R8::L), 1, 4),
    Instruction::new("LD A, [HL]", Op::Ld(R8::A, R8::HlInd), 1, 8),
    Instruction::new("LD A, A", Op::Ld(R8::A, R8::A), 1, 4),
    // 0x80
    Instruction::new("ADD A, B", Op::Alu(AluOp::Add, R8::B), 1, 4),
    Instruction::new("ADD A, C", Op::Alu(AluOp::Add, R8::C), 1, 4),
    Instruction::new("ADD A, D", Op::Alu(AluOp::Add, R8::D), 1, 4),
    Instruction::new("ADD A, E", Op::Alu(AluOp::Add, R8::E), 1, 4),
    Instruction::new("ADD A, H", Op::Alu(AluOp::Add, R8::H), 1, 4),
    Instruction::new("ADD A, L", Op::Alu(AluOp::Add, R8::L), 1, 4),
    Instruction::new("ADD A, [HL]", Op::Alu(AluOp::Add, R8::HlInd), 1, 8),
    Instruction::new("ADD A, A", Op::Alu(AluOp::Add, R8::A), 1, 4),
    Instruction::new("ADC A, B", Op::Alu(AluOp::Adc, R8::B), 1, 4),
    Instruction::new("ADC A, C", Op::Alu(AluOp::Adc, R8::C), 1, 4),
    Instruction::new("ADC A, D", Op::Alu(AluOp::Adc, R8::D), 1, 4),
    Instruction::new("ADC A, E", Op::Alu(AluOp::Adc, R8::E), 1, 4),
    Instruction::new("ADC A, H", Op::Alu(AluOp::Adc, R8::H), 1, 4),
    Instruction::new("ADC A, L", Op::Alu(AluOp::Adc, R8::L), 1, 4),
    Instruction::new("ADC A, [HL]", Op::Alu(AluOp::Adc, R8::HlInd), 1, 8),
    Instruction::new("ADC A, A", Op::Alu(AluOp::Adc, R8::A), 1, 4),
    // 0x90
    Instruction::new("SUB B", Op::Alu(AluOp::Sub, R8::B), 1, 4),
    Instruction::new("SUB C", Op::Alu(AluOp::Sub, R8::C), 1, 4),
    Instruction::new("SUB D", Op::Alu(AluOp::Sub, R8::D), 1, 4),
    Instruction::new("SUB E", Op::Alu(AluOp::Sub, R8::E), 1, 4),
    Instruction::new("SUB H", Op::Alu(AluOp::Sub, R8::H), 1, 4),
    Instruction::new("SUB L", Op::Alu(AluOp::Sub, R8::L), 1, 4),
    Instruction::new("SUB [HL]", Op::Alu(AluOp::Sub, R8::HlInd), 1, 8),
    Instruction::new("SUB A", Op::Alu(AluOp::Sub, R8::A), 1, 4),
    Instruction::new("SBC A, B", Op::Alu(AluOp::Sbc, R8::B), 1, 4),
    Instruction::new("SBC A, C", Op::Alu(AluOp::Sbc, R8::C), 1, 4),
    Instruction::new("SBC A, D", Op::Alu(AluOp::Sbc, R8::D), 1, 4),
    Instruction::new("SBC A, E", Op::Alu(AluOp::Sbc, R8::E), 1, 4),
    Instruction::new("SBC A, H", Op::Alu(AluOp::Sbc, R8::H), 1, 4),
    Instruction::new("SBC A, L", Op::Alu(AluOp::Sbc, R8::L), 1, 4),
    Instruction::new("SBC A, [HL]", Op::Alu(AluOp::Sbc, R8::HlInd), 1, 8),
    Instruction::new("SBC A, A", Op::Alu(AluOp::Sbc, R8::A), 1, 4),
    // 0xA0
    Instruction::new("AND A, B", Op::Alu(AluOp::And, R8::B), 1, 4),
    Instruction::new("AND A, C", Op::Alu(AluOp::And, R8::C), 1, 4),
    Instruction::new("AND A, D", Op::Alu(AluOp::And, R8::D), 1, 4),
    Instruction::new("AND A, E", Op::Alu(AluOp::And, R8::E), 1, 4),
    Instruction::new("AND A, H", Op::Alu(AluOp::And, R8::H), 1, 4),
    Instruction::new("AND A, L", Op::Alu(AluOp::And, R8::L), 1, 4),
    Instruction::new("AND A, [HL]", Op::Alu(AluOp::And, R8::HlInd), 1, 8),
    Instruction::new("AND A, A", Op::Alu(AluOp::And, R8::A), 1, 4),
    Instruction::new("XOR A, B", Op::Alu(AluOp::Xor, R8::B), 1, 4),
    Instruction::new("XOR A, C", Op::Alu(AluOp::Xor, R8::C), 1, 4),
    Instruction::new("XOR A, D", Op::Alu(AluOp::Xor, R8::D), 1, 4),
    Instruction::new("XOR A, E", Op::Alu(AluOp::Xor, R8::E), 1, 4),
    Instruction::new("XOR A, H", Op::Alu(AluOp::Xor, R8::H), 1, 4),
    Instruction::new("XOR A, L", Op::Alu(AluOp::Xor, R8::L), 1, 4),
    Instruction::new("XOR A, [HL]", Op::Alu(AluOp::Xor, R8::HlInd), 1, 8),
    Instruction::new("XOR A, A", Op::Alu(AluOp::Xor, R8::A), 1, 4),
    // 0xB0
    Instruction::new("OR A, B", Op::Alu(AluOp::Or, R8::B), 1, 4),
    Instruction::new("OR A, C", Op::Alu(AluOp::Or, R8::C), 1, 4),
    Instruction::new("OR A, D", Op::Alu(AluOp::Or, R8::D), 1, 4),
    Instruction::new("OR A, E", Op::Alu(AluOp::Or, R8::E), 1, 4),
    Instruction::new("OR A, H", Op::Alu(AluOp::Or, R8::H), 1, 4),
    Instruction::new("OR A, L", Op::Alu(AluOp::Or, R8::L), 1, 4),
    Instruction::new("OR A, [HL]", Op::Alu(AluOp::Or, R8::HlInd), 1, 8),
    Instruction::new("OR A, A", Op::Alu(AluOp::Or, R8::A), 1, 4),
    Instruction::new("CP A, B", Op::Alu(AluOp::Cp, R8::B), 1, 4),
    Instruction::new("CP A, C", Op::Alu(AluOp::Cp, R8::C), 1, 4),
    Instruction::new("CP A, D", Op::Alu(AluOp::Cp, R8::D), 1, 4),
    Instruction::new("CP A, E", Op::Alu(AluOp::Cp, R8::E), 1, 4),
    Instruction::new("CP A, H", Op::Alu(AluOp::Cp, R8::H), 1, 4),
    Instruction::new("CP A, L", Op::Alu(AluOp::Cp, R8::L), 1, 4),
    Instruction::new("CP A, [HL]", Op::Alu(AluOp::Cp, R8::HlInd), 1, 8),
    Instruction::new("CP A, A", Op::Alu(AluOp::Cp, R8::A), 1, 4),
    // 0xC0
    Instruction::new("RET NZ", Op::RetCc(Cond::Nz), 1, 8),
    Instruction::new("POP BC", Op::Pop(Stack16::Bc), 1, 12),
    Instruction::new("JP NZ, 0x%04X", Op::JpCc(Cond::Nz), 3, 12),
    Instruction::new("JP 0x%04X", Op::Jp, 3, 16),
    Instruction::new("CALL NZ, 0x%04X", Op::CallCc(Cond::Nz), 3, 12),
    Instruction::new("PUSH BC", Op::Push(Stack16::Bc), 1, 16),
    Instruction::new("ADD A, 0x%02X", Op::AluImm(AluOp::Add), 2, 8),
    Instruction::new("RST 0x00", Op::Rst(0x00), 1, 16),
    Instruction::new("RET Z", Op::RetCc(Cond::Z), 1, 8),
    Instruction::new("RET", Op::Ret, 1, 16),
    Instruction::new("JP Z, 0x%04X", Op::JpCc(Cond::Z), 3, 12),
    Instruction::new("PREFIX CB", Op::Prefix, 1, 4),
    Instruction::new("CALL Z, 0x%04X", Op::CallCc(Cond::Z), 3, 12),
    Instruction::new("CALL 0x%04X", Op::Call, 3, 24),
    Instruction::new("ADC A, 0x%02X", Op::AluImm(AluOp::Adc), 2, 8),
    Instruction::new("RST 0x08", Op::Rst(0x08), 1, 16),
    // 0xD0
    Instruction::new("RET NC", Op::RetCc(Cond::Nc), 1, 8),
    Instruction::new("POP DE", Op::Pop(Stack16::De), 1, 12),
    Instruction::new("JP NC, 0x%04X", Op::JpCc(Cond::Nc), 3, 12),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("CALL NC, 0x%04X", Op::CallCc(Cond::Nc), 3, 12),
    Instruction::new("PUSH DE", Op::Push(Stack16::De), 1, 16),
    Instruction::new("SUB A, 0x%02X", Op::AluImm(AluOp::Sub), 2, 8),
    Instruction::new("RST 0x10", Op::Rst(0x10), 1, 16),
    Instruction::new("RET C", Op::RetCc(Cond::C), 1, 8),
    Instruction::new("RETI", Op::Reti, 1, 16),
    Instruction::new("JP C, 0x%04X", Op::JpCc(Cond::C), 3, 12),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("CALL C, 0x%04X", Op::CallCc(Cond::C), 3, 12),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("SBC A, 0x%02X", Op::AluImm(AluOp::Sbc), 2, 8),
    Instruction::new("RST 0x18", Op::Rst(0x18), 1, 16),
    // 0xE0
    Instruction::new("LDH [0x%02X], A", Op::StoreHighImm, 2, 12),
    Instruction::new("POP HL", Op::Pop(Stack16::Hl), 1, 12),
    Instruction::new("LDH [C], A", Op::StoreHighC, 1, 8),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("PUSH HL", Op::Push(Stack16::Hl), 1, 16),
    Instruction::new("AND A, 0x%02X", Op::AluImm(AluOp::And), 2, 8),
    Instruction::new("RST 0x20", Op::Rst(0x20), 1, 16),
    Instruction::new("ADD SP, 0x%02X", Op::AddSpImm, 2, 16),
    Instruction::new("JP HL", Op::JpHl, 1, 4),
    Instruction::new("LD [0x%04X], A", Op::StoreAbs, 3, 16),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("XOR A, 0x%02X", Op::AluImm(AluOp::Xor), 2, 8),
    Instruction::new("RST 0x28", Op::Rst(0x28), 1, 16),
    // 0xF0
    Instruction::new("LDH A, [0x%02X]", Op::LoadHighImm, 2, 12),
    Instruction::new("POP AF", Op::Pop(Stack16::Af), 1, 12),
    Instruction::new("LDH A, [C]", Op::LoadHighC, 1, 8),
    Instruction::new("DI", Op::Di, 1, 4),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("PUSH AF", Op::Push(Stack16::Af), 1, 16),
    Instruction::new("OR A, 0x%02X", Op::AluImm(AluOp::Or), 2, 8),
    Instruction::new("RST 0x30", Op::Rst(0x30), 1, 16),
    Instruction::new("LD HL, SP+0x%02X", Op::LdHlSpImm, 2, 12),
    Instruction::new("LD SP, HL", Op::LdSpHl, 1, 8),
    Instruction::new("LD A, [0x%04X]", Op::LoadAbs, 3, 16),
    Instruction::new("EI", Op::Ei, 1, 4),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("INVALID", Op::Invalid, 1, 0),
    Instruction::new("CP A, 0x%02X", Op::AluImm(AluOp::Cp), 2, 8),
    Instruction::new("RST 0x38", Op::Rst(0x38), 1, 16),
];
