use super::{Instruction, Op, ShiftOp, R8};

/// Opcode space selected by the `0xCB` escape byte. Lengths and costs
/// include the escape byte.
pub static EXTENDED: [Instruction; 256] = [
    // 0x00
    Instruction::new("RLC B", Op::Shift(ShiftOp::Rlc, R8::B), 2, 8),
    Instruction::new("RLC C", Op::Shift(ShiftOp::Rlc, R8::C), 2, 8),
    Instruction::new("RLC D", Op::Shift(ShiftOp::Rlc, R8::D), 2, 8),
    Instruction::new("RLC E", Op::Shift(ShiftOp::Rlc, R8::E), 2, 8),
    Instruction::new("RLC H", Op::Shift(ShiftOp::Rlc, R8::H), 2, 8),
    Instruction::new("RLC L", Op::Shift(ShiftOp::Rlc, R8::L), 2, 8),
    Instruction::new("RLC [HL]", Op::Shift(ShiftOp::Rlc, R8::HlInd), 2, 16),
    Instruction::new("RLC A", Op::Shift(ShiftOp::Rlc, R8::A), 2, 8),
    Instruction::new("RRC B", Op::Shift(ShiftOp::Rrc, R8::B), 2, 8),
    Instruction::new("RRC C", Op::Shift(ShiftOp::Rrc, R8::C), 2, 8),
    Instruction::new("RRC D", Op::Shift(ShiftOp::Rrc, R8::D), 2, 8),
    Instruction::new("RRC E", Op::Shift(ShiftOp::Rrc, R8::E), 2, 8),
    Instruction::new("RRC H", Op::Shift(ShiftOp::Rrc, R8::H), 2, 8),
    Instruction::new("RRC L", Op::Shift(ShiftOp::Rrc, R8::L), 2, 8),
    Instruction::new("RRC [HL]", Op::Shift(ShiftOp::Rrc, R8::HlInd), 2, 16),
    Instruction::new("RRC A", Op::Shift(ShiftOp::Rrc, R8::A), 2, 8),
    // 0x10
    Instruction::new("RL B", Op::Shift(ShiftOp::Rl, R8::B), 2, 8),
    Instruction::new("RL C", Op::Shift(ShiftOp::Rl, R8::C), 2, 8),
    Instruction::new("RL D", Op::Shift(ShiftOp::Rl, R8::D), 2, 8),
    Instruction::new("RL E", Op::Shift(ShiftOp::Rl, R8::E), 2, 8),
    Instruction::new("RL H", Op::Shift(ShiftOp::Rl, R8::H), 2, 8),
    Instruction::new("RL L", Op::Shift(ShiftOp::Rl, R8::L), 2, 8),
    Instruction::new("RL [HL]", Op::Shift(ShiftOp::Rl, R8::HlInd), 2, 16),
    Instruction::new("RL A", Op::Shift(ShiftOp::Rl, R8::A), 2, 8),
    Instruction::new("RR B", Op::Shift(ShiftOp::Rr, R8::B), 2, 8),
    Instruction::new("RR C", Op::Shift(ShiftOp::Rr, R8::C), 2, 8),
    Instruction::new("RR D", Op::Shift(ShiftOp::Rr, R8::D), 2, 8),
    Instruction::new("RR E", Op::Shift(ShiftOp::Rr, R8::E), 2, 8),
    Instruction::new("RR H", Op::Shift(ShiftOp::Rr, R8::H), 2, 8),
    Instruction::new("RR L", Op::Shift(ShiftOp::Rr, R8::L), 2, 8),
    Instruction::new("RR [HL]", Op::Shift(ShiftOp::Rr, R8::HlInd), 2, 16),
    Instruction::new("RR A", Op::Shift(ShiftOp::Rr, R8::A), 2, 8),
    // 0x20
    Instruction::new("SLA B", Op::Shift(ShiftOp::Sla, R8::B), 2, 8),
    Instruction::new("SLA C", Op::Shift(ShiftOp::Sla, R8::C), 2, 8),
    Instruction::new("SLA D", Op::Shift(ShiftOp::Sla, R8::D), 2, 8),
    Instruction::new("SLA E", Op::Shift(ShiftOp::Sla, R8::E), 2, 8),
    Instruction::new("SLA H", Op::Shift(ShiftOp::Sla, R8::H), 2, 8),
    Instruction::new("SLA L", Op::Shift(ShiftOp::Sla, R8::L), 2, 8),
    Instruction::new("SLA [HL]", Op::Shift(ShiftOp::Sla, R8::HlInd), 2, 16),
    Instruction::new("SLA A", Op::Shift(ShiftOp::Sla, R8::A), 2, 8),
    Instruction::new("SRA B", Op::Shift(ShiftOp::Sra, R8::B), 2, 8),
    Instruction::new("SRA C", Op::Shift(ShiftOp::Sra, R8::C), 2, 8),
    Instruction::new("SRA D", Op::Shift(ShiftOp::Sra, R8::D), 2, 8),
    Instruction::new("SRA E", Op::Shift(ShiftOp::Sra, R8::E), 2, 8),
    Instruction::new("SRA H", Op::Shift(ShiftOp::Sra, R8::H), 2, 8),
    Instruction::new("SRA L", Op::Shift(ShiftOp::Sra, R8::L), 2, 8),
    Instruction::new("SRA [HL]", Op::Shift(ShiftOp::Sra, R8::HlInd), 2, 16),
    Instruction::new("SRA A", Op::Shift(ShiftOp::Sra, R8::A), 2, 8),
    // 0x30
    Instruction::new("SWAP B", Op::Shift(ShiftOp::Swap, R8::B), 2, 8),
    Instruction::new("SWAP C", Op::Shift(ShiftOp::Swap, R8::C), 2, 8),
    Instruction::new("SWAP D", Op::Shift(ShiftOp::Swap, R8::D), 2, 8),
    Instruction::new("SWAP E", Op::Shift(ShiftOp::Swap, R8::E), 2, 8),
    Instruction::new("SWAP H", Op::Shift(ShiftOp::Swap, R8::H), 2, 8),
    Instruction::new("SWAP L", Op::Shift(ShiftOp::Swap, R8::L), 2, 8),
    Instruction::new("SWAP [HL]", Op::Shift(ShiftOp::Swap, R8::HlInd), 2, 16),
    Instruction::new("SWAP A", Op::Shift(ShiftOp::Swap, R8::A), 2, 8),
    Instruction::new("SRL B", Op::Shift(ShiftOp::Srl, R8::B), 2, 8),
    Instruction::new("SRL C", Op::Shift(ShiftOp::Srl, R8::C), 2, 8),
    Instruction::new("SRL D", Op::Shift(ShiftOp::Srl, R8::D), 2, 8),
    Instruction::new("SRL E", Op::Shift(ShiftOp::Srl, R8::E), 2, 8),
    Instruction::new("SRL H", Op::Shift(ShiftOp::Srl, R8::H), 2, 8),
    Instruction::new("SRL L", Op::Shift(ShiftOp::Srl, R8::L), 2, 8),
    Instruction::new("SRL [HL]", Op::Shift(ShiftOp::Srl, R8::HlInd), 2, 16),
    Instruction::new("SRL A", Op::Shift(ShiftOp::Srl, R8::A), 2, 8),
    // 0x40
    Instruction::new("BIT 0, B", Op::Bit(0, R8::B), 2, 8),
    Instruction::new("BIT 0, C", Op::Bit(0, R8::C), 2, 8),
    Instruction::new("BIT 0, D", Op::Bit(0, R8::D), 2, 8),
    Instruction::new("BIT 0, E", Op::Bit(0, R8::E), 2, 8),
    Instruction::new("BIT 0, H", Op::Bit(0, R8::H), 2, 8),
    Instruction::new("BIT 0, L", Op::Bit(0, R8::L), 2, 8),
    Instruction::new("BIT 0, [HL]", Op::Bit(0, R8::HlInd), 2, 12),
    Instruction::new("BIT 0, A", Op::Bit(0, R8::A), 2, 8),
    Instruction::new("BIT 1, B", Op::Bit(1, R8::B), 2, 8),
    Instruction::new("BIT 1, C", Op::Bit(1, R8::C), 2, 8),
    Instruction::new("BIT 1, D", Op::Bit(1, R8::D), 2, 8),
    Instruction::new("BIT 1, E", Op::Bit(1, R8::E), 2, 8),
    Instruction::new("BIT 1, H", Op::Bit(1, R8::H), 2, 8),
    Instruction::new("BIT 1, L", Op::Bit(1, R8::L), 2, 8),
    Instruction::new("BIT 1, [HL]", Op::Bit(1, R8::HlInd), 2, 12),
    Instruction::new("BIT 1, A", Op::Bit(1, R8::A), 2, 8),
    // 0x50
    Instruction::new("BIT 2, B", Op::Bit(2, R8::B), 2, 8),
    Instruction::new("BIT 2, C", Op::Bit(2, R8::C), 2, 8),
    Instruction::new("BIT 2, D", Op::Bit(2, R8::D), 2, 8),
    Instruction::new("BIT 2, E", Op::Bit(2, R8::E), 2, 8),
    Instruction::new("BIT 2, H", Op::Bit(2, R8::H), 2, 8),
    Instruction::new("BIT 2, L", Op::Bit(2, R8::L), 2, 8),
    Instruction::new("BIT 2, [HL]", Op::Bit(2, R8::HlInd), 2, 12),
    Instruction::new("BIT 2, A", Op::Bit(2, R8::A), 2, 8),
    Instruction::new("BIT 3, B", Op::Bit(3, R8::B), 2, 8),
    Instruction::new("BIT 3, C", Op::Bit(3, R8::C), 2, 8),
    Instruction::new("BIT 3, D", Op::Bit(3, R8::D), 2, 8),
    Instruction::new("BIT 3, E", Op::Bit(3, R8::E), 2, 8),
    Instruction::new("BIT 3, H", Op::Bit(3, R8::H), 2, 8),
    Instruction::new("BIT 3, L", Op::Bit(3, R8::L), 2, 8),
    Instruction::new("BIT 3, [HL]", Op::Bit(3, R8::HlInd), 2, 12),
    Instruction::new("BIT 3, A", Op::Bit(3, R8::A), 2, 8),
    // 0x60
    Instruction::new("BIT 4, B", Op::Bit(4, R8::B), 2, 8),
    Instruction::new("BIT 4, C", Op::Bit(4, R8::C), 2, 8),
    Instruction::new("BIT 4, D", Op::Bit(4, R8::D), 2, 8),
    Instruction::new("BIT 4, E", Op::Bit(4, R8::E), 2, 8),
    Instruction::new("BIT 4, H", Op::Bit(4, R8::H), 2, 8),
    Instruction::new("BIT 4, L", Op::Bit(4, R8::L), 2, 8),
    Instruction::new("BIT 4, [HL]", Op::Bit(4, R8::HlInd), 2, 12),
    Instruction::new("BIT 4, A", Op::Bit(4, R8::A), 2, 8),
    Instruction::new("BIT 5, B", Op::Bit(5, R8::B), 2, 8),
    Instruction::new("BIT 5, C", Op::Bit(5, R8::C), 2, 8),
    Instruction::new("BIT 5, D", Op::Bit(5, R8::D), 2, 8),
    Instruction::new("BIT 5, E", Op::Bit(5, R8::E), 2, 8),
    Instruction::new("BIT 5, H", Op::Bit(5, R8::H), 2, 8),
    Instruction::new("BIT 5, L", Op::Bit(5, R8::L), 2, 8),
    Instruction::new("BIT 5, [HL]", Op::Bit(5, R8::HlInd), 2, 12),
    Instruction::new("BIT 5, A", Op::Bit(5, R8::A), 2, 8),
    // 0x70
    Instruction::new("BIT 6, B", Op::Bit(6, R8::B), 2, 8),
    Instruction::new("BIT 6, C", Op::Bit(6, R8::C), 2, 8),
    Instruction::new("BIT 6, D", Op::Bit(6, R8::D), 2, 8),
    Instruction::new("BIT 6, E", Op::Bit(6, R8::E), 2, 8),
    Instruction::new("BIT 6, H", Op::Bit(6, R8::H), 2, 8),
    Instruction::new("BIT 6, L", Op::Bit(6, R8::L), 2, 8),
    Instruction::new("BIT 6, [HL]", Op::Bit(6, R8::HlInd), 2, 12),
    Instruction::new("BIT 6, A", Op::Bit(6, R8::A), 2, 8),
    Instruction::new("BIT 7, B", Op::Bit(7, R8::B), 2, 8),
    Instruction::new("BIT 7, C", Op::Bit(7, R8::C), 2, 8),
    Instruction::new("BIT 7, D", Op::Bit(7, R8::D), 2, 8),
    Instruction::new("BIT 7, E", Op::Bit(7, R8::E), 2, 8),
    Instruction::new("BIT 7, H", Op::Bit(7, R8::H), 2, 8),
    Instruction::new("BIT 7, L", Op::Bit(7, R8::L), 2, 8),
    Instruction::new("BIT 7, [HL]", Op::Bit(7, R8::HlInd), 2, 12),
    Instruction::new("BIT 7, A", Op::Bit(7, R8::A), 2, 8),
    // 0x80
    Instruction::new("RES 0, B", Op::Res(0, R8::B), 2, 8),
    Instruction::new("RES 0, C", Op::Res(0, R8::C), 2, 8),
    Instruction::new("RES 0, D", Op::Res(0, R8::D), 2, 8),
    Instruction::new("RES 0, E", Op::Res(0, R8::E), 2, 8),
    Instruction::new("RES 0, H", Op::Res(0, R8::H), 2, 8),
    Instruction::new("RES 0, L", Op::Res(0, R8::L), 2, 8),
    Instruction::new("RES 0, [HL]", Op::Res(0, R8::HlInd), 2, 16),
    Instruction::new("RES 0, A", Op::Res(0, R8::A), 2, 8),
    Instruction::new("RES 1, B", Op::Res(1, R8::B), 2, 8),
    Instruction::new("RES 1, C", Op::Res(1, R8::C), 2, 8),
    Instruction::new("RES 1, D", Op::Res(1, R8::D), 2, 8),
    Instruction::new("RES 1, E", Op::Res(1, R8::E), 2, 8),
    Instruction::new("RES 1, H", Op::Res(1, R8::H), 2, 8),
    Instruction::new("RES 1, L", Op::Res(1, R8::L), 2, 8),
    Instruction::new("RES 1, [HL]", Op::Res(1, R8::HlInd), 2, 16),
    Instruction::new("RES 1, A", Op::Res(1, R8::A), 2, 8),
    // 0x90
    Instruction::new("RES 2, B", Op::Res(2, R8::B), 2, 8),
    Instruction::new("RES 2, C", Op::Res(2, R8::C), 2, 8),
    Instruction::new("RES 2, D", Op::Res(2, R8::D), 2, 8),
    Instruction::new("RES 2, E", Op::Res(2, R8::E), 2, 8),
    Instruction::new("RES 2, H", Op::Res(2, R8::H), 2, 8),
    Instruction::new("RES 2, L", Op::Res(2, R8::L), 2, 8),
    Instruction::new("RES 2, [HL]", Op::Res(2, R8::HlInd), 2, 16),
    Instruction::new("RES 2, A", Op::Res(2, R8::A), 2, 8),
    Instruction::new("RES 3, B", Op::Res(3, R8::B), 2, 8),
    Instruction::new("RES 3, C", Op::Res(3, R8::C), 2, 8),
    Instruction::new("RES 3, D", Op::Res(3, R8::D), 2, 8),
    Instruction::new("RES 3, E", Op::Res(3, R8::E), 2, 8),
    Instruction::new("RES 3, H", Op::Res(3, R8::H), 2, 8),
    Instruction::new("RES 3, L", Op::Res(3, R8::L), 2, 8),
    Instruction::new("RES 3, [HL]", Op::Res(3, R8::HlInd), 2, 16),
    Instruction::new("RES 3, A", Op::Res(3, R8::A), 2, 8),
    // 0xA0
    Instruction::new("RES 4, B", Op::Res(4, R8::B), 2, 8),
    Instruction::new("RES 4, C", Op::Res(4, R8::C), 2, 8),
    Instruction::new("RES 4, D", Op::Res(4, R8::D), 2, 8),
    Instruction::new("RES 4, E", Op::Res(4, R8::E), 2, 8),
    Instruction::new("RES 4, H", Op::Res(4, R8::H), 2, 8),
    Instruction::new("RES 4, L", Op::Res(4, R8::L), 2, 8),
    Instruction::new("RES 4, [HL]", Op::Res(4, R8::HlInd), 2, 16),
    Instruction::new("RES 4, A", Op::Res(4, R8::A), 2, 8),
    Instruction::new("RES 5, B", Op::Res(5, R8::B), 2, 8),
    Instruction::new("RES 5, C", Op::Res(5, R8::C), 2, 8),
    Instruction::new("RES 5, D", Op::Res(5, R8::D), 2, 8),
    Instruction::new("RES 5, E", Op::Res(5, R8::E), 2, 8),
    Instruction::new("RES 5, H", Op::Res(5, R8::H), 2, 8),
    Instruction::new("RES 5, L", Op::Res(5, R8::L), 2, 8),
    Instruction::new("RES 5, [HL]", Op::Res(5, R8::HlInd), 2, 16),
    Instruction::new("RES 5, A", Op::Res(5, R8::A), 2, 8),
    // 0xB0
    Instruction::new("RES 6, B", Op::Res(6, R8::B), 2, 8),
    Instruction::new("RES 6, C", Op::Res(6, R8::C), 2, 8),
    Instruction::new("RES 6, D", Op::Res(6, R8::D), 2, 8),
    Instruction::new("RES 6, E", Op::Res(6, R8::E), 2, 8),
    Instruction::new("RES 6, H", Op::Res(6, R8::H), 2, 8),
    Instruction::new("RES 6, L", Op::Res(6, R8::L), 2, 8),
    Instruction::new("RES 6, [HL]", Op::Res(6, R8::HlInd), 2, 16),
    Instruction::new("RES 6, A", Op::Res(6, R8::A), 2, 8),
    Instruction::new("RES 7, B", Op::Res(7, R8::B), 2, 8),
    Instruction::new("RES 7, C", Op::Res(7, R8::C), 2, 8),
    Instruction::new("RES 7, D", Op::Res(7, R8::D), 2, 8),
    Instruction::new("RES 7, E", Op::Res(7, R8::E), 2, 8),
    Instruction::new("RES 7, H", Op::Res(7, R8::H), 2, 8),
    Instruction::new("RES 7, L", Op::Res(7, R8::L), 2, 8),
    Instruction::new("RES 7, [HL]", Op::Res(7, R8::HlInd), 2, 16),
    Instruction::new("RES 7, A", Op::Res(7, R8::A), 2, 8),
    // 0xC0
    Instruction::new("SET 0, B", Op::Set(0, R8::B), 2, 8),
    Instruction::new("SET 0, C", Op::Set(0, R8::C), 2, 8),
    Instruction::new("SET 0, D", Op::Set(0, R8::D), 2, 8),
    Instruction::new("SET 0, E", Op::Set(0, R8::E), 2, 8),
    Instruction::new("SET 0, H", Op::Set(0, R8::H), 2, 8),
    Instruction::new("SET 0, L", Op::Set(0, R8::L), 2, 8),
    Instruction::new("SET 0, [HL]", Op::Set(0, R8::HlInd), 2, 16),
    Instruction::new("SET 0, A", Op::Set(0, R8::A), 2, 8),
    Instruction::new("SET 1, B", Op::Set(1, R8::B), 2, 8),
    Instruction::new("SET 1, C", Op::Set(1, R8::C), 2, 8),
    Instruction::new("SET 1, D", Op::Set(1, R8::D), 2, 8),
    Instruction::new("SET 1, E", Op::Set(1, R8::E), 2, 8),
    Instruction::new("SET 1, H", Op::Set(1, R8::H), 2, 8),
    Instruction::new("SET 1, L", Op::Set(1, R8::L), 2, 8),
    Instruction::new("SET 1, [HL]", Op::Set(1, R8::HlInd), 2, 16),
    Instruction::new("SET 1, A", Op::Set(1, R8::A), 2, 8),
    // 0xD0
    Instruction::new("SET 2, B", Op::Set(2, R8::B), 2, 8),
    Instruction::new("SET 2, C", Op::Set(2, R8::C), 2, 8),
    Instruction::new("SET 2, D", Op::Set(2, R8::D), 2, 8),
    Instruction::new("SET 2, E", Op::Set(2, R8::E), 2, 8),
    Instruction::new("SET 2, H", Op::Set(2, R8::H), 2, 8),
    Instruction::new("SET 2, L", Op::Set(2, R8::L), 2, 8),
    Instruction::new("SET 2, [HL]", Op::Set(2, R8::HlInd), 2, 16),
    Instruction::new("SET 2, A", Op::Set(2, R8::A), 2, 8),
    Instruction::new("SET 3, B", Op::Set(3, R8::B), 2, 8),
    Instruction::new("SET 3, C", Op::Set(3, R8::C), 2, 8),
    Instruction::new("SET 3, D", Op::Set(3, R8::D), 2, 8),
    Instruction::new("SET 3, E", Op::Set(3, R8::E), 2, 8),
    Instruction::new("SET 3, H", Op::Set(3, R8::H), 2, 8),
    Instruction::new("SET 3, L", Op::Set(3, R8::L), 2, 8),
    Instruction::new("SET 3, [HL]", Op::Set(3, R8::HlInd), 2, 16),
    Instruction::new("SET 3, A", Op::Set(3, R8::A), 2, 8),
    // 0xE0
    Instruction::new("SET 4, B", Op::Set(4, R8::B), 2, 8),
    Instruction::new("SET 4, C", Op::Set(4, R8::C), 2, 8),
    Instruction::new("SET 4, D", Op::Set(4, R8::D), 2, 8),
    Instruction::new("SET 4, E", Op::Set(4, R8::E), 2, 8),
    Instruction::new("SET 4, H", Op::Set(4, R8::H), 2, 8),
    Instruction::new("SET 4, L", Op::Set(4, R8::L), 2, 8),
    Instruction::new("SET 4, [HL]", Op::Set(4, R8::HlInd), 2, 16),
    Instruction::new("SET 4, A", Op::Set(4, R8::A), 2, 8),
    Instruction::new("SET 5, B", Op::Set(5, R8::B), 2, 8),
    Instruction::new("SET 5, C", Op::Set(5, R8::C), 2, 8),
    Instruction::new("SET 5, D", Op::Set(5, R8::D), 2, 8),
    Instruction::new("SET 5, E", Op::Set(5, R8::E), 2, 8),
    Instruction::new("SET 5, H", Op::Set(5, R8::H), 2, 8),
    Instruction::new("SET 5, L", Op::Set(5, R8::L), 2, 8),
    Instruction::new("SET 5, [HL]", Op::Set(5, R8::HlInd), 2, 16),
    Instruction::new("SET 5, A", Op::Set(5, R8::A), 2, 8),
    // 0xF0
    Instruction::new("SET 6, B", Op::Set(6, R8::B), 2, 8),
    Instruction::new("SET 6, C", Op::Set(6, R8::C), 2, 8),
    Instruction::new("SET 6, D", Op::Set(6, R8::D), 2, 8),
    Instruction::new("SET 6, E", Op::Set(6, R8::E), 2, 8),
    Instruction::new("SET 6, H", Op::Set(6, R8::H), 2, 8),
    Instruction::new("SET 6, L", Op::Set(6, R8::L), 2, 8),
    Instruction::new("SET 6, [HL]", Op::Set(6, R8::HlInd), 2, 16),
    Instruction::new("SET 6, A", Op::Set(6, R8::A), 2, 8),
    Instruction::new("SET 7, B", Op::Set(7, R8::B), 2, 8),
    Instruction::new("SET 7, C", Op::Set(7, R8::C), 2, 8),
    Instruction::new("SET 7, D", Op::Set(7, R8::D), 2, 8),
    Instruction::new("SET 7, E", Op::Set(7, R8::E), 2, 8),
    Instruction::new("SET 7, H", Op::Set(7, R8::H), 2, 8),
    Instruction::new("SET 7, L", Op::Set(7, R8::L), 2, 8),
    Instruction::new("SET 7, [HL]", Op::Set(7, R8::HlInd), 2, 16),
    Instruction::new("SET 7, A", Op::Set(7, R8::A), 2, 8),
];
