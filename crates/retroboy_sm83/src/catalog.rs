//! # Instruction catalog
//!
//! Two fixed 256-entry tables map an opcode byte to its [`Instruction`]
//! descriptor: [`BASE`] for the unprefixed opcode space and [`EXTENDED`] for
//! the opcodes that follow the `0xCB` escape byte. The tables are plain
//! `static` data, shared by every [`crate::Cpu`] in the process.
//!
//! Each descriptor carries:
//! - a printf-style display template (`%02X` / `%04X` placeholders for the
//!   immediate operand), used only for diagnostics;
//! - the [`Op`] the engine executes;
//! - the encoded length in bytes;
//! - the base cost in ticks (T-cycles). Conditional control transfers add
//!   their penalty at execution time when the condition holds.

mod base;
mod extended;

pub use base::BASE;
pub use extended::EXTENDED;

/// Escape byte that selects the extended table.
pub const PREFIX: u8 = 0xCB;

/// 8-bit operand selector, in the order the opcode encoding uses
/// (0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// The byte at the address held in HL.
    HlInd,
    A,
}

impl R8 {
    pub const fn from_index(index: u8) -> R8 {
        match index & 0x07 {
            0 => R8::B,
            1 => R8::C,
            2 => R8::D,
            3 => R8::E,
            4 => R8::H,
            5 => R8::L,
            6 => R8::HlInd,
            _ => R8::A,
        }
    }
}

/// Register pair operand for 16-bit loads and arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16 {
    Bc,
    De,
    Hl,
    Sp,
}

/// Register pair operand for PUSH/POP, where AF takes the place of SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stack16 {
    Bc,
    De,
    Hl,
    Af,
}

/// Memory operand of `LD [rr], A` / `LD A, [rr]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indirect {
    Bc,
    De,
    /// `[HL+]`: HL is incremented after the access.
    HlInc,
    /// `[HL-]`: HL is decremented after the access.
    HlDec,
}

/// Branch condition codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Nz,
    Z,
    Nc,
    C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

/// Rotate/shift family of the extended table (x = 0 block).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

/// Semantic kind of an instruction. The engine dispatches on this in one
/// `match`, so lookup stays a single table index per opcode byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// The `0xCB` escape byte itself.
    Prefix,
    /// Unassigned opcode; executing it locks the core up.
    Invalid,

    // 8-bit loads
    Ld(R8, R8),
    LdImm(R8),
    StoreA(Indirect),
    LoadA(Indirect),
    StoreHighImm,
    LoadHighImm,
    StoreHighC,
    LoadHighC,
    StoreAbs,
    LoadAbs,

    // 16-bit loads and stack
    LdImm16(R16),
    StoreSp,
    LdSpHl,
    LdHlSpImm,
    Push(Stack16),
    Pop(Stack16),

    // 8-bit arithmetic/logic
    Alu(AluOp, R8),
    AluImm(AluOp),
    Inc(R8),
    Dec(R8),
    Daa,
    Cpl,
    Scf,
    Ccf,

    // 16-bit arithmetic
    Inc16(R16),
    Dec16(R16),
    AddHl(R16),
    AddSpImm,

    // accumulator rotates
    Rlca,
    Rrca,
    Rla,
    Rra,

    // control transfer
    Jr,
    JrCc(Cond),
    Jp,
    JpCc(Cond),
    JpHl,
    Call,
    CallCc(Cond),
    Ret,
    RetCc(Cond),
    Reti,
    Rst(u8),

    // extended table
    Shift(ShiftOp, R8),
    Bit(u8, R8),
    Res(u8, R8),
    Set(u8, R8),
}

/// Immutable descriptor for one catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Display template, e.g. `"LD BC, 0x%04X"`.
    pub template: &'static str,
    pub op: Op,
    /// Encoded length in bytes, including any prefix.
    pub length: u8,
    /// Base cost in ticks.
    pub ticks: u8,
}

impl Instruction {
    pub const fn new(template: &'static str, op: Op, length: u8, ticks: u8) -> Self {
        Self {
            template,
            op,
            length,
            ticks,
        }
    }

    /// Whether this entry names a real instruction.
    pub const fn is_valid(&self) -> bool {
        !matches!(self.op, Op::Invalid)
    }

    /// Substitute the operand bytes (little-endian, as fetched) into the
    /// template.
    pub fn render(&self, operands: &[u8]) -> String {
        render_template(self.template, operands)
    }
}

/// Descriptor for an unprefixed opcode.
#[inline]
pub fn lookup(opcode: u8) -> &'static Instruction {
    &BASE[opcode as usize]
}

/// Descriptor for the opcode that follows the `0xCB` escape byte.
#[inline]
pub fn lookup_prefixed(opcode: u8) -> &'static Instruction {
    &EXTENDED[opcode as usize]
}

/// Decode the instruction at the start of `bytes` without a CPU.
///
/// Returns the descriptor and the rendered text, or `None` when `bytes` is
/// shorter than the instruction's encoding.
pub fn disassemble(bytes: &[u8]) -> Option<(&'static Instruction, String)> {
    let (&opcode, rest) = bytes.split_first()?;
    let (instruction, operands) = if opcode == PREFIX {
        let (&cb, rest) = rest.split_first()?;
        (lookup_prefixed(cb), rest)
    } else {
        (lookup(opcode), rest)
    };

    let operand_len = if opcode == PREFIX {
        0
    } else {
        usize::from(instruction.length.saturating_sub(1))
    };
    let operands = operands.get(..operand_len)?;
    Some((instruction, instruction.render(operands)))
}

fn render_template(template: &str, operands: &[u8]) -> String {
    let byte = operands.first().copied().unwrap_or(0);
    let word = u16::from_le_bytes([byte, operands.get(1).copied().unwrap_or(0)]);
    template
        .replace("%04X", &format!("{word:04X}"))
        .replace("%02X", &format!("{byte:02X}"))
}
