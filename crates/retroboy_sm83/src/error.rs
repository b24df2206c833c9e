/// Conditions surfaced to the host through [`crate::Cpu::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CpuError {
    /// The step fetched an opcode with no assigned instruction. The core
    /// has locked up and will not fetch again until reset.
    #[error("invalid opcode 0x{opcode:02X} at 0x{addr:04X}")]
    InvalidOpcode { opcode: u8, addr: u16 },
    /// The core is still locked up from an earlier invalid opcode.
    #[error("cpu locked up by opcode 0x{opcode:02X} at 0x{addr:04X}")]
    Locked { opcode: u8, addr: u16 },
}
