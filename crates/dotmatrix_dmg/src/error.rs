use thiserror::Error;

/// Fatal conditions surfaced by the CPU engine.
///
/// Blocked bus accesses during OAM DMA and writes to unmapped I/O ports are
/// documented no-ops and never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The byte at `addr` is one of the permanently undefined opcode slots
    /// (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD). Real hardware locks up;
    /// we stop executing and report the location instead.
    #[error("illegal opcode 0x{opcode:02X} at 0x{addr:04X}")]
    IllegalOpcode { addr: u16, opcode: u8 },
}
