//! Address decoding for the 64 KiB DMG map.
//!
//! | Range         | Target                                    |
//! |---------------|-------------------------------------------|
//! | `0000–7FFF`   | cartridge ROM (boot overlay on `0000–00FF`) |
//! | `8000–9FFF`   | VRAM                                      |
//! | `A000–BFFF`   | cartridge RAM                             |
//! | `C000–DFFF`   | WRAM                                      |
//! | `E000–FDFF`   | echo of WRAM                              |
//! | `FE00–FE9F`   | OAM                                       |
//! | `FEA0–FEFF`   | unusable                                  |
//! | `FF00–FF7F`   | I/O registers                             |
//! | `FF80–FFFE`   | HRAM                                      |
//! | `FFFF`        | IE                                        |

mod read;
mod write;

pub(super) const P1: u16 = 0xFF00;
pub(super) const SB: u16 = 0xFF01;
pub(super) const SC: u16 = 0xFF02;
pub(super) const IF: u16 = 0xFF0F;
pub(super) const DMA: u16 = 0xFF46;
pub(super) const BOOT_OFF: u16 = 0xFF50;

/// Only the low five bits of IE/IF name real interrupt lines.
pub(super) const INTERRUPT_MASK: u8 = 0x1F;

#[inline]
pub(super) fn wram_index(addr: u16) -> usize {
    // Echo RAM folds onto the same 8 KiB.
    (addr as usize) & 0x1FFF
}
