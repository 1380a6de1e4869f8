//! Display timing unit.
//!
//! Models the LCD controller as a four-state machine driven purely by the
//! cycle counts the bus hands it. Pixel composition is not done here: when
//! a line finishes pixel transfer the caller's line callback receives a
//! snapshot of the registers that affect that line.

use bitflags::bitflags;

use super::render::LineRegisters;
use crate::cpu::Interrupt;
use crate::CYCLES_PER_FRAME;

const OAM_SCAN_CYCLES: u32 = 80;
const PIXEL_TRANSFER_CYCLES: u32 = 172;
const HBLANK_CYCLES: u32 = 204;
const SCANLINE_CYCLES: u32 = 456;
const VISIBLE_LINES: u8 = 144;
const TOTAL_LINES: u8 = 154;

bitflags! {
    /// LCDC ($FF40).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LcdControl: u8 {
        const ENABLE = 0x80;
        const WINDOW_MAP = 0x40;
        const WINDOW_ENABLE = 0x20;
        const TILE_DATA = 0x10;
        const BG_MAP = 0x08;
        const OBJ_SIZE = 0x04;
        const OBJ_ENABLE = 0x02;
        const BG_ENABLE = 0x01;
    }
}

bitflags! {
    /// STAT interrupt source selects (bits 3–6 of $FF41).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct StatSource: u8 {
        const HBLANK = 0x08;
        const VBLANK = 0x10;
        const OAM = 0x20;
        const LYC = 0x40;
    }
}

/// PPU mode as reported in STAT bits 0–1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LcdMode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    PixelTransfer = 3,
}

/// What happened during one `Lcd::clock` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LcdEvents {
    pub interrupts: Interrupt,
    pub frame_completed: bool,
}

#[derive(Clone, Debug)]
pub struct Lcd {
    lcdc: LcdControl,
    stat_sources: StatSource,
    mode: LcdMode,
    ly: u8,
    lyc: u8,
    scy: u8,
    scx: u8,
    wy: u8,
    wx: u8,
    bgp: u8,
    obp0: u8,
    obp1: u8,
    /// Cycles accumulated inside the current mode.
    mode_clock: u32,
    /// Cycles accumulated while the display is switched off.
    idle_clock: u32,
    frame_ready: bool,
}

impl Default for Lcd {
    fn default() -> Self {
        Self::new()
    }
}

impl Lcd {
    /// Display state after the boot ROM: enabled, BG on, OAM scan of line 0.
    pub fn new() -> Self {
        let mut lcd = Self::power_on();
        lcd.lcdc = LcdControl::from_bits_retain(0x91);
        lcd.bgp = 0xFC;
        lcd
    }

    /// Display state at power-on: switched off, all registers zero.
    pub fn power_on() -> Self {
        Self {
            lcdc: LcdControl::empty(),
            stat_sources: StatSource::empty(),
            mode: LcdMode::OamScan,
            ly: 0,
            lyc: 0,
            scy: 0,
            scx: 0,
            wy: 0,
            wx: 0,
            bgp: 0,
            obp0: 0,
            obp1: 0,
            mode_clock: 0,
            idle_clock: 0,
            frame_ready: false,
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.lcdc.contains(LcdControl::ENABLE)
    }

    #[inline]
    pub fn mode(&self) -> LcdMode {
        self.mode
    }

    /// Current scanline (LY), 0–153.
    #[inline]
    pub fn ly(&self) -> u8 {
        self.ly
    }

    #[inline]
    pub fn lyc(&self) -> u8 {
        self.lyc
    }

    /// Cycles spent so far in the current mode.
    #[inline]
    pub fn mode_clock(&self) -> u32 {
        self.mode_clock
    }

    #[inline]
    pub fn frame_ready(&self) -> bool {
        self.frame_ready
    }

    /// Read and clear the "frame ready" signal.
    pub fn take_frame_ready(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }

    /// STAT as read by the CPU: bit 7 set, bits 3–6 the source selects,
    /// bit 2 the LY=LYC coincidence, bits 0–1 the mode.
    pub fn stat(&self) -> u8 {
        let coincidence = if self.ly == self.lyc { 0x04 } else { 0x00 };
        0x80 | self.stat_sources.bits() | coincidence | self.mode as u8
    }

    /// CPU writes to VRAM are dropped while the PPU is fetching pixels.
    pub fn vram_writable(&self) -> bool {
        !self.enabled() || self.mode != LcdMode::PixelTransfer
    }

    /// CPU writes to OAM are dropped during OAM scan and pixel transfer.
    pub fn oam_writable(&self) -> bool {
        !self.enabled() || matches!(self.mode, LcdMode::HBlank | LcdMode::VBlank)
    }

    pub(super) fn line_registers(&self) -> LineRegisters {
        LineRegisters {
            line: self.ly,
            lcdc: self.lcdc.bits(),
            scy: self.scy,
            scx: self.scx,
            wy: self.wy,
            wx: self.wx,
            bgp: self.bgp,
            obp0: self.obp0,
            obp1: self.obp1,
        }
    }

    /// Read one of the display registers in $FF40–$FF4B (DMA at $FF46 is
    /// owned by the bus).
    pub(super) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF40 => self.lcdc.bits(),
            0xFF41 => self.stat(),
            0xFF42 => self.scy,
            0xFF43 => self.scx,
            0xFF44 => self.ly,
            0xFF45 => self.lyc,
            0xFF47 => self.bgp,
            0xFF48 => self.obp0,
            0xFF49 => self.obp1,
            0xFF4A => self.wy,
            0xFF4B => self.wx,
            _ => 0xFF,
        }
    }

    pub(super) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF40 => self.set_lcdc(value),
            // Only the source selects are writable.
            0xFF41 => self.stat_sources = StatSource::from_bits_truncate(value),
            0xFF42 => self.scy = value,
            0xFF43 => self.scx = value,
            // LY is read-only.
            0xFF44 => {}
            0xFF45 => self.lyc = value,
            0xFF47 => self.bgp = value,
            0xFF48 => self.obp0 = value,
            0xFF49 => self.obp1 = value,
            0xFF4A => self.wy = value,
            0xFF4B => self.wx = value,
            _ => {}
        }
    }

    /// Write LCDC. Toggling the enable bit restarts the state machine at
    /// OAM scan of line 0 and clears the idle-frame timer.
    pub fn set_lcdc(&mut self, value: u8) {
        let new = LcdControl::from_bits_retain(value);
        if new.contains(LcdControl::ENABLE) != self.enabled() {
            log::debug!(
                "LCD {} (LCDC 0x{:02X} -> 0x{:02X})",
                if new.contains(LcdControl::ENABLE) { "enabled" } else { "disabled" },
                self.lcdc.bits(),
                value,
            );
            self.mode = LcdMode::OamScan;
            self.ly = 0;
            self.mode_clock = 0;
            self.idle_clock = 0;
        }
        self.lcdc = new;
    }

    /// Advance the state machine by `cycles` T-cycles.
    ///
    /// `on_line` is called once for every line that finishes pixel transfer,
    /// before the switch to HBlank.
    pub fn clock<F>(&mut self, cycles: u32, mut on_line: F) -> LcdEvents
    where
        F: FnMut(LineRegisters),
    {
        let mut events = LcdEvents::default();

        if !self.enabled() {
            // Keep frame pacing alive with the display off.
            self.idle_clock += cycles;
            while self.idle_clock >= CYCLES_PER_FRAME {
                self.idle_clock -= CYCLES_PER_FRAME;
                self.frame_ready = true;
                events.frame_completed = true;
            }
            return events;
        }

        self.mode_clock += cycles;
        loop {
            match self.mode {
                LcdMode::OamScan if self.mode_clock >= OAM_SCAN_CYCLES => {
                    self.mode_clock -= OAM_SCAN_CYCLES;
                    self.mode = LcdMode::PixelTransfer;
                }
                LcdMode::PixelTransfer if self.mode_clock >= PIXEL_TRANSFER_CYCLES => {
                    self.mode_clock -= PIXEL_TRANSFER_CYCLES;
                    on_line(self.line_registers());
                    self.mode = LcdMode::HBlank;
                    self.request_stat(StatSource::HBLANK, &mut events);
                }
                LcdMode::HBlank if self.mode_clock >= HBLANK_CYCLES => {
                    self.mode_clock -= HBLANK_CYCLES;
                    self.ly += 1;
                    self.check_coincidence(&mut events);

                    if self.ly == VISIBLE_LINES {
                        self.mode = LcdMode::VBlank;
                        events.interrupts |= Interrupt::VBLANK;
                        self.request_stat(StatSource::VBLANK, &mut events);
                        self.frame_ready = true;
                        events.frame_completed = true;
                        log::trace!("LCD VBlank start");
                    } else {
                        self.mode = LcdMode::OamScan;
                        self.request_stat(StatSource::OAM, &mut events);
                    }
                }
                LcdMode::VBlank if self.mode_clock >= SCANLINE_CYCLES => {
                    self.mode_clock -= SCANLINE_CYCLES;
                    self.ly += 1;

                    if self.ly == TOTAL_LINES {
                        self.ly = 0;
                        self.mode = LcdMode::OamScan;
                        self.request_stat(StatSource::OAM, &mut events);
                    }
                    self.check_coincidence(&mut events);
                }
                _ => break,
            }
        }

        events
    }

    /// Convenience wrapper for callers that do not render.
    pub fn tick(&mut self, cycles: u32) -> LcdEvents {
        self.clock(cycles, |_| {})
    }

    #[inline]
    fn request_stat(&self, source: StatSource, events: &mut LcdEvents) {
        if self.stat_sources.contains(source) {
            events.interrupts |= Interrupt::STAT;
        }
    }

    #[inline]
    fn check_coincidence(&self, events: &mut LcdEvents) {
        if self.ly == self.lyc {
            self.request_stat(StatSource::LYC, events);
        }
    }
}
