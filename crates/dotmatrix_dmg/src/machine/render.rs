/// Display registers that affect how one scanline is composed, captured at
/// the end of that line's pixel transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineRegisters {
    pub line: u8,
    pub lcdc: u8,
    pub scy: u8,
    pub scx: u8,
    pub wy: u8,
    pub wx: u8,
    pub bgp: u8,
    pub obp0: u8,
    pub obp1: u8,
}

/// Everything a renderer needs to compose the 160 pixels of one line.
pub struct LineContext<'a> {
    pub registers: LineRegisters,
    /// VRAM, $8000–$9FFF.
    pub vram: &'a [u8; 0x2000],
    /// OAM, $FE00–$FE9F.
    pub oam: &'a [u8; 0xA0],
}

/// Rendering collaborator driven by the display timing unit.
///
/// The core never computes pixel colours itself; it only tells the renderer
/// when a line is ready and when a full 160x144 frame is complete.
pub trait LineRenderer {
    fn render_line(&mut self, ctx: &LineContext<'_>);

    fn frame_ready(&mut self) {}
}

/// Renderer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl LineRenderer for NullRenderer {
    fn render_line(&mut self, _ctx: &LineContext<'_>) {}
}
