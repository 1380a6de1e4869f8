use dotmatrix_dmg::machine::LcdControl;
use dotmatrix_dmg::{LineContext, LineRenderer, SCREEN_HEIGHT, SCREEN_WIDTH};

const BYTES_PER_PIXEL: usize = 3;

/// Map a 2-bit palette entry to a DMG-style grey (0 = white, 3 = black).
#[inline]
fn shade(palette: u8, color_index: u8) -> u8 {
    match (palette >> (color_index * 2)) & 0x03 {
        0 => 0xFF,
        1 => 0xAA,
        2 => 0x55,
        _ => 0x00,
    }
}

/// Two bytes per tile row, low bit-plane first.
#[inline]
fn tile_pixel(vram: &[u8; 0x2000], row_addr: u16, x: u8) -> u8 {
    let offset = (row_addr - 0x8000) as usize;
    let bit = 7 - (x & 7);
    let lo = (vram[offset] >> bit) & 0x01;
    let hi = (vram[offset + 1] >> bit) & 0x01;
    (hi << 1) | lo
}

/// Reference line renderer producing an RGB24 framebuffer.
///
/// Composes background, window and sprites for each line the display
/// finishes, including the ten-objects-per-line limit, X-then-OAM-index
/// priority between overlapping objects and the BG-over-OBJ attribute.
pub struct ShadeRenderer {
    framebuffer: Vec<u8>,
    frames: u64,
    /// Internal window line counter; only advances on lines that drew it.
    window_line: u8,
}

impl Default for ShadeRenderer {
    fn default() -> Self {
        Self {
            framebuffer: vec![0xFF; SCREEN_WIDTH * SCREEN_HEIGHT * BYTES_PER_PIXEL],
            frames: 0,
            window_line: 0,
        }
    }
}

impl ShadeRenderer {
    /// RGB24, row-major, 160x144.
    pub fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    /// Number of completed frames seen so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn put(&mut self, x: usize, y: usize, value: u8) {
        let idx = (y * SCREEN_WIDTH + x) * BYTES_PER_PIXEL;
        self.framebuffer[idx..idx + BYTES_PER_PIXEL].fill(value);
    }

    /// Background and window colour indices for one line.
    fn background_line(&mut self, ctx: &LineContext<'_>) -> [u8; SCREEN_WIDTH] {
        let regs = &ctx.registers;
        let lcdc = LcdControl::from_bits_retain(regs.lcdc);
        let mut indices = [0u8; SCREEN_WIDTH];

        if !lcdc.contains(LcdControl::BG_ENABLE) {
            return indices;
        }

        let tile_row_addr = |map_base: u16, x: u8, y: u8| -> u16 {
            let map_addr = map_base + (y as u16 / 8) * 32 + (x as u16 / 8);
            let tile_index = ctx.vram[(map_addr - 0x8000) as usize];
            let tile_base = if lcdc.contains(LcdControl::TILE_DATA) {
                0x8000 + tile_index as u16 * 16
            } else {
                (0x9000i32 + (tile_index as i8 as i32) * 16) as u16
            };
            tile_base + (y as u16 & 7) * 2
        };

        let bg_map = if lcdc.contains(LcdControl::BG_MAP) { 0x9C00 } else { 0x9800 };
        let bg_y = regs.line.wrapping_add(regs.scy);
        for (x, index) in indices.iter_mut().enumerate() {
            let bg_x = (x as u8).wrapping_add(regs.scx);
            *index = tile_pixel(ctx.vram, tile_row_addr(bg_map, bg_x, bg_y), bg_x);
        }

        let window_x = regs.wx as i16 - 7;
        if lcdc.contains(LcdControl::WINDOW_ENABLE)
            && regs.line >= regs.wy
            && window_x < SCREEN_WIDTH as i16
        {
            let win_map = if lcdc.contains(LcdControl::WINDOW_MAP) { 0x9C00 } else { 0x9800 };
            let win_y = self.window_line;
            for (x, index) in indices.iter_mut().enumerate().skip(window_x.max(0) as usize) {
                let win_x = (x as i16 - window_x) as u8;
                *index = tile_pixel(ctx.vram, tile_row_addr(win_map, win_x, win_y), win_x);
            }
            self.window_line = self.window_line.wrapping_add(1);
        }

        indices
    }
}

impl LineRenderer for ShadeRenderer {
    fn render_line(&mut self, ctx: &LineContext<'_>) {
        let regs = ctx.registers;
        let y = regs.line as usize;
        if y >= SCREEN_HEIGHT {
            return;
        }
        if y == 0 {
            self.window_line = 0;
        }

        let lcdc = LcdControl::from_bits_retain(regs.lcdc);
        let bg = self.background_line(ctx);
        for (x, &index) in bg.iter().enumerate() {
            self.put(x, y, shade(regs.bgp, index));
        }

        if !lcdc.contains(LcdControl::OBJ_ENABLE) {
            return;
        }

        let height: i16 = if lcdc.contains(LcdControl::OBJ_SIZE) { 16 } else { 8 };
        let line = regs.line as i16;

        // First ten objects on the line, in OAM order.
        let mut visible: Vec<(i16, usize)> = ctx
            .oam
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, entry)| {
                let top = entry[0] as i16 - 16;
                line >= top && line < top + height
            })
            .map(|(i, entry)| (entry[1] as i16 - 8, i))
            .take(10)
            .collect();
        // Lower X wins, then lower OAM index. Draw back to front.
        visible.sort_by_key(|&(x, i)| (x, i));

        for &(sprite_x, i) in visible.iter().rev() {
            let entry = &ctx.oam[i * 4..i * 4 + 4];
            let attrs = entry[3];
            let mut row = line - (entry[0] as i16 - 16);
            if attrs & 0x40 != 0 {
                row = height - 1 - row;
            }
            let mut tile = entry[2];
            if height == 16 {
                tile &= 0xFE;
            }
            let row_addr = 0x8000 + tile as u16 * 16 + row as u16 * 2;
            let palette = if attrs & 0x10 != 0 { regs.obp1 } else { regs.obp0 };

            for col in 0..8i16 {
                let screen_x = sprite_x + col;
                if !(0..SCREEN_WIDTH as i16).contains(&screen_x) {
                    continue;
                }
                let src_x = if attrs & 0x20 != 0 { 7 - col } else { col } as u8;
                let index = tile_pixel(ctx.vram, row_addr, src_x);
                // Colour 0 is transparent; BG-over-OBJ hides behind non-zero BG.
                if index == 0 || (attrs & 0x80 != 0 && bg[screen_x as usize] != 0) {
                    continue;
                }
                self.put(screen_x as usize, y, shade(palette, index));
            }
        }
    }

    fn frame_ready(&mut self) {
        self.frames += 1;
    }
}
