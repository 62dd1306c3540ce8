//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Status;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(60, 55, 50);
const EMPTY_BG: Rgb = Rgb::new(80, 74, 68);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Blank columns/rows between tiles.
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a 4-digit value with padding and keeps tiles roughly square.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            gap,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer frame size (including border) for a board of `size` tiles per side.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let n = u16::try_from(size).unwrap_or(u16::MAX);
        let gaps = n.saturating_add(1).saturating_mul(self.gap);
        let inner_w = n.saturating_mul(self.tile_w).saturating_add(gaps);
        let inner_h = n.saturating_mul(self.tile_h).saturating_add(gaps);
        (inner_w.saturating_add(2), inner_h.saturating_add(2))
    }

    /// Top-left terminal cell of tile `(row, col)` relative to the frame origin.
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        let step = |i: usize, tile: u16| {
            let i = u16::try_from(i).unwrap_or(u16::MAX);
            i.saturating_mul(tile.saturating_add(self.gap))
                .saturating_add(self.gap)
                .saturating_add(1)
        };
        (step(col, self.tile_w), step(row, self.tile_h))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            start_x.saturating_add(1),
            start_y.saturating_add(1),
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let (ox, oy) = self.tile_origin(row, col);
                self.draw_tile(fb, start_x.saturating_add(ox), start_y.saturating_add(oy), value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            Status::Won => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!"),
            Status::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Status::Active => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
        let style = tile_style(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        let mid_y = y.saturating_add(self.tile_h / 2);
        if value == 0 {
            fb.put_char(x.saturating_add(self.tile_w / 2), mid_y, '·', style.dim());
            return;
        }

        let label = value.to_string();
        let len = label.chars().count() as u16;
        let lx = x.saturating_add(self.tile_w.saturating_sub(len) / 2);
        // Labels wider than the tile are clipped to its width.
        for (i, ch) in label.chars().take(self.tile_w as usize).enumerate() {
            fb.put_char(lx.saturating_add(i as u16), mid_y, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.max_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GOAL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.win_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "arrows slide", hint);
        y = y.saturating_add(1);
        let undo_style = if snap.can_undo { hint } else { hint.dim() };
        fb.put_str(panel_x, y, "u undo", undo_style);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "r restart", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quit", hint);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);

        let sub = "r to restart";
        let sub_w = sub.chars().count() as u16;
        let sx = start_x.saturating_add(frame_w.saturating_sub(sub_w) / 2);
        fb.put_str(sx, mid_y.saturating_add(1), sub, style.dim());
    }
}

/// Tile colors, darkening text on the light low tiles.
pub fn tile_style(value: u32) -> CellStyle {
    let dark = Rgb::new(60, 55, 50);
    let light = Rgb::new(250, 246, 242);
    let (bg, fg) = match value {
        0 => (EMPTY_BG, Rgb::new(120, 112, 104)),
        2 => (Rgb::new(238, 228, 218), dark),
        4 => (Rgb::new(237, 224, 200), dark),
        8 => (Rgb::new(242, 177, 121), light),
        16 => (Rgb::new(245, 149, 99), light),
        32 => (Rgb::new(246, 124, 95), light),
        64 => (Rgb::new(246, 94, 59), light),
        128 => (Rgb::new(237, 207, 114), light),
        256 => (Rgb::new(237, 204, 97), light),
        512 => (Rgb::new(237, 200, 80), light),
        1024 => (Rgb::new(237, 197, 63), light),
        2048 => (Rgb::new(237, 194, 46), light),
        _ => (Rgb::new(60, 58, 50), light),
    };
    CellStyle {
        fg,
        bg,
        bold: value >= 8,
        dim: false,
    }
}
