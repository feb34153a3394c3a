//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color_of, Field, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceKind, EMPTY_CELL_COLOR, GRID_LINE_COLOR};

pub const TITLE_TEXT: &str = "Press Space To Start";
pub const GAME_OVER_TEXT: &str = "GAME OVER";

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

/// Where the field frame sits on screen, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldFrame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal view of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Allocation-free: callers keep one framebuffer across frames and it is
    /// only resized when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        match (snap.phase, snap.field) {
            (GamePhase::Playing | GamePhase::GameOver, Some(field)) => {
                let frame = self.draw_field(fb, snap, field, viewport);
                self.draw_side_panel(fb, snap, viewport, frame);
                if snap.phase == GamePhase::GameOver {
                    draw_centered(fb, frame.x, frame.w, frame.y + frame.h / 2, GAME_OVER_TEXT, overlay_style());
                }
            }
            _ => {
                let style = CellStyle::default().bold();
                draw_centered(fb, 0, viewport.width, viewport.height / 2, TITLE_TEXT, style);
            }
        }

        draw_fps(fb, snap.fps);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_field(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot<'_>,
        field: &Field,
        viewport: Viewport,
    ) -> FieldFrame {
        let px_w = field.width() as u16 * self.cell_w;
        let px_h = field.height() as u16 * self.cell_h;
        let frame = FieldFrame {
            x: viewport.width.saturating_sub(px_w + 2) / 2,
            y: viewport.height.saturating_sub(px_h + 2) / 2,
            w: px_w + 2,
            h: px_h + 2,
        };

        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)));

        for (y, row) in field.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_block(fb, frame, x as u16, y as u16, *kind),
                    None => self.draw_empty_cell(fb, frame, x as u16, y as u16),
                }
            }
        }

        // Active piece on top; blocks outside the field are clipped.
        if let Some(active) = snap.active {
            for (x, y) in active.blocks {
                if field.contains(x, y) {
                    self.draw_block(fb, frame, x as u16, y as u16, active.kind);
                }
            }
        }

        frame
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: FieldFrame, x: u16, y: u16) {
        let style = CellStyle::new(GRID_LINE_COLOR.into(), EMPTY_CELL_COLOR.into()).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: FieldFrame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(color_of(kind).into(), EMPTY_CELL_COLOR.into()).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: FieldFrame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot<'_>,
        viewport: Viewport,
        frame: FieldFrame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let entries = [
            ("Lines", snap.score.lines),
            ("Level", snap.score.level),
            ("Score", snap.score.score),
            ("High score", snap.score.high_score),
            ("Frames per fall", snap.frames_per_fall_step.max(0) as u32),
        ];

        let mut y = frame.y;
        for (name, amount) in entries {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, amount, value);
            y = y.saturating_add(2);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: FieldFrame, style: CellStyle) {
    let FieldFrame { x, y, w, h } = frame;
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

fn draw_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let start = x.saturating_add(w.saturating_sub(text_w) / 2);
    fb.put_str(start, y, text, style);
}

fn draw_fps(fb: &mut FrameBuffer, fps: f32) {
    let style = CellStyle::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));
    let x = fb.put_str(0, 0, "FPS: ", style);
    fb.put_u32(x, 0, fps.round().max(0.0) as u32, style);
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActivePiece, ActiveSnapshot, ScoreState};
    use crate::types::Rotation;

    fn playing<'a>(field: &'a Field, phase: GamePhase) -> GameSnapshot<'a> {
        let piece = ActivePiece::new(PieceKind::T, Rotation::SPAWN, 3, 0);
        GameSnapshot {
            phase,
            field: Some(field),
            active: Some(ActiveSnapshot::from(&piece)),
            score: ScoreState {
                lines: 12,
                level: 1,
                score: 345,
                high_score: 900,
            },
            frames_per_fall_step: 46,
            fps: 60.2,
        }
    }

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn title_screen_shows_prompt_and_fps() {
        let snap = GameSnapshot::title(ScoreState::default(), 59.6);
        let fb = GameView::default().render(&snap, Viewport::new(40, 10));

        assert!(fb.row_text(0).starts_with("FPS: 60"));
        assert!(fb.row_text(5).contains(TITLE_TEXT));
        assert!(!screen_text(&fb).contains('┌'));
    }

    #[test]
    fn playing_view_draws_field_piece_and_panel() {
        let field = Field::standard();
        let snap = playing(&field, GamePhase::Playing);
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));

        // 10 cells * 2 columns + border = 22 wide, 22 tall; centered.
        let (fx, fy) = (29u16, 1u16);
        assert_eq!(fb.get(fx, fy).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(fx + 21, fy + 21).map(|c| c.ch), Some('┘'));

        // T spawn block at (4, 0) -> columns 1 + 4 * 2.
        let block = fb.get(fx + 1 + 8, fy + 1).unwrap();
        assert_eq!(block.ch, '█');
        assert_eq!(block.style.fg, Rgb::from(color_of(PieceKind::T)));

        // Empty cell is a dim dot.
        let empty = fb.get(fx + 1, fy + 1).unwrap();
        assert_eq!(empty.ch, '·');
        assert!(empty.style.dim);

        let text = screen_text(&fb);
        for needle in ["Lines", "Level", "Score", "High score", "Frames per fall", "345", "900", "46"] {
            assert!(text.contains(needle), "missing {needle}");
        }
        assert!(!text.contains(GAME_OVER_TEXT));
    }

    #[test]
    fn locked_cells_use_piece_color() {
        let mut field = Field::standard();
        field.set_cell(0, 19, Some(PieceKind::I));
        let snap = playing(&field, GamePhase::Playing);
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));

        let cell = fb.get(29 + 1, 1 + 1 + 19).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(color_of(PieceKind::I)));
    }

    #[test]
    fn game_over_overlays_text_on_field() {
        let field = Field::standard();
        let snap = playing(&field, GamePhase::GameOver);
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!(screen_text(&fb).contains(GAME_OVER_TEXT));
        assert!(screen_text(&fb).contains('┌'));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let field = Field::standard();
        let snap = playing(&field, GamePhase::Playing);
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
