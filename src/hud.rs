use macroquad::prelude::*;
use macroquad::ui::root_ui;

use crate::input::Action;
use crate::session::Session;

const MARGIN: f32 = 24.0;
const TITLE_HEIGHT: f32 = 56.0;
const FOOTER_HEIGHT: f32 = 112.0;

const PAGE: Color = Color::new(0.75, 0.42, 0.85, 1.0);
const CARD: Color = WHITE;
const CANVAS_BORDER: Color = Color::new(0.82, 0.84, 0.86, 1.0);
const TEXT: Color = Color::new(0.22, 0.25, 0.32, 1.0);
const GAME_OVER: Color = Color::new(0.86, 0.15, 0.15, 1.0);

/// Title on top, playfield in the middle, score and buttons below.
pub struct Hud {
    canvas_size: f32,
}

impl Hud {
    pub fn new(canvas_size: u16) -> Self {
        Self { canvas_size: f32::from(canvas_size) }
    }

    pub fn window_size(&self) -> (f32, f32) {
        (
            self.canvas_size + 2.0 * MARGIN,
            self.canvas_size + TITLE_HEIGHT + FOOTER_HEIGHT + MARGIN,
        )
    }

    fn canvas_origin(&self) -> Vec2 {
        vec2(MARGIN, TITLE_HEIGHT)
    }

    /// Draws one frame and returns the action of a clicked button, if any.
    pub fn draw(&self, session: &Session, canvas: &Texture2D) -> Option<Action> {
        let (w, h) = self.window_size();
        clear_background(PAGE);
        draw_rectangle(4.0, 4.0, w - 8.0, h - 8.0, CARD);

        let title = "Snake Game";
        let m = measure_text(title, None, 36, 1.0);
        draw_text(title, (w - m.width) * 0.5, 40.0, 36.0, TEXT);

        let origin = self.canvas_origin();
        draw_texture(canvas, origin.x, origin.y, WHITE);
        draw_rectangle_lines(
            origin.x - 2.0,
            origin.y - 2.0,
            self.canvas_size + 4.0,
            self.canvas_size + 4.0,
            2.0,
            CANVAS_BORDER,
        );

        if session.is_paused() {
            let label = "Paused";
            let mp = measure_text(label, None, 32, 1.0);
            draw_text(
                label,
                origin.x + (self.canvas_size - mp.width) * 0.5,
                origin.y + self.canvas_size * 0.5,
                32.0,
                TEXT,
            );
        }

        let row = origin.y + self.canvas_size + 32.0;
        draw_text(&format!("Score: {}", session.score()), MARGIN, row, 26.0, TEXT);

        let clicked = self.draw_buttons(session, row);

        if session.is_game_over() {
            let banner = "Game Over!";
            let mb = measure_text(banner, None, 30, 1.0);
            draw_text(banner, (w - mb.width) * 0.5, row + 40.0, 30.0, GAME_OVER);

            let fin = format!("Final Score: {}", session.score());
            let mf = measure_text(&fin, None, 22, 1.0);
            draw_text(&fin, (w - mf.width) * 0.5, row + 66.0, 22.0, TEXT);
        }

        clicked
    }

    // right-aligned, in the order the session lists them
    fn draw_buttons(&self, session: &Session, row: f32) -> Option<Action> {
        let widths: Vec<f32> = session
            .controls()
            .iter()
            .map(|c| measure_text(c.label(), None, 16, 1.0).width + 24.0)
            .collect();
        let total: f32 = widths.iter().sum::<f32>() + 8.0 * (widths.len() as f32 - 1.0);

        let mut x = MARGIN + self.canvas_size - total;
        let mut clicked = None;
        for (control, width) in session.controls().iter().zip(widths) {
            if root_ui().button(Some(vec2(x, row - 18.0)), control.label()) {
                log::debug!("{} clicked", control.label());
                clicked = Some(control.action());
            }
            x += width + 8.0;
        }
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_fits_canvas_and_footer() {
        let (w, h) = Hud::new(400).window_size();
        assert_eq!(w, 448.0);
        assert_eq!(h, 592.0);
        assert_eq!(Hud::new(400).canvas_origin(), vec2(24.0, 56.0));
    }
}
