use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::{BrailleCanvas, DIGIT_HEIGHT};
use super::menu::{mode_controls, render_menu};
use super::overlay::{render_overlay, OverlayMessage};
use super::Palette;
use crate::game::{GameMode, GameState, RenderSnapshot, Side};
use crate::geometry;

// Layout: Top bar with scores, bordered playable area, bottom border
// Rows 0-4: Score area (Braille digits are 15px tall, 4 rows with padding)
// Row 5 on: Playable area, top border drawn on the last pixel row of the header
// Last row: Bottom border
const UI_HEADER_ROWS: u16 = 5;
const UI_FOOTER_ROWS: u16 = 1;
const MIN_PLAYABLE_ROWS: u16 = 4;
const MIN_WIDTH: u16 = 20;

/// Draw one frame for whatever screen the controller is on
pub fn render(frame: &mut Frame, snapshot: &RenderSnapshot, palette: &Palette) {
    match snapshot.state {
        GameState::Menu => render_menu(
            frame,
            snapshot.selected_mode,
            snapshot.winning_score,
            snapshot.difficulty,
            palette,
        ),
        GameState::Playing => render_field(frame, snapshot, palette),
        GameState::Paused => {
            render_field(frame, snapshot, palette);
            let message = OverlayMessage::new(
                vec!["PAUSED".to_string()],
                palette.accent,
                palette.foreground,
            );
            let area = frame.area();
            render_overlay(frame, &message, area);
        }
        GameState::GameOver => {
            render_field(frame, snapshot, palette);
            let headline = match (snapshot.mode, snapshot.winner) {
                (Some(mode), Some(side)) => winner_text(mode, side),
                _ => "GAME OVER",
            };
            let message = OverlayMessage::new(
                vec![
                    headline.to_string(),
                    format!("{} - {}", snapshot.score_left, snapshot.score_right),
                    "".to_string(),
                    "Enter: Menu  |  Q: Quit".to_string(),
                ],
                palette.accent,
                palette.foreground,
            )
            .with_title("Game Over");
            let area = frame.area();
            render_overlay(frame, &message, area);
        }
    }
}

/// Banner for the winning side, worded for who was playing
pub fn winner_text(mode: GameMode, winner: Side) -> &'static str {
    match (mode, winner) {
        (GameMode::Single, Side::Left) => "YOU WIN!",
        (GameMode::Single, Side::Right) => "AI WINS",
        (GameMode::TwoPlayer, Side::Left) => "PLAYER 1 WINS",
        (GameMode::TwoPlayer, Side::Right) => "PLAYER 2 WINS",
        (GameMode::Doubles, Side::Left) => "PLAYERS WIN!",
        (GameMode::Doubles, Side::Right) => "AI TEAM WINS",
    }
}

fn render_field(frame: &mut Frame, snapshot: &RenderSnapshot, palette: &Palette) {
    let area = frame.area();

    // Draw background (true black RGB, not terminal default)
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    if area.height < UI_HEADER_ROWS + UI_FOOTER_ROWS + MIN_PLAYABLE_ROWS || area.width < MIN_WIDTH
    {
        let message = Paragraph::new("Terminal too small")
            .style(Style::default().fg(palette.foreground))
            .alignment(Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);

    // Scores in the left and right quarters of the header
    let score_y = (UI_HEADER_ROWS as usize * 4).saturating_sub(DIGIT_HEIGHT) / 2;
    canvas.draw_number(snapshot.score_left, canvas.pixel_width() / 4, score_y);
    canvas.draw_number(snapshot.score_right, canvas.pixel_width() * 3 / 4, score_y);

    let playable_rows = area.height - UI_HEADER_ROWS - UI_FOOTER_ROWS;
    let field = Field {
        offset_y: UI_HEADER_ROWS as usize * 4,
        height: playable_rows as usize * 4,
        scale_x: canvas.pixel_width() as f32 / snapshot.court_width,
        scale_y: (playable_rows as usize * 4) as f32 / snapshot.court_height,
    };

    canvas.draw_horizontal_line(field.offset_y - 1);
    canvas.draw_horizontal_line(field.offset_y + field.height);

    let center_x = (snapshot.court_width / 2.0 * field.scale_x) as usize;
    canvas.draw_dashed_vertical_line(
        center_x,
        field.offset_y,
        field.offset_y + field.height,
        2,
        4,
    );

    for paddle in &snapshot.paddles {
        field.fill(&mut canvas, paddle);
    }
    if let Some(ball) = &snapshot.ball {
        field.fill(&mut canvas, ball);
    }

    render_braille_canvas(frame, &canvas, area, palette.foreground);

    if let Some(mode) = snapshot.mode {
        draw_header_text(frame, area, 1, mode.display_name(), palette.dim);
        let hint = format!("{}   Q: Quit", mode_controls(mode));
        draw_header_text(frame, area, 3, &hint, palette.dim);
    }
}

/// Court-to-pixel mapping for the playable area
struct Field {
    offset_y: usize,
    height: usize,
    scale_x: f32,
    scale_y: f32,
}

impl Field {
    fn fill(&self, canvas: &mut BrailleCanvas, rect: &geometry::Rect) {
        let x = (rect.x * self.scale_x).round().max(0.0) as usize;
        let y = (rect.y * self.scale_y).round().max(0.0) as usize;
        let width = (rect.width * self.scale_x).round().max(1.0) as usize;
        let height = (rect.height * self.scale_y).round().max(1.0) as usize;

        // Keep shapes inside the borders
        let y = y.min(self.height.saturating_sub(height));
        canvas.fill_rect(x, self.offset_y + y, width, height.min(self.height));
    }
}

fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect, color: Color) {
    for y in 0..canvas.height() {
        let paragraph =
            Paragraph::new(canvas.row_string(y)).style(Style::default().fg(color));

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };

        frame.render_widget(paragraph, row_area);
    }
}

fn draw_header_text(frame: &mut Frame, area: Rect, row: u16, text: &str, color: Color) {
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);

    let text_area = Rect {
        x: area.x,
        y: area.y + row,
        width: area.width,
        height: 1,
    };

    frame.render_widget(paragraph, text_area);
}
