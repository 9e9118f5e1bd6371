// Overlay message system for displaying centered text on screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A message to display as an overlay in the center of the screen
#[derive(Debug, Clone)]
pub struct OverlayMessage {
    /// Lines of text to display; the first one is the headline
    pub lines: Vec<String>,
    /// Optional title for the overlay box
    pub title: Option<String>,
    /// Border and headline color
    pub accent: Color,
    /// Body text color
    pub text: Color,
}

impl OverlayMessage {
    pub fn new(lines: Vec<String>, accent: Color, text: Color) -> Self {
        Self {
            lines,
            title: None,
            accent,
            text,
        }
    }

    /// Set the title for this message
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Outer size of the box for this message, before clamping to the screen
    fn size(&self) -> (u16, u16) {
        let max_line_length = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .chain(self.title.iter().map(|t| t.chars().count() + 2))
            .max()
            .unwrap_or(0);

        // Padding for borders and spacing
        (max_line_length as u16 + 6, self.lines.len() as u16 + 4)
    }
}

/// Area of `area` an overlay of the given size occupies, centered and clamped
pub fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4)).max(1);
    let height = height.min(area.height.saturating_sub(2)).max(1);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render an overlay message in the center of `area`
pub fn render_overlay(frame: &mut Frame, message: &OverlayMessage, area: Rect) {
    let (width, height) = message.size();
    let overlay_area = centered_area(area, width, height);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(message.accent))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    if let Some(ref title) = message.title {
        block = block.title(format!(" {} ", title));
    }

    frame.render_widget(block, overlay_area);

    let inner_area = overlay_area.inner(ratatui::layout::Margin::new(2, 1));

    let text_lines: Vec<Line> = message
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 0 {
                Style::default()
                    .fg(message.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(message.text)
            };
            Line::from(Span::styled(line.clone(), style))
        })
        .collect();

    let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);

    frame.render_widget(paragraph, inner_area);
}
