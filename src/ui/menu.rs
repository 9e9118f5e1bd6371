// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ai::Difficulty;
use crate::game::GameMode;

use super::Palette;

const TITLE: [&str; 5] = [
    "██████╗  ██████╗ ███╗   ██╗ ██████╗ ",
    "██╔══██╗██╔═══██╗████╗  ██║██╔════╝ ",
    "██████╔╝██║   ██║██╔██╗ ██║██║  ███╗",
    "██╔═══╝ ██║   ██║██║╚██╗██║██║   ██║",
    "██║     ╚██████╔╝██║ ╚████║╚██████╔╝",
];

const MODES: [GameMode; 3] = [GameMode::Single, GameMode::TwoPlayer, GameMode::Doubles];

/// Controls line shown under the mode list
pub fn mode_controls(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Single => "P1: W/S",
        GameMode::TwoPlayer => "P1: W/S   P2: ↑/↓",
        GameMode::Doubles => "P1: W/A/S/D   P2: Arrow keys",
    }
}

/// Render the main menu with `selected` highlighted
pub fn render_menu(
    frame: &mut Frame,
    selected: GameMode,
    winning_score: u32,
    difficulty: Difficulty,
    palette: &Palette,
) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE.len() as u16 + 2), // Title
            Constraint::Min(6),                         // Mode list
            Constraint::Length(2),                      // Controls hint
        ])
        .split(area);

    let mut title_text = vec![Line::from("")];
    title_text.extend(TITLE.iter().map(|row| {
        Line::from(Span::styled(
            *row,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }));
    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let mut menu_items: Vec<Line> = MODES
        .iter()
        .map(|mode| {
            let is_selected = *mode == selected;
            let prefix = if is_selected { "> " } else { "  " };
            let text = format!("{}{}", prefix, mode.display_name());

            if is_selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(palette.foreground)))
            }
        })
        .collect();

    menu_items.push(Line::from(""));
    menu_items.push(Line::from(Span::styled(
        mode_controls(selected),
        Style::default().fg(palette.dim),
    )));
    menu_items.push(Line::from(Span::styled(
        format!(
            "First to {} points   AI: {}",
            winning_score,
            difficulty.display_name()
        ),
        Style::default().fg(palette.dim),
    )));

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    let controls = vec![Line::from(vec![
        Span::styled("Space/Tab", Style::default().fg(palette.foreground)),
        Span::styled(": Change mode  ", Style::default().fg(palette.dim)),
        Span::styled("Enter", Style::default().fg(palette.foreground)),
        Span::styled(": Start  ", Style::default().fg(palette.dim)),
        Span::styled("Q/Esc", Style::default().fg(palette.foreground)),
        Span::styled(": Quit", Style::default().fg(palette.dim)),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_menu_lists_every_mode() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render_menu(f, GameMode::Doubles, 10, Difficulty::Hard, &Palette::default()))
            .unwrap();

        let text = buffer_text(&terminal);
        for mode in MODES {
            assert!(text.contains(mode.display_name()));
        }
        assert!(text.contains("> Doubles"));
        assert!(text.contains("First to 10 points"));
        assert!(text.contains("AI: Hard"));
    }
}
