//! Terminal rendering module
//!
//! Draws a `Snapshot` with ratatui: HUD line, playfield, help line, and the
//! modal message box when one is up.

pub mod field;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::sim::{ModalMessage, Snapshot};

const SCORE_RED: Color = Color::Rgb(255, 0, 0);
const PANEL_BG: Color = Color::Rgb(0, 0, 0);
const MESSAGE_GRAY: Color = Color::Rgb(185, 185, 185);

/// Render one frame. `fps` is shown when present.
pub fn render(frame: &mut Frame, snapshot: &Snapshot, fps: Option<u32>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(204, 102, 0)))
        .title(" Ice Cold Beer ")
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(hud_line(snapshot, fps)), chunks[0]);

    let grid = field::rasterize(snapshot, chunks[1].width as usize, chunks[1].height as usize);
    let lines: Vec<Line<'static>> = grid
        .into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    let help = Line::from(vec![
        Span::styled(" 1/q ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled("left up/down ", Style::default().fg(Color::DarkGray)),
        Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("=/[ ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled("right up/down ", Style::default().fg(Color::DarkGray)),
        Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Esc ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled("quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(help), chunks[2]);

    if let Some(message) = snapshot.message {
        render_message(frame, area, message);
    }
}

fn hud_line(snapshot: &Snapshot, fps: Option<u32>) -> Line<'static> {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(SCORE_RED)
        .bg(PANEL_BG)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" Balls ", label),
        Span::styled(snapshot.balls_text.clone(), value),
        Span::styled("  Score ", label),
        Span::styled(snapshot.current_score_text.clone(), value),
        Span::styled("  Total ", label),
        Span::styled(snapshot.total_text.clone(), value),
    ];
    if let Some(fps) = fps {
        spans.push(Span::styled(format!("  {fps} fps"), Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn render_message(frame: &mut Frame, area: Rect, message: ModalMessage) {
    let text = message.body();
    let text_width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let text_height = text.lines().count() as u16;

    let overlay_w = (text_width + 4).min(area.width.saturating_sub(2));
    let overlay_h = (text_height + 2).min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(overlay_w) / 2;
    let y = area.y + area.height.saturating_sub(overlay_h) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(MESSAGE_GRAY))
        .style(Style::default().bg(PANEL_BG));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(MESSAGE_GRAY).bg(PANEL_BG));
    frame.render_widget(p, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    use crate::settings::Tuning;
    use crate::sim::GameState;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_hud_and_intro() {
        let state = GameState::new(Tuning::default()).unwrap();
        let snapshot = Snapshot::capture(&state);

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| render(frame, &snapshot, Some(30))).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Balls 3"));
        assert!(text.contains("Score 100"));
        assert!(text.contains("Total 0000"));
        assert!(text.contains("30 fps"));
        assert!(text.contains("Ice Cold Beer"));
        assert!(text.contains("Press [SPACE] to begin."));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = GameState::new(Tuning::default()).unwrap();
        let snapshot = Snapshot::capture(&state);
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        terminal.draw(|frame| render(frame, &snapshot, None)).unwrap();
    }
}
