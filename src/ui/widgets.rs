//! Reusable UI widgets
//!
//! Contains small drawing helpers shared by the screens:
//! - Rounded icon buttons and avatar cards
//! - Single-line centered labels
//! - Status bar

use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

/// Render a rounded bordered box with a centered one-line label inside
pub fn render_round_button(
    frame: &mut Frame,
    label: &str,
    label_style: Style,
    border_style: Style,
    area: Rect,
) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    render_centered_line(frame, Line::styled(label.to_string(), label_style), inner);
}

/// Render one line horizontally and vertically centered in `area`
pub fn render_centered_line(frame: &mut Frame, line: Line, area: Rect) {
    if area.height == 0 {
        return;
    }

    let row = Rect {
        x: area.x,
        y: area.y + (area.height - 1) / 2,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

/// Fill `area` with a style
pub fn fill(frame: &mut Frame, style: Style, area: Rect) {
    frame.render_widget(Block::default().style(style), area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };

    // Clear the line first
    frame.render_widget(Clear, status_area);
    fill(frame, theme.text_dim(), status_area);

    // Left side
    let left_widget = Paragraph::new(left_content)
        .style(theme.text_dim());

    // Right side
    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: status_area.height,
    };
    let right_widget = Paragraph::new(Line::from(vec![
        Span::styled(right_content.to_string(), theme.text_dim()),
        Span::raw(" "),
    ]));

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        let rect = centered_rect(26, 8, area);

        assert_eq!(rect.x, 5);
        assert_eq!(rect.y, 5);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.height, 4);
    }
}
