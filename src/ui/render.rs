//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - The mounted screen (Home or a placeholder)
//! - Status bar with key hints and the history trail

use crate::app::{App, HomeFocus};
use crate::types::{
    FooterIcon, Route, ACTION_ICONS, FOOTER_ICONS, HEADER_ICONS, HERO_IMAGE, PROFILES,
};
use crate::ui::{layout, theme::Theme, widgets};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let root = layout::root(area);

    // Exactly one screen is mounted
    match app.route() {
        Route::Home => render_home(frame, app, root.content),
        route => render_placeholder(frame, route, &app.theme, root.content),
    }

    render_status_bar(frame, app, root.status);
}

/// Render status bar with keybindings and the history trail
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.route().is_home() {
        "[1-5] Go  [Tab] Focus  [h/l] Move  [Enter] Open  [t] Theme  [q] Quit"
    } else {
        "[Esc] Back  [t] Theme  [q] Quit"
    };

    let left = app.flash.as_deref().unwrap_or(hints);
    let trail: Vec<&str> = app.navigator.history().iter().map(|r| r.name()).collect();
    widgets::render_status_bar(frame, left, &trail.join(" › "), &app.theme, area);
}

// === SCREEN RENDERERS ===

/// Placeholder screen: centered label and a Back button
fn render_placeholder(frame: &mut Frame, route: Route, theme: &Theme, area: Rect) {
    widgets::fill(frame, theme.block_style(), area);

    let label = Paragraph::new(Line::styled(route.title(), theme.title()))
        .alignment(Alignment::Center);
    let label_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    };
    frame.render_widget(label, label_area);

    let back = Paragraph::new("Back")
        .style(theme.button())
        .alignment(Alignment::Center);
    frame.render_widget(back, layout::back_button(area));
}

/// Home screen: header, carousel, divider, hero, actions, footer
fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let home = layout::home(area);

    widgets::fill(frame, theme.block_style(), area);

    render_header_icons(frame, theme, home.header);
    render_carousel(frame, app, home.carousel);
    render_divider(frame, theme, home.divider);
    render_hero(frame, theme, home.hero);
    render_actions(frame, app, home.actions);
    render_footer(frame, app, home.footer);
}

fn render_header_icons(frame: &mut Frame, theme: &Theme, area: Rect) {
    for (icon, slot) in HEADER_ICONS.iter().zip(layout::header_slots(area)) {
        let widget = Paragraph::new(icon.image.glyph())
            .style(theme.text())
            .alignment(Alignment::Center);
        frame.render_widget(widget, slot);
    }
}

/// Horizontally scrollable profile cards
fn render_carousel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let offset = app.clamped_profile_offset(area);
    let focused = app.focus == HomeFocus::Profiles;

    let border_style = if focused { theme.focused() } else { theme.border() };

    for (index, card) in layout::profile_cards(area, offset) {
        render_profile_card(frame, index, border_style, theme, card);
    }

    // Scroll hints
    if area.height < 2 || area.width < 2 {
        return;
    }
    let arrow_row = area.y + 1;
    if offset > 0 {
        let left = Rect { x: area.x, y: arrow_row, width: 1, height: 1 };
        frame.render_widget(Paragraph::new("‹").style(theme.text_dim()), left);
    }
    if offset + layout::visible_profiles(area) < PROFILES.len() {
        let right = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: arrow_row,
            width: 1,
            height: 1,
        };
        frame.render_widget(Paragraph::new("›").style(theme.text_dim()), right);
    }
}

fn render_profile_card(frame: &mut Frame, index: usize, border_style: Style, theme: &Theme, card: Rect) {
    let profile = &PROFILES[index];

    let avatar = Rect { height: 3u16.min(card.height), ..card };
    // badge is drawn over the avatar
    let (label, label_style) = match profile.badge() {
        Some(badge) => (badge, theme.badge()),
        None => (profile.image.glyph(), theme.text()),
    };
    widgets::render_round_button(frame, label, label_style, border_style, avatar);

    if card.height > 3 {
        let name_area = Rect { y: card.y + 3, height: 1, ..card };
        let name = Paragraph::new(profile.name)
            .style(theme.profile_name())
            .alignment(Alignment::Center);
        frame.render_widget(name, name_area);
    }
}

/// Green line with a dot at each end
fn render_divider(frame: &mut Frame, theme: &Theme, area: Rect) {
    let line = layout::divider_line(area);
    if line.width < 2 {
        return;
    }

    let text = format!("●{}●", "─".repeat(line.width as usize - 2));
    frame.render_widget(Paragraph::new(text).style(theme.divider()), line);
}

/// Decorative hero image on a red panel
fn render_hero(frame: &mut Frame, theme: &Theme, area: Rect) {
    widgets::fill(frame, theme.hero(), area);

    let art = HERO_IMAGE.art();
    let art_width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;

    if !art.is_empty() && art_width <= area.width && art.len() as u16 <= area.height {
        let art_area = widgets::centered_rect(art_width, art.len() as u16, area);
        let lines: Vec<Line> = art.iter().map(|l| Line::raw(*l)).collect();
        frame.render_widget(Paragraph::new(lines).style(theme.hero()), art_area);
    } else {
        widgets::render_centered_line(
            frame,
            Line::styled(HERO_IMAGE.glyph(), theme.hero()),
            area,
        );
    }
}

/// Row of circular action buttons
fn render_actions(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == HomeFocus::Actions;

    for (i, (icon, slot)) in ACTION_ICONS.iter().zip(layout::action_slots(area)).enumerate() {
        let border_style = if focused && i == app.action_cursor {
            theme.focused()
        } else {
            theme.border()
        };
        widgets::render_round_button(frame, icon.image.glyph(), theme.text(), border_style, slot);
    }
}

/// Footer of tab buttons; the button for the mounted route is highlighted
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let current = app.route();
    let cursor = (app.focus == HomeFocus::Footer).then_some(app.footer_cursor);

    let block = Block::default()
        .style(theme.footer())
        .borders(Borders::TOP)
        .border_type(BorderType::Rounded)
        .border_style(theme.footer());
    frame.render_widget(block, area);

    for (i, (icon, slot)) in FOOTER_ICONS.iter().zip(layout::footer_slots(area)).enumerate() {
        let style = footer_icon_style(theme, icon, current, cursor == Some(i));
        let label = Line::from(vec![
            Span::styled(format!(" {} ", icon.image.glyph()), style),
            Span::styled(format!("{} ", icon.target.name()), style),
        ]);
        widgets::render_centered_line(frame, label, slot);
    }
}

/// Style for one footer button
pub fn footer_icon_style(theme: &Theme, icon: &FooterIcon, current: Route, has_cursor: bool) -> Style {
    if icon.is_active(current) {
        theme.footer_active()
    } else if has_cursor {
        theme.footer_cursor()
    } else {
        theme.footer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn placeholder_titles() -> Vec<&'static str> {
        Route::all()
            .iter()
            .filter(|r| !r.is_home())
            .map(|r| r.title())
            .collect()
    }

    fn app_on(route: Route) -> App {
        let mut app = App::new(Config::default(), None);
        app.navigate(route);
        app
    }

    #[test]
    fn test_one_screen_mounted_per_route() {
        for route in Route::all() {
            let app = app_on(*route);
            let text = buffer_text(&draw(&app, 80, 30));

            let shown: Vec<&str> = placeholder_titles()
                .into_iter()
                .filter(|title| text.contains(title))
                .collect();

            if route.is_home() {
                assert!(shown.is_empty(), "{shown:?}");
                assert!(text.contains("15+"));
            } else {
                assert_eq!(shown, vec![route.title()]);
                assert!(text.contains("Back"));
                assert!(!text.contains("15+"));
            }
        }
    }

    #[test]
    fn test_badge_drawn_once() {
        let app = App::new(Config::default(), None);
        let text = buffer_text(&draw(&app, 80, 30));

        assert_eq!(text.matches("15+").count(), 1);
        for profile in &PROFILES {
            assert!(text.contains(profile.name), "{}", profile.name);
        }
    }

    #[test]
    fn test_exactly_one_footer_icon_active() {
        let theme = Theme::light();
        for route in Route::all() {
            for cursor in 0..FOOTER_ICONS.len() {
                let active = FOOTER_ICONS
                    .iter()
                    .enumerate()
                    .filter(|(i, icon)| {
                        footer_icon_style(&theme, icon, *route, *i == cursor) == theme.footer_active()
                    })
                    .count();
                assert_eq!(active, 1, "{route} cursor {cursor}");
            }
        }
    }

    #[test]
    fn test_home_footer_highlight_lands_on_home_slot() {
        let app = App::new(Config::default(), None);
        let buffer = draw(&app, 80, 30);
        let area = Rect::new(0, 0, 80, 30);
        let footer = layout::home(layout::root(area).content).footer;
        let slots = layout::footer_slots(footer);

        let active_bg = app.theme.active_bg;
        let highlighted: Vec<usize> = (footer.y..footer.y + footer.height)
            .flat_map(|y| (footer.x..footer.x + footer.width).map(move |x| (x, y)))
            .filter(|&(x, y)| buffer.content()[buffer.index_of(x, y)].bg == active_bg)
            .filter_map(|(x, y)| layout::hit(&slots, x, y))
            .collect();

        assert!(!highlighted.is_empty());
        assert!(highlighted.iter().all(|&slot| slot == 2));
    }

    #[test]
    fn test_status_bar_shows_history() {
        let mut app = App::new(Config::default(), None);
        app.navigate(Route::Search);
        app.navigate(Route::Friends);
        let text = buffer_text(&draw(&app, 80, 30));
        assert!(text.contains("Home › Search › Friends"));
    }

    #[test]
    fn test_narrow_terminal_scrolls_badge_into_view() {
        let mut app = App::new(Config::default(), None);
        let text = buffer_text(&draw(&app, 30, 30));
        assert!(!text.contains("15+"));

        app.profile_offset = PROFILES.len();
        let text = buffer_text(&draw(&app, 30, 30));
        assert!(text.contains("15+"));
        assert!(text.contains("More"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut app = App::new(Config::default(), None);
        app.flash = Some("Theme not saved".to_string());
        let text = buffer_text(&draw(&app, 80, 30));
        assert!(text.contains("Theme not saved"));
        assert!(!text.contains("[1-5] Go"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        for route in Route::all() {
            let app = app_on(*route);
            draw(&app, 4, 3);
            draw(&app, 1, 1);
        }
    }
}
