//! Screen geometry
//!
//! Both the renderer and mouse hit-testing go through these functions, so a
//! click always lands on what was drawn there.

use crate::types::{ACTION_ICONS, FOOTER_ICONS, HEADER_ICONS, PROFILES};
use ratatui::layout::{Constraint, Layout, Rect};

/// Width of one profile card including its gap
pub const CARD_WIDTH: u16 = 9;
/// Avatar box (3 rows) plus the name row
pub const CARD_HEIGHT: u16 = 4;
/// Rounded action button
pub const ACTION_BUTTON: (u16, u16) = (7, 3);
/// Header icon button
pub const HEADER_BUTTON_WIDTH: u16 = 3;

/// Regions of the whole terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootLayout {
    pub content: Rect,
    pub status: Rect,
}

/// Regions of the Home screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub header: Rect,
    pub carousel: Rect,
    pub divider: Rect,
    pub hero: Rect,
    pub actions: Rect,
    pub footer: Rect,
}

pub fn root(area: Rect) -> RootLayout {
    let [content, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    RootLayout { content, status }
}

pub fn home(area: Rect) -> HomeLayout {
    let [header, carousel, divider, hero, actions, footer] = Layout::vertical([
        Constraint::Length(1),           // Header icons
        Constraint::Length(CARD_HEIGHT), // Profile carousel
        Constraint::Length(1),           // Green line
        Constraint::Min(3),              // Hero image
        Constraint::Length(ACTION_BUTTON.1),
        Constraint::Length(3),           // Footer
    ])
    .areas(area);

    HomeLayout {
        header,
        carousel,
        divider,
        hero,
        actions,
        footer,
    }
}

/// Header buttons, right aligned with a two-column margin
pub fn header_slots(header: Rect) -> Vec<Rect> {
    let count = HEADER_ICONS.len() as u16;
    let total = count * HEADER_BUTTON_WIDTH + count.saturating_sub(1);
    let start = header.x + header.width.saturating_sub(total + 2);

    (0..count)
        .map(|i| Rect {
            x: start + i * (HEADER_BUTTON_WIDTH + 1),
            y: header.y,
            width: HEADER_BUTTON_WIDTH.min(header.width),
            height: header.height.min(1),
        })
        .collect()
}

/// Strip between the scroll arrows where cards are drawn
pub fn carousel_track(carousel: Rect) -> Rect {
    Rect {
        x: carousel.x + 1,
        y: carousel.y,
        width: carousel.width.saturating_sub(2),
        height: carousel.height,
    }
}

/// Number of whole cards that fit in the carousel
pub fn visible_profiles(carousel: Rect) -> usize {
    ((carousel_track(carousel).width / CARD_WIDTH) as usize).min(PROFILES.len())
}

/// Largest scroll offset that still fills the track
pub fn max_profile_offset(carousel: Rect) -> usize {
    PROFILES.len().saturating_sub(visible_profiles(carousel))
}

/// Card rects for the profiles currently in view, paired with their index
pub fn profile_cards(carousel: Rect, offset: usize) -> Vec<(usize, Rect)> {
    let track = carousel_track(carousel);
    let visible = visible_profiles(carousel);

    (offset..PROFILES.len())
        .take(visible)
        .enumerate()
        .map(|(slot, index)| {
            let rect = Rect {
                x: track.x + slot as u16 * CARD_WIDTH + 1,
                y: track.y,
                width: CARD_WIDTH - 2,
                height: track.height,
            };
            (index, rect)
        })
        .collect()
}

/// Green divider spans 90% of the width
pub fn divider_line(divider: Rect) -> Rect {
    let width = divider.width - divider.width / 10;
    Rect {
        x: divider.x + (divider.width - width) / 2,
        y: divider.y,
        width,
        height: divider.height.min(1),
    }
}

/// Action buttons centered in equal slots
pub fn action_slots(actions: Rect) -> Vec<Rect> {
    equal_slots(actions, ACTION_ICONS.len())
        .into_iter()
        .map(|slot| {
            let (w, h) = ACTION_BUTTON;
            centered_in(slot, w.min(slot.width), h.min(slot.height))
        })
        .collect()
}

/// Footer buttons, one equal slot per icon
pub fn footer_slots(footer: Rect) -> Vec<Rect> {
    equal_slots(footer, FOOTER_ICONS.len())
}

/// Back button in the top-left corner of a placeholder screen
pub fn back_button(area: Rect) -> Rect {
    Rect {
        x: area.x + 2u16.min(area.width),
        y: area.y + 1u16.min(area.height),
        width: 8u16.min(area.width.saturating_sub(2)),
        height: 1u16.min(area.height.saturating_sub(1)),
    }
}

/// Index of the first rect containing the point
pub fn hit(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    rects.iter().position(|r| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    })
}

fn equal_slots(area: Rect, count: usize) -> Vec<Rect> {
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::horizontal(constraints).split(area).to_vec()
}

fn centered_in(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
