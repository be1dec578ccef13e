//! Application state and event handling
//!
//! This is the core of homefeed, managing:
//! - The navigator and the mounted screen
//! - Keyboard focus on the Home screen
//! - Key and mouse dispatch

use crate::config::Config;
use crate::navigator::Navigator;
use crate::types::{footer_index, Route, ACTION_ICONS, FOOTER_ICONS, HEADER_ICONS};
use crate::ui::{layout, Theme};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::path::PathBuf;

/// Section of the Home screen that receives arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    Profiles,
    Actions,
    #[default]
    Footer,
}

impl HomeFocus {
    pub fn next(&self) -> Self {
        match self {
            HomeFocus::Profiles => HomeFocus::Actions,
            HomeFocus::Actions => HomeFocus::Footer,
            HomeFocus::Footer => HomeFocus::Profiles,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            HomeFocus::Profiles => HomeFocus::Footer,
            HomeFocus::Actions => HomeFocus::Profiles,
            HomeFocus::Footer => HomeFocus::Actions,
        }
    }
}

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub navigator: Navigator,
    pub config: Config,
    pub theme: Theme,

    /// Where theme changes are persisted; `None` keeps them in memory
    pub config_path: Option<PathBuf>,

    /// Mouse capture for this run; a `--no-mouse` override is never saved
    pub mouse: bool,

    /// One-shot message shown in the status bar until the next key
    pub flash: Option<String>,

    /// Terminal area of the last draw, used for hit-testing and scrolling
    pub viewport: Rect,

    // Home screen state
    pub focus: HomeFocus,
    pub profile_offset: usize,
    pub action_cursor: usize,
    pub footer_cursor: usize,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let theme = Theme::from_name(config.theme);
        let navigator = Navigator::with_policy(config.duplicate_routes);

        Self {
            should_quit: false,
            mouse: config.mouse,
            flash: None,
            footer_cursor: footer_index(navigator.current()),
            navigator,
            config,
            theme,
            config_path,
            viewport: Rect::default(),
            focus: HomeFocus::default(),
            profile_offset: 0,
            action_cursor: 0,
        }
    }

    /// The mounted screen
    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// Navigate and keep the footer cursor on the mounted route
    pub fn navigate(&mut self, route: Route) {
        self.navigator.navigate(route);
        self.sync_footer_cursor();
    }

    pub fn go_back(&mut self) {
        self.navigator.go_back();
        self.sync_footer_cursor();
    }

    fn sync_footer_cursor(&mut self) {
        self.footer_cursor = footer_index(self.route());
    }

    /// Switch to the next theme and persist it. A failed save keeps the
    /// new theme for this run and reports it in the status bar.
    pub fn cycle_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        self.theme = Theme::from_name(self.config.theme);
        tracing::info!(theme = self.config.theme.as_str(), "theme changed");

        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!(error = ?e, "could not save theme");
                self.flash = Some(format!("Theme not saved: {:#}", e));
            }
        }
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.flash = None;

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('t') => {
                self.cycle_theme();
                return Ok(());
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.go_back();
                return Ok(());
            }
            _ => {}
        }

        if self.route().is_home() {
            self.handle_home_key(key);
        } else {
            self.handle_placeholder_key(key);
        }
        Ok(())
    }

    fn handle_placeholder_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('b') | KeyCode::Enter = key.code {
            self.go_back();
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.navigate(FOOTER_ICONS[index].target);
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1),
            KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            HomeFocus::Profiles => self.scroll_profiles(delta),
            HomeFocus::Actions => {
                self.action_cursor = step(self.action_cursor, delta, ACTION_ICONS.len());
            }
            HomeFocus::Footer => {
                self.footer_cursor = step(self.footer_cursor, delta, FOOTER_ICONS.len());
            }
        }
    }

    fn activate_focused(&mut self) {
        match self.focus {
            HomeFocus::Footer => self.navigate(FOOTER_ICONS[self.footer_cursor].target),
            HomeFocus::Actions => {
                let icon = &ACTION_ICONS[self.action_cursor];
                tracing::trace!(action = icon.label, asset = icon.image.path(), "action pressed");
            }
            HomeFocus::Profiles => {}
        }
    }

    fn home_layout(&self) -> layout::HomeLayout {
        layout::home(layout::root(self.viewport).content)
    }

    /// Profile offset limited to what fits in `carousel`
    pub fn clamped_profile_offset(&self, carousel: Rect) -> usize {
        self.profile_offset.min(layout::max_profile_offset(carousel))
    }

    fn scroll_profiles(&mut self, delta: isize) {
        let carousel = self.home_layout().carousel;
        let max = layout::max_profile_offset(carousel);
        let offset = self.clamped_profile_offset(carousel);
        self.profile_offset = step(offset, delta, max + 1);
    }

    /// Handle mouse event against the last drawn viewport
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let content = layout::root(self.viewport).content;
        let (column, row) = (mouse.column, mouse.row);

        if !self.route().is_home() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                if layout::hit(&[layout::back_button(content)], column, row).is_some() {
                    self.go_back();
                }
            }
            return Ok(());
        }

        let home = self.home_layout();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(i) = layout::hit(&layout::footer_slots(home.footer), column, row) {
                    self.focus = HomeFocus::Footer;
                    self.navigate(FOOTER_ICONS[i].target);
                } else if let Some(i) = layout::hit(&layout::action_slots(home.actions), column, row) {
                    self.focus = HomeFocus::Actions;
                    self.action_cursor = i;
                    let icon = &ACTION_ICONS[i];
                    tracing::trace!(action = icon.label, asset = icon.image.path(), "action pressed");
                } else if let Some(i) = layout::hit(&layout::header_slots(home.header), column, row) {
                    let icon = &HEADER_ICONS[i];
                    tracing::trace!(icon = icon.label, asset = icon.image.path(), "header icon pressed");
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight
                if layout::hit(&[home.carousel], column, row).is_some() =>
            {
                self.scroll_profiles(1);
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft
                if layout::hit(&[home.carousel], column, row).is_some() =>
            {
                self.scroll_profiles(-1);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Move `value` by `delta`, staying inside `0..len`
fn step(value: usize, delta: isize, len: usize) -> usize {
    let max = len.saturating_sub(1);
    value.saturating_add_signed(delta).min(max)
}
