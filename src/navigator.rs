//! Screen navigation
//!
//! The [`Navigator`] owns the history stack. The top entry is the mounted
//! screen; the bottom entry is always the initial route and is never popped.

use crate::types::Route;
use serde::{Deserialize, Serialize};

/// What `navigate` does when asked for the route already on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Leave history untouched
    #[default]
    Ignore,
    /// Push another entry for the same route
    Push,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
    policy: DuplicatePolicy,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on Home
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            history: vec![Route::Home],
            policy,
        }
    }

    /// The mounted route
    pub fn current(&self) -> Route {
        // history is never empty
        self.history.last().copied().unwrap_or_default()
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Push `route` and make it current. Returns whether history changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        let from = self.current();
        if from == route && self.policy == DuplicatePolicy::Ignore {
            tracing::trace!(%route, "navigate to current route ignored");
            return false;
        }

        self.history.push(route);
        tracing::debug!(%from, to = %route, depth = self.history.len(), "navigate");
        true
    }

    /// Pop to the previous route. Does nothing on the initial route.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            tracing::trace!("go_back at root ignored");
            return false;
        }

        let from = self.history.pop().unwrap_or_default();
        tracing::debug!(%from, to = %self.current(), depth = self.history.len(), "go back");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Route::Home);
        assert_eq!(nav.history(), &[Route::Home]);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_navigate_to_every_route() {
        for route in Route::all() {
            let mut nav = Navigator::new();
            nav.navigate(*route);
            assert_eq!(nav.current(), *route);
        }
    }

    #[test]
    fn test_go_back_at_root_is_inert() {
        let mut nav = Navigator::new();
        for _ in 0..10 {
            assert!(!nav.go_back());
        }
        assert_eq!(nav.current(), Route::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_back_returns_to_previous() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Search);
        nav.navigate(Route::Friends);
        assert!(nav.go_back());
        assert_eq!(nav.current(), Route::Search);
        assert!(nav.go_back());
        assert_eq!(nav.current(), Route::Home);
        assert!(!nav.go_back());
        assert_eq!(nav.current(), Route::Home);
    }

    #[test]
    fn test_duplicate_ignored_by_default() {
        let mut nav = Navigator::new();
        assert!(nav.navigate(Route::Chat));
        assert!(!nav.navigate(Route::Chat));
        assert_eq!(nav.history(), &[Route::Home, Route::Chat]);

        // Home on top of Home is ignored as well
        let mut nav = Navigator::new();
        assert!(!nav.navigate(Route::Home));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_duplicate_push_policy() {
        let mut nav = Navigator::with_policy(DuplicatePolicy::Push);
        nav.navigate(Route::Chat);
        assert!(nav.navigate(Route::Chat));
        assert_eq!(nav.depth(), 3);
        nav.go_back();
        assert_eq!(nav.current(), Route::Chat);
        nav.go_back();
        assert_eq!(nav.current(), Route::Home);
    }

    #[test]
    fn test_revisiting_route_pushes() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Search);
        nav.navigate(Route::Home);
        nav.navigate(Route::Search);
        assert_eq!(
            nav.history(),
            &[Route::Home, Route::Search, Route::Home, Route::Search]
        );
    }
}
