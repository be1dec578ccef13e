//! Core data types for homefeed
//!
//! Routes plus the static tables the Home screen is drawn from.

use crate::assets::Asset;
use std::fmt;
use std::str::FromStr;

/// One of the five screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Search,
    Friends,
    Chat,
    Profile,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::Search, Route::Friends, Route::Chat, Route::Profile]
    }

    /// Route name as registered with the navigator
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Search => "Search",
            Route::Friends => "Friends",
            Route::Chat => "Chat",
            Route::Profile => "Profile",
        }
    }

    /// Label shown by the screen itself
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home Screen",
            Route::Search => "Search Screen",
            Route::Friends => "Friends Screen",
            Route::Chat => "Chat Screen",
            Route::Profile => "Profile Screen",
        }
    }

    pub fn is_home(&self) -> bool {
        *self == Route::Home
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a route name outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl fmt::Display for UnknownRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Route::all().iter().map(|r| r.name()).collect();
        write!(f, "unknown route '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownRoute {}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::all()
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

/// Avatar in the profile carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub image: Asset,
}

impl Profile {
    /// Counter shown over the avatar; only the "More" entry has one
    pub fn badge(&self) -> Option<&'static str> {
        (self.name == "More").then_some("15+")
    }
}

/// Circular button in the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionIcon {
    pub image: Asset,
    pub label: &'static str,
}

/// Tab button in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterIcon {
    pub image: Asset,
    pub target: Route,
}

impl FooterIcon {
    pub fn is_active(&self, current: Route) -> bool {
        self.target == current
    }
}

/// Icon button in the Home header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderIcon {
    pub image: Asset,
    pub label: &'static str,
}

pub static PROFILES: [Profile; 5] = [
    Profile { name: "Barbie", image: Asset::Barbie },
    Profile { name: "Donald", image: Asset::DonaldDuck },
    Profile { name: "Emily", image: Asset::Emily },
    Profile { name: "Lily", image: Asset::Lily },
    Profile { name: "More", image: Asset::More },
];

pub static ACTION_ICONS: [ActionIcon; 4] = [
    ActionIcon { image: Asset::Microphone, label: "Sing" },
    ActionIcon { image: Asset::ChatBubble, label: "Chat" },
    ActionIcon { image: Asset::Sketch, label: "Draw" },
    ActionIcon { image: Asset::Dancing, label: "Dance" },
];

/// Footer buttons in display order (Home sits in the middle)
pub static FOOTER_ICONS: [FooterIcon; 5] = [
    FooterIcon { image: Asset::SearchIcon, target: Route::Search },
    FooterIcon { image: Asset::FriendsIcon, target: Route::Friends },
    FooterIcon { image: Asset::HomeIcon, target: Route::Home },
    FooterIcon { image: Asset::ChatIcon, target: Route::Chat },
    FooterIcon { image: Asset::ProfileIcon, target: Route::Profile },
];

pub static HEADER_ICONS: [HeaderIcon; 2] = [
    HeaderIcon { image: Asset::Heart, label: "Likes" },
    HeaderIcon { image: Asset::Notification, label: "Alerts" },
];

/// Hero image on the Home screen
pub const HERO_IMAGE: Asset = Asset::MickeyMouse;

/// Position of a route's button in the footer
pub fn footer_index(route: Route) -> usize {
    FOOTER_ICONS
        .iter()
        .position(|icon| icon.target == route)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parse() {
        assert_eq!("search".parse::<Route>(), Ok(Route::Search));
        assert_eq!(" Profile ".parse::<Route>(), Ok(Route::Profile));
        assert!("settings".parse::<Route>().is_err());
    }

    #[test]
    fn test_unknown_route_lists_names() {
        let err = "nope".parse::<Route>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("nope"));
        assert!(msg.contains("Home, Search, Friends, Chat, Profile"));
    }

    #[test]
    fn test_only_more_has_badge() {
        let badged: Vec<&str> = PROFILES
            .iter()
            .filter(|p| p.badge().is_some())
            .map(|p| p.name)
            .collect();
        assert_eq!(badged, vec!["More"]);
        assert_eq!(PROFILES[4].badge(), Some("15+"));
    }

    #[test]
    fn test_footer_covers_every_route_once() {
        for route in Route::all() {
            let count = FOOTER_ICONS.iter().filter(|i| i.target == *route).count();
            assert_eq!(count, 1, "{route}");
        }
        assert_eq!(footer_index(Route::Home), 2);
    }

    #[test]
    fn test_exactly_one_active_footer_icon() {
        for route in Route::all() {
            let active: Vec<Route> = FOOTER_ICONS
                .iter()
                .filter(|i| i.is_active(*route))
                .map(|i| i.target)
                .collect();
            assert_eq!(active, vec![*route]);
        }
    }
}
