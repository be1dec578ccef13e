//! Static asset table
//!
//! Every image the app shows is a variant of [`Asset`]. An asset keeps the
//! identifier of the bundled image it stands for and resolves to a glyph the
//! terminal can draw. Nothing is decoded at runtime.

/// A local image reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    // Header
    Heart,
    Notification,

    // Profile avatars
    Barbie,
    DonaldDuck,
    Emily,
    Lily,
    More,

    // Hero
    MickeyMouse,

    // Action menu
    Microphone,
    ChatBubble,
    Sketch,
    Dancing,

    // Footer
    SearchIcon,
    FriendsIcon,
    HomeIcon,
    ChatIcon,
    ProfileIcon,
}

impl Asset {
    /// Bundled image identifier
    pub fn path(&self) -> &'static str {
        match self {
            Asset::Heart => "Images/Header/heart.png",
            Asset::Notification => "Images/Header/notification.png",
            Asset::Barbie => "Images/Profile/barbie.png",
            Asset::DonaldDuck => "Images/Profile/donald_duck.png",
            Asset::Emily => "Images/Profile/emily.png",
            Asset::Lily => "Images/Profile/lily.png",
            Asset::More => "Images/Profile/more.png",
            Asset::MickeyMouse => "Images/mickey_mouse.png",
            Asset::Microphone => "Images/Action-menu/microphone.png",
            Asset::ChatBubble => "Images/Action-menu/chat.png",
            Asset::Sketch => "Images/Action-menu/sketch.png",
            Asset::Dancing => "Images/Action-menu/dancing.png",
            Asset::SearchIcon => "Images/Footer/search-icon.png",
            Asset::FriendsIcon => "Images/Footer/friends-icon.png",
            Asset::HomeIcon => "Images/Footer/home-icon.png",
            Asset::ChatIcon => "Images/Footer/chat-icon.png",
            Asset::ProfileIcon => "Images/Footer/profile-icon.png",
        }
    }

    /// Single-cell glyph used in place of the image
    pub fn glyph(&self) -> &'static str {
        match self {
            Asset::Heart => "♥",
            Asset::Notification => "¤",
            Asset::Barbie => "B",
            Asset::DonaldDuck => "D",
            Asset::Emily => "E",
            Asset::Lily => "L",
            Asset::More => "…",
            Asset::MickeyMouse => "M",
            Asset::Microphone => "♪",
            Asset::ChatBubble => "✉",
            Asset::Sketch => "✎",
            Asset::Dancing => "♫",
            Asset::SearchIcon => "⌕",
            Asset::FriendsIcon => "☺",
            Asset::HomeIcon => "⌂",
            Asset::ChatIcon => "✉",
            Asset::ProfileIcon => "◉",
        }
    }

    /// Multi-line drawing for assets shown large (hero image)
    pub fn art(&self) -> &'static [&'static str] {
        match self {
            Asset::MickeyMouse => MICKEY_ART,
            _ => &[],
        }
    }
}

const MICKEY_ART: &[&str] = &[
    "  .-\"\"-.          .-\"\"-.  ",
    " /      \\        /      \\ ",
    " \\      /.------.\\      / ",
    "  '-..-'/        \\'-..-'  ",
    "       |  ()  ()  |       ",
    "       |    __    |       ",
    "        \\  \\__/  /        ",
    "         '-.__.-'         ",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_png() {
        for asset in [Asset::Heart, Asset::More, Asset::MickeyMouse, Asset::HomeIcon] {
            assert!(asset.path().starts_with("Images/"));
            assert!(asset.path().ends_with(".png"));
        }
    }

    #[test]
    fn test_only_hero_has_art() {
        assert!(!Asset::MickeyMouse.art().is_empty());
        assert!(Asset::Barbie.art().is_empty());
    }

    #[test]
    fn test_hero_art_is_rectangular() {
        let width = MICKEY_ART[0].chars().count();
        assert!(MICKEY_ART.iter().all(|line| line.chars().count() == width));
    }
}
