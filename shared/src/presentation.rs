//! Display rules shared by the cards: colours, image lookups and text
//! shortening. Everything here is a pure function of a record.

use crate::models::problem::Category;
use crate::models::team::Venue;
use std::borrow::Cow;

/// Characters of description shown on a problem card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Image shown when a team or jury photo is missing.
pub const PLACEHOLDER_IMAGE: &str = "assets/images/logo.png";

pub const THEME_PALETTE: [&str; 5] = [
    "from-purple-400 to-purple-600",
    "from-blue-400 to-blue-600",
    "from-pink-400 to-pink-600",
    "from-indigo-400 to-indigo-600",
    "from-teal-400 to-teal-600",
];

pub fn category_gradient(category: &Category) -> &'static str {
    match category {
        Category::Software => "from-green-400 to-green-600",
        _ => "from-orange-400 to-orange-600",
    }
}

pub fn category_icon(category: &Category) -> &'static str {
    match category {
        Category::Software => "fa-code",
        _ => "fa-microchip",
    }
}

/// Palette entry picked by the first UTF-16 unit of the theme name.
pub fn theme_gradient(theme: &str) -> &'static str {
    let first = theme.encode_utf16().next().unwrap_or(0) as usize;
    THEME_PALETTE[first % THEME_PALETTE.len()]
}

/// Badge colour for team and jury cards
pub fn venue_gradient(venue: &Venue) -> &'static str {
    match venue {
        Venue::SeminarHall => "from-green-500 to-emerald-600",
        Venue::IotLab => "from-purple-500 to-pink-600",
        Venue::StartupStudio => "from-orange-500 to-red-600",
        Venue::Other(_) => "from-blue-500 to-cyan-600",
    }
}

/// Highlight for an active venue filter button; `None` for the "All" button.
pub fn venue_button_gradient(venue: Option<&Venue>) -> &'static str {
    match venue {
        Some(Venue::SeminarHall) => "from-green-500 to-emerald-500",
        Some(Venue::IotLab) => "from-purple-500 to-pink-500",
        Some(Venue::StartupStudio) => "from-orange-500 to-red-500",
        Some(Venue::Other(_)) | None => "from-blue-500 to-cyan-500",
    }
}

pub fn jury_image_file(venue: &Venue) -> Option<&'static str> {
    match venue {
        Venue::SeminarHall => Some("SeminarHall.jpg"),
        Venue::IotLab => Some("IotLab.jpg"),
        Venue::StartupStudio => Some("StartUpStudio.jpg"),
        Venue::Other(_) => None,
    }
}

/// Photo file for a team. Team names in the roster and photo file names drifted
/// apart, so known teams go through a lookup table; anyone else is looked up
/// under their roster name.
pub fn team_image_file(team_name: &str) -> Cow<'_, str> {
    let file = match team_name {
        "GenNext" => "GenNext.jpg",
        "Coderz Galaxy" => "Coderz Galaxy.jpg",
        "Tech Warriors" => "Tech Warriors.jpg",
        "Hackonauts" => "Hackonauts.jpg",
        "DisasterX" => "DisasterX.jpg",
        "Tesla" => "TESLA.jpg",
        "SkyWalkers" => "Sky Walkers.jpg",
        "Circuitronix" => "Circuitronix.jpg",
        "Sadak Mitra" => "Sadak Mitra.jpg",
        "Synap Tech" => "SynapTech.jpg",
        "Infinite Loopers" => "Infinite Loopers.jpg",
        "Aura Tech" => "AuraTech.jpg",
        "Breed Spoilers" => "BREED SPOTTERS.jpg",
        "SIH 11" => "SIH 11.jpg",
        "Koshin" => "Koshin .jpg",
        "EPICELECTRONS" => "Epicelectrons.jpg",
        "Echoes of Sikkim" => "Echoes of Sikkim.jpg",
        "Chainspark" => "CHAINSPARK.jpg",
        "BackTech" => "Back Tech.jpg",
        "Syamparani" => "Syamparani.jpg",
        "Obsidian" => "Obsidian.jpg",
        "Impactware" => "ImpactWare.jpg",
        "OutCast" => "OUTCAST.jpg",
        "ShieldMy Trip" => "Shield My Trip.jpg",
        "Rising Pheonix" => "Rising Phoenix.jpg",
        "Onion Vault" => "ONION VAULT.jpg",
        "Sky Hackers" => "sky hackers.jpg",
        "Brain Wave solutions" => "Brainwave Solutions.jpg",
        "Tech Titans" => "Tech titans.jpg",
        "Binary Bunch" => "Brainy bunch.jpg",
        "Scratch" => "scratch.jpg",
        "Code Brigade" => "Code Brigade.png",
        "Aero Vision" => "Aerovision.jpg",
        "BlueMarble" => "BlueMarble.jpg",
        "Neuro Ninjas" => "Neuro Ninjas.jpg",
        "Hydro Smart" => "Hydro Smart.jpg",
        "Cultural Impactors" => "Cultural Impactors.jpg",
        "Innoventures" => "Innoventures.jpg",
        "Vector Vision" => "Vector Vision.jpg",
        "Max Matrix" => "MAX MATRIX.jpg",
        "Igniters" => "Igniters.png",
        "SmartEd Icons" => "SmartEd Icons.jpg",
        "Hackathon Hackers" => "Hackathon Hackers.jpg",
        "Digital Dreamers" => "Digital Dreamers.jpg",
        "Dropout Shield" => "Dropout sheild.jpg",
        "NeverMore" => "Nevermore.jpg",
        other => return Cow::Borrowed(other),
    };
    Cow::Borrowed(file)
}

/// Cuts `text` to at most `max_chars` characters, appending "..." when
/// anything was removed.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Width of the scroll progress bar, in percent.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Viewport width from which the navigation bar stays pinned.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// Scroll position for an in-page link target. On desktop the sticky nav
/// covers the top of the page, so the target is pushed below it.
pub fn anchor_scroll_top(target_offset_top: f64, nav_height: f64, viewport_width: f64) -> f64 {
    let top = if viewport_width >= DESKTOP_MIN_WIDTH {
        target_offset_top - nav_height - 20.0
    } else {
        target_offset_top - 10.0
    };
    top.max(0.0)
}

/// Frame-by-frame count animation for the "problems found" counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    current: f64,
    target: f64,
    step: f64,
}

impl CountUp {
    pub const DURATION_MS: f64 = 500.0;
    pub const FRAME_MS: u32 = 16;

    pub fn new(from: usize, to: usize) -> Self {
        let frames = Self::DURATION_MS / f64::from(Self::FRAME_MS);
        Self {
            current: from as f64,
            target: to as f64,
            step: (to as f64 - from as f64) / frames,
        }
    }

    /// True once the target is on screen; no further ticks are needed.
    pub fn is_finished(&self) -> bool {
        self.current == self.target
    }

    /// Advances one frame and returns the value to display and whether the
    /// animation has finished.
    pub fn tick(&mut self) -> (usize, bool) {
        self.current += self.step;
        let done = self.step == 0.0
            || (self.step > 0.0 && self.current >= self.target)
            || (self.step < 0.0 && self.current <= self.target);
        if done {
            self.current = self.target;
            (self.target as usize, true)
        } else {
            (self.current.floor().max(0.0) as usize, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Agriculture", 0)] // 'A' = 65
    #[case("Blockchain", 1)] // 'B' = 66
    #[case("Smart Education", 3)] // 'S' = 83
    #[case("", 0)]
    fn test_theme_gradient_uses_first_code_unit(#[case] theme: &str, #[case] slot: usize) {
        assert_eq!(theme_gradient(theme), THEME_PALETTE[slot]);
    }

    #[test]
    fn test_category_colours() {
        assert_eq!(category_gradient(&Category::Software), "from-green-400 to-green-600");
        assert_eq!(category_gradient(&Category::Hardware), "from-orange-400 to-orange-600");
        assert_eq!(
            category_gradient(&Category::Other("Misc".to_string())),
            "from-orange-400 to-orange-600"
        );
        assert_eq!(category_icon(&Category::Software), "fa-code");
    }

    #[test]
    fn test_team_image_lookup() {
        assert_eq!(team_image_file("Tesla"), "TESLA.jpg");
        assert_eq!(team_image_file("Koshin"), "Koshin .jpg");
        assert_eq!(team_image_file("Unlisted Team"), "Unlisted Team");
    }

    #[test]
    fn test_jury_image_lookup() {
        assert_eq!(jury_image_file(&Venue::IotLab), Some("IotLab.jpg"));
        assert_eq!(jury_image_file(&Venue::Other("HALL B".to_string())), None);
    }

    #[rstest]
    #[case("short", 10, "short")]
    #[case("exactly10!", 10, "exactly10!")]
    #[case("0123456789abc", 10, "0123456789...")]
    #[case("ಕನ್ನಡ ಭಾಷೆ", 3, "ಕನ್...")]
    fn test_truncate(#[case] text: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(truncate(text, max), expected);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[rstest]
    #[case(800.0, 64.0, 1280.0, 716.0)]
    #[case(800.0, 64.0, 1024.0, 716.0)]
    #[case(800.0, 64.0, 390.0, 790.0)]
    #[case(5.0, 64.0, 390.0, 0.0)]
    #[case(40.0, 64.0, 1440.0, 0.0)]
    fn test_anchor_scroll_top(
        #[case] offset: f64,
        #[case] nav: f64,
        #[case] width: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(anchor_scroll_top(offset, nav, width), expected);
    }

    #[test]
    fn test_count_up_reaches_target() {
        let mut count = CountUp::new(0, 62);
        let mut frames = 0;
        let value = loop {
            frames += 1;
            let (value, done) = count.tick();
            if done {
                break value;
            }
            assert!(value <= 62);
        };
        assert_eq!(value, 62);
        assert!((31..=33).contains(&frames));
    }

    #[test]
    fn test_count_up_down_and_flat() {
        let mut down = CountUp::new(100, 2);
        let (first, done) = down.tick();
        assert!(!done);
        assert!(first < 100);

        let mut flat = CountUp::new(5, 5);
        assert!(flat.is_finished());
        assert_eq!(flat.tick(), (5, true));
    }

    #[test]
    fn test_count_up_is_finished_only_after_last_frame() {
        let mut count = CountUp::new(0, 9);
        assert!(!count.is_finished());
        while !count.tick().1 {
            assert!(!count.is_finished());
        }
        assert!(count.is_finished());
        assert_eq!(count.tick(), (9, true));
    }
}
