//! Application state definitions

use serde::{Deserialize, Serialize};

/// Color theme for the whole interface. Persisted as a single string
/// ("light"/"dark") in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Sections of the agency page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Listings,
    Agents,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Listings,
        Section::Agents,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Listings => "Listings",
            Self::Agents => "Agents",
            Self::Contact => "Contact",
        }
    }
}

/// The page element that currently has keyboard focus. This is the token
/// the contact dialog captures on open and hands back on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFocus {
    Section(Section),
    ContactButton,
}

impl Default for PageFocus {
    fn default() -> Self {
        PageFocus::Section(Section::Home)
    }
}

impl PageFocus {
    /// Traversal order: sections top to bottom, then the contact button.
    pub fn next(&self) -> Self {
        match self {
            Self::Section(s) => {
                let idx = Section::ALL.iter().position(|x| x == s).unwrap_or(0);
                match Section::ALL.get(idx + 1) {
                    Some(next) => Self::Section(*next),
                    None => Self::ContactButton,
                }
            }
            Self::ContactButton => Self::Section(Section::ALL[0]),
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Section(s) => {
                let idx = Section::ALL.iter().position(|x| x == s).unwrap_or(0);
                if idx == 0 {
                    Self::ContactButton
                } else {
                    Self::Section(Section::ALL[idx - 1])
                }
            }
            Self::ContactButton => Self::Section(Section::ALL[Section::ALL.len() - 1]),
        }
    }
}

/// One property card on the listings section.
#[derive(Debug, Clone)]
pub struct Listing {
    pub address: &'static str,
    pub price: &'static str,
    pub rooms: u8,
    pub area_sqm: u16,
}

/// Static showcase data for the page.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            address: "12 Garden St, loft",
            price: "$248,000",
            rooms: 2,
            area_sqm: 64,
        },
        Listing {
            address: "3 Riverside Ave, apt 41",
            price: "$315,500",
            rooms: 3,
            area_sqm: 88,
        },
        Listing {
            address: "27 Maple Ct, townhouse",
            price: "$420,000",
            rooms: 4,
            area_sqm: 132,
        },
        Listing {
            address: "8 Station Rd, studio",
            price: "$139,900",
            rooms: 1,
            area_sqm: 31,
        },
    ]
}

/// Mutable state behind the page view.
#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: Theme,
    pub page_focus: PageFocus,
    pub listings: Vec<Listing>,
    /// Transient one-line message in the status bar
    pub status_message: Option<String>,
    /// Confirmation overlay after a successful submit
    pub success_notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            page_focus: PageFocus::default(),
            listings: sample_listings(),
            status_message: None,
            success_notice: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_theme_serializes_as_lowercase_string() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, Theme::Dark);
    }

    #[test]
    fn test_focus_traversal_covers_all_positions() {
        let mut focus = PageFocus::default();
        let mut seen = vec![focus];
        for _ in 0..Section::ALL.len() {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(*seen.last().unwrap(), PageFocus::ContactButton);
        // One more step wraps back to the top.
        assert_eq!(focus.next(), PageFocus::Section(Section::Home));
    }

    #[test]
    fn test_focus_prev_inverts_next() {
        let positions = [
            PageFocus::Section(Section::Home),
            PageFocus::Section(Section::Listings),
            PageFocus::Section(Section::Agents),
            PageFocus::Section(Section::Contact),
            PageFocus::ContactButton,
        ];
        for p in positions {
            assert_eq!(p.next().prev(), p);
            assert_eq!(p.prev().next(), p);
        }
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.page_focus, PageFocus::Section(Section::Home));
        assert_eq!(state.listings.len(), 4);
        assert!(state.status_message.is_none());
        assert!(state.success_notice.is_none());
    }
}
