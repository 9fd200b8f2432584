//! # Sections
//!
//! The seven navigation targets of the page. Anything that names a section
//! goes through [`Section`], so an unknown identifier can't reach `ViewState`.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Education,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Position in [`Section::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Digit shortcuts: '1' is Home, '7' is Contact.
    pub fn from_shortcut(c: char) -> Option<Section> {
        let digit = c.to_digit(10)? as usize;
        digit
            .checked_sub(1)
            .and_then(|i| Section::ALL.get(i).copied())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// A navigation target that isn't one of the seven known sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSection(pub String);

impl fmt::Display for InvalidSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid section: {:?}", self.0)
    }
}

impl std::error::Error for InvalidSection {}

impl FromStr for Section {
    type Err = InvalidSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidSection(s.to_string()))
    }
}
