use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four views the site can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page `{0}`")]
pub struct UnknownPage(pub String);

impl PageId {
    /// Nav order.
    pub const ALL: [PageId; 4] = [PageId::Home, PageId::About, PageId::Projects, PageId::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Projects => "projects",
            PageId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Projects => "Projects",
            PageId::Contact => "Contact",
        }
    }

    /// Bookmarkable URL fragment written next to each history entry.
    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == id)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("home", PageId::Home ; "home")]
    #[test_case("about", PageId::About ; "about")]
    #[test_case("projects", PageId::Projects ; "projects")]
    #[test_case(" contact\n", PageId::Contact ; "trims_whitespace")]
    fn parses_known_ids(input: &str, expected: PageId) {
        assert_eq!(input.parse::<PageId>(), Ok(expected));
    }

    #[test_case("" ; "empty")]
    #[test_case("Home" ; "wrong_case")]
    #[test_case("settings" ; "not_a_page")]
    #[test_case("#home" ; "fragment_form")]
    fn rejects_unknown_ids(input: &str) {
        assert_eq!(input.parse::<PageId>(), Err(UnknownPage(input.to_string())));
    }

    #[test]
    fn display_matches_serde_form() {
        for page in PageId::ALL {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{page}\""));
            assert_eq!(page.fragment(), format!("#{page}"));
        }
    }

    #[test]
    fn defaults_to_home() {
        assert_eq!(PageId::default(), PageId::Home);
    }
}
