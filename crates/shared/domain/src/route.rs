use crate::constants::{HOME_PATH, THANKS_PATH};
use serde::{Deserialize, Serialize};

/// The two views of the page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    Thanks,
}

impl Route {
    /// Maps a path to a view. Only the confirmation path is special; anything else is home.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed == THANKS_PATH { Self::Thanks } else { Self::Home }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Thanks => THANKS_PATH,
        }
    }
}
