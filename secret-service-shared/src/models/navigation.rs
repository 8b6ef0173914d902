use serde::{Deserialize, Serialize};
use std::fmt;

/// Places the site can navigate to.
///
/// The web router has its own route enum; this one lets the gate name a
/// redirect target without depending on the router.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Home,
    Blog,
    Store,
    Members,
}

impl Destination {
    /// Every destination, in navigation bar order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Blog, Self::Store, Self::Members];

    /// The URL path this destination is served at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Blog => "/blog",
            Self::Store => "/store",
            Self::Members => "/members",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
