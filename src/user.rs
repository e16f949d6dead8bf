use serde::{Deserialize, Serialize};

/// One directory entry, as returned in a page's `results` array.
///
/// Only the fields the list renders are modelled; everything else in the payload is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: Name,
    pub email: String,
    pub picture: Picture,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub large: String,
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// Stable row identity. Emails are unique per directory page set.
    pub fn key(&self) -> &str {
        &self.email
    }
}
