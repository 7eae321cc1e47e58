use super::grid::Zone;
use serde::{Deserialize, Serialize};

/// Where a participant insists on sitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZonePreference {
    Front,
    Back,
    /// No restriction; any seat is acceptable.
    #[default]
    Anywhere,
}

impl ZonePreference {
    /// The zone this preference pins a person to, if any.
    pub fn required_zone(self) -> Option<Zone> {
        match self {
            ZonePreference::Front => Some(Zone::Front),
            ZonePreference::Back => Some(Zone::Back),
            ZonePreference::Anywhere => None,
        }
    }

    pub fn is_fixed(self) -> bool {
        self != ZonePreference::Anywhere
    }
}

/// A single participant.
///
/// `name` is the identity key for adjacency matching: `likes` and `dislikes` refer to
/// other participants by name. Names that match nobody are inert. `display_number` and
/// `note` are carried through for display and never influence the optimization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    pub display_number: String,
    pub name: String,
    pub likes: Vec<String>,
    pub dislikes: Vec<String>,
    pub zone_preference: ZonePreference,
    pub note: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_display_number(mut self, number: impl Into<String>) -> Self {
        self.display_number = number.into();
        self
    }

    /// Sets the liked names. Repeated names are collapsed, first occurrence kept.
    pub fn with_likes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.likes = dedup_names(names);
        self
    }

    /// Sets the disliked names. Repeated names are collapsed, first occurrence kept.
    pub fn with_dislikes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dislikes = dedup_names(names);
        self
    }

    pub fn with_zone_preference(mut self, preference: ZonePreference) -> Self {
        self.zone_preference = preference;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn likes(&self, name: &str) -> bool {
        self.likes.iter().any(|n| n == name)
    }

    pub fn dislikes(&self, name: &str) -> bool {
        self.dislikes.iter().any(|n| n == name)
    }
}

fn dedup_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let name = name.into();
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}
