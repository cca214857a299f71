//! # Showcase Catalog
//!
//! The static, ordered media items for each vehicle group. Order matters:
//! it defines index addressing and the left-to-right control strip.
//!
//! A built-in catalog mirrors the live site. A TOML file with the same
//! shape can replace it:
//!
//! ```toml
//! [passenger]
//! title = "Passenger vehicles"
//! tagline = "Revving up innovation from interior to exterior."
//!
//! [[passenger.items]]
//! id = 1
//! label = "Complete body"
//! thumbnail = "/compelete_body.png"
//! video_source = "/Passenger Alpha.mp4"
//! poster = "/Passenger Alpha.mp4"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

/// A group of vehicles with its own catalog. Declaration order is the
/// precedence order used when several regions are in view at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Passenger,
    Commercial,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Passenger, Group::Commercial];

    /// Key used in catalog files and logs.
    pub fn key(self) -> &'static str {
        match self {
            Group::Passenger => "passenger",
            Group::Commercial => "commercial",
        }
    }

    pub fn from_key(key: &str) -> Option<Group> {
        Group::ALL.into_iter().find(|g| g.key() == key)
    }

    /// Keyboard shortcut that selects this group in the showcase.
    pub fn hotkey(self) -> char {
        match self {
            Group::Passenger => 'p',
            Group::Commercial => 'c',
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u32,
    pub label: String,
    pub thumbnail: String,
    pub video_source: String,
    pub poster: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogGroup {
    pub title: String,
    pub tagline: String,
    pub items: Vec<MediaItem>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    UnknownGroup(String),
    EmptyGroup(Group),
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::UnknownGroup(key) => write!(f, "unknown vehicle group '{key}'"),
            CatalogError::EmptyGroup(group) => write!(f, "group '{group}' has no items"),
            CatalogError::Empty => write!(f, "catalog defines no groups"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Group key → ordered media items. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCatalog {
    groups: BTreeMap<Group, CatalogGroup>,
}

impl GroupCatalog {
    /// Build a catalog, rejecting groups without items.
    pub fn new(groups: BTreeMap<Group, CatalogGroup>) -> Result<Self, CatalogError> {
        if groups.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some((group, _)) = groups.iter().find(|(_, g)| g.items.is_empty()) {
            return Err(CatalogError::EmptyGroup(*group));
        }
        Ok(Self { groups })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, CatalogGroup> =
            toml::from_str(contents).map_err(CatalogError::Parse)?;
        let mut groups = BTreeMap::new();
        for (key, group) in raw {
            let parsed = Group::from_key(&key).ok_or(CatalogError::UnknownGroup(key))?;
            groups.insert(parsed, group);
        }
        Self::new(groups)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_toml_str(&contents)?;
        info!(
            "Loaded catalog from {} ({} groups)",
            path.display(),
            catalog.groups.len()
        );
        Ok(catalog)
    }

    /// Groups present in this catalog, in precedence order.
    pub fn groups(&self) -> impl Iterator<Item = Group> + '_ {
        self.groups.keys().copied()
    }

    pub fn first_group(&self) -> Group {
        self.groups().next().unwrap_or(Group::Passenger)
    }

    pub fn get(&self, group: Group) -> Option<&CatalogGroup> {
        self.groups.get(&group)
    }

    /// Items for `group`, empty if the catalog doesn't carry it.
    pub fn items(&self, group: Group) -> &[MediaItem] {
        self.groups
            .get(&group)
            .map(|g| g.items.as_slice())
            .unwrap_or(&[])
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> Self {
        fn item(id: u32, label: &str, thumbnail: &str, clip: &str) -> MediaItem {
            MediaItem {
                id,
                label: label.to_string(),
                thumbnail: thumbnail.to_string(),
                video_source: clip.to_string(),
                poster: clip.to_string(),
            }
        }

        let mut groups = BTreeMap::new();
        groups.insert(
            Group::Passenger,
            CatalogGroup {
                title: "Passenger vehicles".to_string(),
                tagline: "Revving up innovation from interior to exterior.".to_string(),
                items: vec![
                    item(1, "Complete body", "/compelete_body.png", "/Passenger Alpha.bc06b347f5b526ad9a60.mp4"),
                    item(2, "Front", "/front.png", "/Front.8f5fda304d3095ab6b02.mp4"),
                    item(3, "Cabin", "/cabin.png", "/Cabin.3260d3e4f52b3804dae5.mp4"),
                    item(4, "Trunk", "/trunk.png", "/Trunk.54bfaa734c0395172c08.mp4"),
                    item(5, "Exterior", "/exterior.png", "/Exterior.a127ebb308e655c7e32c.mp4"),
                ],
            },
        );
        groups.insert(
            Group::Commercial,
            CatalogGroup {
                title: "Commercial vehicles".to_string(),
                tagline: "Advancing engineering for heavy-duty vehicles.".to_string(),
                items: vec![
                    item(1, "Complete body", "/commercial-body.svg", "/Commercial Alpha.92c92d40f9116c837d1d.mp4"),
                    item(2, "Engine", "/commercial-engine.svg", "/Commercial-Engine.d8957f7c027ca396858e.mp4"),
                    item(3, "Cabin", "/commercial-cabin.svg", "/Commercial-Cabin.69adf15a8021267cbe8c.mp4"),
                ],
            },
        );
        Self { groups }
    }
}

impl Default for GroupCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
