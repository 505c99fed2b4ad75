use serde::{Deserialize, Serialize};

use super::pagination::PageRequest;
use consts::VIEW_ALL_COUNT;

/// Presentation key/value pairs attached to a tag. Arrives string-encoded
/// inside the outer payload and is deserialized as a nested step.
pub type TagStyle = serde_json::Map<String, serde_json::Value>;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PlayerTag {
    pub tag: String,
    pub style: TagStyle,
}

/// One row of the global ranking. `rank` is the 1-based position in the
/// full ranking, not within the current page. `rating` and `deviation`
/// keep full precision; display forms are derived at render time.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PlayerRankEntry {
    pub rank: u32,
    pub id: String,
    pub name: String,
    pub char_short: String,
    pub rating: f64,
    pub deviation: f64,
    pub tags: Vec<PlayerTag>,
}

/// A fully decoded ranking page. Replaces the previous page wholesale on
/// every completed request.
#[derive(Clone, Debug, PartialEq)]
pub struct PageResult {
    pub entries: Vec<PlayerRankEntry>,
    pub can_go_next: bool,
}

impl PageResult {
    /// A next page exists unless the server returned fewer rows than asked
    /// for, or the request used the view-all sentinel count.
    pub fn from_entries(entries: Vec<PlayerRankEntry>, requested: &PageRequest) -> Self {
        let can_go_next =
            entries.len() as i64 >= requested.count && requested.count != VIEW_ALL_COUNT;
        Self {
            entries,
            can_go_next,
        }
    }
}

/// Wire shape of the `/top` response body.
#[derive(Deserialize, Debug)]
pub(crate) struct TopResponse {
    pub ranks: Vec<RankRow>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RankRow {
    pub rank: u32,
    pub id: String,
    pub name: String,
    pub char_short: String,
    pub rating: f64,
    pub deviation: f64,
    #[serde(default)]
    pub tags: Vec<RankRowTag>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RankRowTag {
    pub tag: String,
    /// String-encoded JSON object of presentation properties.
    pub style: String,
}
