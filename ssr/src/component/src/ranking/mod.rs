pub mod api;
pub mod error;
pub mod pagination;
pub mod state;
pub mod table;
pub mod tag;
pub mod types;

pub use error::RankingError;
pub use pagination::{PageAction, PageRequest};
pub use state::{LoadOutcome, RankingState};
pub use types::{PageResult, PlayerRankEntry, PlayerTag};
