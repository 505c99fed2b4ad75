use super::error::RankingError;
use super::types::{PageResult, PlayerRankEntry};

/// View state for the ranked listing. One instance lives per mounted page;
/// every completed request replaces the entries wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct RankingState {
    pub entries: Vec<PlayerRankEntry>,
    pub loading: bool,
    pub can_go_next: bool,
    generation: u64,
}

/// What applying a fetch outcome did to the state.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// Entries and can_go_next were replaced.
    Updated,
    /// The page does not exist; caller should navigate to the default
    /// listing. State is untouched.
    RedirectHome(RankingError),
    /// Decode or transport failure; prior entries kept, spinner cleared.
    Failed(RankingError),
    /// A newer request was initiated after this one; result discarded.
    Superseded,
}

impl RankingState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            can_go_next: true,
            generation: 0,
        }
    }

    /// Marks a new in-flight request and returns its generation token.
    /// Only the outcome carrying the most recent token is ever applied.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    pub fn apply(
        &mut self,
        generation: u64,
        outcome: Result<PageResult, RankingError>,
    ) -> LoadOutcome {
        if generation != self.generation {
            return LoadOutcome::Superseded;
        }
        match outcome {
            Ok(page) => {
                self.entries = page.entries;
                self.can_go_next = page.can_go_next;
                self.loading = false;
                LoadOutcome::Updated
            }
            Err(RankingError::NotFound) => LoadOutcome::RedirectHome(RankingError::NotFound),
            Err(err) => {
                self.loading = false;
                LoadOutcome::Failed(err)
            }
        }
    }
}
