use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use consts::{DEFAULT_PAGE_COUNT, VIEW_ALL_COUNT};

/// A validated page window into the global ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub count: i64,
    pub offset: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    Prev,
    Next,
    ViewAll,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_PAGE_COUNT,
            offset: 0,
        }
    }
}

impl PageRequest {
    /// Builds a request from route params. Missing or out-of-range values
    /// (count < 1, offset < 0) fall back to the defaults so the request
    /// sent upstream is always valid.
    pub fn from_route(count: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            count: count.filter(|c| *c > 0).unwrap_or(DEFAULT_PAGE_COUNT),
            offset: offset.filter(|o| *o >= 0).unwrap_or(0),
        }
    }

    /// Computes the request for a navigation action. `Prev` clamps the
    /// offset at zero; `Next` applies no upper clamp, an out-of-range
    /// offset comes back from the server as a not-found page.
    pub fn navigate(self, action: PageAction) -> Self {
        match action {
            PageAction::Prev => {
                let count = if self.count <= 0 {
                    DEFAULT_PAGE_COUNT
                } else {
                    self.count
                };
                Self {
                    count,
                    offset: (self.offset - count).max(0),
                }
            }
            PageAction::Next => Self {
                count: self.count,
                offset: self.offset + self.count,
            },
            PageAction::ViewAll => Self {
                count: VIEW_ALL_COUNT,
                offset: 0,
            },
        }
    }

    pub fn route(self) -> String {
        format!("/top_global/{}/{}", self.count, self.offset)
    }
}

#[component]
pub fn PaginationControls(
    #[prop(into)] request: Signal<PageRequest>,
    #[prop(into)] can_go_next: Signal<bool>,
) -> impl IntoView {
    let navigate = use_navigate();
    let go = move |action: PageAction| {
        let target = request.get_untracked().navigate(action).route();
        navigate(&target, Default::default());
    };
    let go_prev = go.clone();
    let go_next = go.clone();
    let go_view_all = go;

    view! {
        <div class="inline-block py-2">
            <button
                class="px-4 py-2 text-pink-500 hover:text-pink-400 font-medium uppercase"
                on:click=move |_| go_prev(PageAction::Prev)
            >
                "Prev"
            </button>
            <Show when=move || can_go_next.get()>
                <button
                    class="px-4 py-2 text-pink-500 hover:text-pink-400 font-medium uppercase"
                    on:click={
                        let go_next = go_next.clone();
                        move |_| go_next(PageAction::Next)
                    }
                >
                    "Next"
                </button>
            </Show>
            <button
                class="px-4 py-2 text-pink-500 hover:text-pink-400 font-medium uppercase"
                on:click=move |_| go_view_all(PageAction::ViewAll)
            >
                "View All"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_route_params_default() {
        assert_eq!(
            PageRequest::from_route(None, None),
            PageRequest {
                count: 100,
                offset: 0
            }
        );
    }

    #[test]
    fn invalid_route_params_default() {
        let request = PageRequest::from_route(Some(-5), Some(-100));
        assert_eq!(request.count, 100);
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn next_advances_by_count() {
        let request = PageRequest {
            count: 100,
            offset: 300,
        };
        assert_eq!(request.navigate(PageAction::Next).offset, 400);
    }

    #[test]
    fn prev_clamps_offset_at_zero() {
        let request = PageRequest {
            count: 100,
            offset: 50,
        };
        let prev = request.navigate(PageAction::Prev);
        assert_eq!(prev.offset, 0);
        assert_eq!(prev.count, 100);
    }

    #[test]
    fn prev_then_next_round_trips_away_from_the_boundary() {
        for offset in [100, 250, 1000, 4200] {
            let request = PageRequest { count: 100, offset };
            let round_trip = request
                .navigate(PageAction::Prev)
                .navigate(PageAction::Next);
            assert_eq!(round_trip.offset, offset);
            assert_eq!(round_trip.count, 100);
        }
    }

    #[test]
    fn next_after_clamped_prev_stays_within_one_page() {
        // Prev from offset 50 clamps to 0, so Next lands on 100, not 150.
        let request = PageRequest {
            count: 100,
            offset: 50,
        };
        let round_trip = request
            .navigate(PageAction::Prev)
            .navigate(PageAction::Next);
        assert_eq!(round_trip.offset, 100);
    }

    #[test]
    fn view_all_is_a_fixed_request() {
        for request in [
            PageRequest::default(),
            PageRequest {
                count: 25,
                offset: 975,
            },
            PageRequest {
                count: 1000,
                offset: 0,
            },
        ] {
            assert_eq!(
                request.navigate(PageAction::ViewAll),
                PageRequest {
                    count: 1000,
                    offset: 0
                }
            );
        }
    }

    #[test]
    fn prev_resets_a_nonpositive_count() {
        let request = PageRequest {
            count: 0,
            offset: 500,
        };
        let prev = request.navigate(PageAction::Prev);
        assert_eq!(prev.count, 100);
        assert_eq!(prev.offset, 400);
    }

    #[test]
    fn routes_encode_count_and_offset() {
        let request = PageRequest {
            count: 100,
            offset: 200,
        };
        assert_eq!(request.route(), "/top_global/100/200");
    }
}
