use component::ranking::api::fetch_top_page;
use component::ranking::pagination::PaginationControls;
use component::ranking::table::RankingTable;
use component::ranking::{LoadOutcome, PageRequest, RankingState};
use component::spinner::Spinner;
use component::title::TitleText;
use consts::{CANONICAL_TOP_PATH, TOP_GLOBAL_TITLE};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

/// The global ranked listing. Also serves as the router fallback, so a
/// one-time effect snaps unknown URLs back to the canonical listing path.
#[component]
pub fn TopGlobal() -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(RankingState::new());

    let request = Memo::new(move |_| {
        params.with(|p| {
            PageRequest::from_route(
                p.get("count").and_then(|c| c.parse().ok()),
                p.get("offset").and_then(|o| o.parse().ok()),
            )
        })
    });

    let canonicalize = use_navigate();
    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(path) = window.location().pathname() else {
            return;
        };
        if path != CANONICAL_TOP_PATH && !path.starts_with("/top_global/") {
            canonicalize(
                CANONICAL_TOP_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let navigate = use_navigate();
    Effect::new(move |_| {
        let req = request.get();
        let Some(generation) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = fetch_top_page(req).await;
            // The signal is gone if the page unmounted while we were in
            // flight; nothing left to update either way.
            let applied = state.try_update(|s| s.apply(generation, outcome));
            match applied {
                Some(LoadOutcome::RedirectHome(_)) => {
                    navigate(CANONICAL_TOP_PATH, Default::default());
                }
                Some(LoadOutcome::Failed(err)) => {
                    log::error!("error fetching ranking page: {err}");
                }
                _ => {}
            }
        });
    });

    let can_go_next = Signal::derive(move || state.with(|s| s.can_go_next));

    view! {
        <Title text=TOP_GLOBAL_TITLE />
        <header class="relative bg-neutral-900">
            <Show when=move || state.with(|s| s.loading)>
                <div class="absolute top-2 left-2">
                    <Spinner />
                </div>
            </Show>
            <TitleText>"Top Players"</TitleText>
        </header>
        <div class="m-4">
            <PaginationControls request can_go_next />
            {move || {
                let entries = state.with(|s| s.entries.clone());
                view! { <RankingTable entries /> }
            }}
            <PaginationControls request can_go_next />
        </div>
    }
}
