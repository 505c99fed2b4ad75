use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

/// Destination for row clicks on the ranking table. Receives the player id
/// and character short code from the route.
#[component]
pub fn Player() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());
    let char_short = move || params.with(|p| p.get("char_short").unwrap_or_default());

    view! {
        <Title text="Player | Puddle Farm" />
        <div class="m-4">
            <a href="/" class="text-pink-500 hover:text-pink-400">
                "Back to rankings"
            </a>
            <h1 class="text-2xl font-bold mt-4">{id}</h1>
            <p class="text-neutral-400">{char_short}</p>
        </div>
    }
}
