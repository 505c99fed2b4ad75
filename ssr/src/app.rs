use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use page::player::Player;
use page::top_global::TopGlobal;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-black text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/puddle-farm.css" />
        <Router>
            <main>
                // TopGlobal doubles as the fallback; it canonicalizes the
                // URL back to "/" on mount for unknown routes.
                <Routes fallback=TopGlobal>
                    <Route path=path!("/") view=TopGlobal />
                    <Route path=path!("/top_global/:count/:offset") view=TopGlobal />
                    <Route path=path!("/player/:id/:char_short") view=Player />
                </Routes>
            </main>
        </Router>
    }
}
