use leptos::prelude::*;

/// Page header band shared across pages.
#[component]
pub fn TitleText(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-[100px] pt-8 text-center">
            <span class="text-2xl font-bold">{children()}</span>
        </div>
    }
}
