use leptos::prelude::*;

use super::tag::TagBadge;
use super::types::PlayerRankEntry;
use utils::rating::RatingDisplay;

/// The ranked player table. Entries render in server order; the client
/// never re-sorts.
#[component]
pub fn RankingTable(entries: Vec<PlayerRankEntry>) -> impl IntoView {
    view! {
        <div class="w-full overflow-x-auto rounded bg-neutral-900">
            <table class="w-full text-sm">
                <thead>
                    <tr class="border-b border-neutral-800 text-left text-neutral-400">
                        <th class="py-2 px-1 text-center"></th>
                        <th class="py-2 px-4">"Player"</th>
                        <th class="py-2 px-4">"Char"</th>
                        <th class="py-2 px-4">"Rating"</th>
                    </tr>
                </thead>
                <tbody>
                    {entries
                        .into_iter()
                        .map(|entry| view! { <RankingRow entry /> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn RankingRow(entry: PlayerRankEntry) -> impl IntoView {
    let rating = RatingDisplay::from_value(entry.rating);
    let deviation = RatingDisplay::from_value(entry.deviation);
    let player_href = format!("/player/{}/{}", entry.id, entry.char_short);

    view! {
        <tr class="border-b border-neutral-800 hover:bg-white/5 transition-colors">
            <td class="py-2 px-1 text-center">{entry.rank}</td>
            <td class="py-2 px-4">
                <a href=player_href class="text-pink-500 hover:text-pink-400 font-medium">
                    {entry.name}
                </a>
                {entry
                    .tags
                    .into_iter()
                    .map(|tag| view! { <TagBadge tag /> })
                    .collect_view()}
            </td>
            <td class="py-2 px-4">{entry.char_short}</td>
            <td class="py-2 px-4">
                <span title=rating.title>{rating.cell}</span>
                " "
                <span title=deviation.title>{format!("±{}", deviation.cell)}</span>
            </td>
        </tr>
    }
}
