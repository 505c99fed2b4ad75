use super::error::RankingError;
use super::pagination::PageRequest;
use super::types::{PageResult, PlayerRankEntry, PlayerTag, TopResponse};

/// Decodes a raw `/top` response body into rank entries.
///
/// The outer payload must carry a `ranks` array (empty is a valid page).
/// Each tag's `style` field is itself a string-encoded JSON object and is
/// deserialized as a nested step; a single bad style fails the whole
/// decode, there is no partial recovery.
pub fn decode_ranks(body: &str) -> Result<Vec<PlayerRankEntry>, RankingError> {
    let parsed: TopResponse = serde_json::from_str(body)
        .map_err(|e| RankingError::MalformedResponse(e.to_string()))?;

    parsed
        .ranks
        .into_iter()
        .map(|row| {
            let tags = row
                .tags
                .into_iter()
                .map(|t| {
                    let style = serde_json::from_str(&t.style).map_err(|e| {
                        RankingError::MalformedResponse(format!(
                            "tag style on player {}: {e}",
                            row.id
                        ))
                    })?;
                    Ok(PlayerTag { tag: t.tag, style })
                })
                .collect::<Result<Vec<_>, RankingError>>()?;

            Ok(PlayerRankEntry {
                rank: row.rank,
                id: row.id,
                name: row.name,
                char_short: row.char_short,
                rating: row.rating,
                deviation: row.deviation,
                tags,
            })
        })
        .collect()
}

/// Fetches one ranking page. `count` and `offset` are always sent
/// explicitly; the caller supplies validated values.
pub async fn fetch_top_page(request: PageRequest) -> Result<PageResult, RankingError> {
    use consts::API_BASE_URL;

    let mut url = API_BASE_URL
        .join("top")
        .map_err(|e| RankingError::Transport(format!("failed to build URL: {e}")))?;
    url.query_pairs_mut()
        .append_pair("count", &request.count.to_string())
        .append_pair("offset", &request.offset.to_string());

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| RankingError::Transport(format!("request failed: {e}")))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(RankingError::NotFound);
    }
    if !response.status().is_success() {
        return Err(RankingError::Transport(format!(
            "API error: {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| RankingError::Transport(format!("failed to read response: {e}")))?;

    let entries = decode_ranks(&body)?;
    Ok(PageResult::from_entries(entries, &request))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: u32, tags: &str) -> String {
        format!(
            r#"{{"rank":{rank},"id":"p{rank}","name":"Player {rank}","char_short":"SO","rating":1523.456,"deviation":45.678{tags}}}"#
        )
    }

    #[test]
    fn decodes_rows_without_tags() {
        let body = format!(r#"{{"ranks":[{}]}}"#, row(1, ""));
        let entries = decode_ranks(&body).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].id, "p1");
        assert_eq!(entries[0].char_short, "SO");
        assert_eq!(entries[0].rating, 1523.456);
        assert!(entries[0].tags.is_empty());
    }

    #[test]
    fn decodes_nested_tag_styles() {
        let tags = r##","tags":[{"tag":"Vanquisher","style":"{\"backgroundColor\":\"#b8860b\",\"color\":\"white\"}"}]"##;
        let body = format!(r#"{{"ranks":[{}]}}"#, row(1, tags));
        let entries = decode_ranks(&body).unwrap();
        let tag = &entries[0].tags[0];
        assert_eq!(tag.tag, "Vanquisher");
        assert_eq!(
            tag.style.get("backgroundColor").and_then(|v| v.as_str()),
            Some("#b8860b")
        );
    }

    #[test]
    fn empty_ranks_is_a_valid_page() {
        let entries = decode_ranks(r#"{"ranks":[]}"#).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn unparsable_tag_style_fails_the_whole_decode() {
        let tags = r#","tags":[{"tag":"Vanquisher","style":"not json"}]"#;
        let body = format!(r#"{{"ranks":[{},{}]}}"#, row(1, ""), row(2, tags));
        let err = decode_ranks(&body).unwrap_err();
        assert!(matches!(err, RankingError::MalformedResponse(_)));
    }

    #[test]
    fn tag_style_must_be_an_object() {
        // A valid JSON scalar is still not a style map.
        let tags = r#","tags":[{"tag":"Shark","style":"42"}]"#;
        let body = format!(r#"{{"ranks":[{}]}}"#, row(1, tags));
        assert!(matches!(
            decode_ranks(&body),
            Err(RankingError::MalformedResponse(_))
        ));
    }

    #[test]
    fn missing_ranks_field_is_malformed() {
        assert!(matches!(
            decode_ranks(r#"{"players":[]}"#),
            Err(RankingError::MalformedResponse(_))
        ));
    }

    #[test]
    fn entries_keep_server_order() {
        let body = format!(r#"{{"ranks":[{},{},{}]}}"#, row(5, ""), row(3, ""), row(9, ""));
        let entries = decode_ranks(&body).unwrap();
        let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![5, 3, 9]);
    }
}
