use leptos::prelude::*;

use super::types::{PlayerTag, TagStyle};

/// Renders the decoded style map as an inline CSS string. Property keys
/// arrive in camelCase and are folded to kebab-case.
pub fn inline_style(style: &TagStyle) -> String {
    let mut css = String::new();
    for (key, value) in style {
        if !css.is_empty() {
            css.push(';');
        }
        for c in key.chars() {
            if c.is_ascii_uppercase() {
                css.push('-');
                css.push(c.to_ascii_lowercase());
            } else {
                css.push(c);
            }
        }
        css.push(':');
        match value {
            serde_json::Value::String(s) => css.push_str(s),
            other => css.push_str(&other.to_string()),
        }
    }
    css
}

/// Small labeled badge next to a player name, e.g. a rank-tier marker.
/// Carries its own inline style description from the ranking service.
#[component]
pub fn TagBadge(tag: PlayerTag) -> impl IntoView {
    let style = inline_style(&tag.style);
    view! {
        <span class="ml-2 px-2 py-0.5 rounded text-sm align-middle" style=style>
            {tag.tag}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(json: &str) -> TagStyle {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn camel_case_keys_become_kebab_case() {
        let css = inline_style(&style(
            r##"{"backgroundColor":"#b8860b","color":"white"}"##,
        ));
        assert_eq!(css, "background-color:#b8860b;color:white");
    }

    #[test]
    fn numeric_values_render_bare() {
        let css = inline_style(&style(r#"{"opacity":0.9}"#));
        assert_eq!(css, "opacity:0.9");
    }

    #[test]
    fn empty_style_renders_empty() {
        assert_eq!(inline_style(&style("{}")), "");
    }
}
