//! Home handler — the explorer page shell.
//!
//! Renders the search bar, recent-searches dropdown, and filter panel
//! server-side from session state; the article grid is populated by
//! static/app.js against the feed API.

use axum::{extract::State, response::Html};

use oncohub_search::models::{Filters, ARTICLE_TYPES, CANCER_TYPES};

use super::escape;
use crate::state::SharedState;

/// Navigation HTML shared across the page.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

pub async fn home(State(state): State<SharedState>) -> Html<String> {
    let session = state.session.lock().await;
    let history = state.history.lock().await;
    let recent = history.entries().unwrap_or_default();

    Html(render_home(session.query(), session.filters(), &recent))
}

fn render_home(query: &str, filters: &Filters, recent: &[String]) -> String {
    let title = if query.is_empty() {
        "OncoHub | Latest Cancer Research Articles".to_string()
    } else {
        format!("{} - OncoHub", escape(query))
    };

    let history_html: String = recent
        .iter()
        .map(|q| {
            format!(
                r#"<li><button type="button" class="history-item" data-query="{q}">{q}</button></li>"#,
                q = escape(q)
            )
        })
        .collect();

    let cancer_checkboxes: String = CANCER_TYPES
        .iter()
        .map(|label| filter_checkbox("cancer", label, filters.cancer_types.iter().any(|t| t == label)))
        .collect();

    let article_checkboxes: String = ARTICLE_TYPES
        .iter()
        .map(|label| filter_checkbox("article", label, filters.article_types.iter().any(|t| t == label)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<div class="search-band">
    <form id="search-form" class="search-bar" autocomplete="off">
        <div class="search-input-wrap">
            <input type="text" id="search-input" name="query" value="{query}"
                   placeholder="Search oncology articles...">
            <div id="history-dropdown" class="history-dropdown" hidden>
                <div class="history-header">
                    <span>Recent Searches</span>
                    <button type="button" id="history-clear">Clear All</button>
                </div>
                <ul id="history-list">{history_html}</ul>
            </div>
        </div>
        <button type="button" id="filter-toggle" class="btn btn-primary">
            Filters
            <span id="filter-count" class="filter-badge" data-count="{filter_count}">{filter_count}</span>
        </button>
    </form>
</div>

<aside id="filter-panel" class="filter-panel" hidden>
    <h2>Filters</h2>
    <fieldset data-group="cancer">
        <legend>Cancer Types</legend>
        {cancer_checkboxes}
    </fieldset>
    <fieldset data-group="article">
        <legend>Article Types</legend>
        {article_checkboxes}
    </fieldset>
    <button type="button" id="filter-apply" class="btn btn-primary">Apply</button>
</aside>

<main class="content">
    <h2 class="results-heading">Latest Research Articles
        <span id="result-count" class="result-count"></span>
    </h2>
    <div id="feed-error" class="feed-error" hidden>
        <span id="feed-error-message"></span>
        <button type="button" id="feed-retry" class="btn btn-outline">Retry</button>
    </div>
    <div id="article-grid" class="article-grid"></div>
    <div id="empty-state" class="empty-state" hidden>
        <h3>No articles found</h3>
        <p>Try adjusting your search or filters to find what you're looking for.</p>
    </div>
    <div id="loading" class="loading" hidden>Loading…</div>
    <div id="scroll-sentinel"></div>
</main>

<footer class="footer">
    <p>Powered by PubMed's E-utilities API. Updated in real-time with the latest oncology research.</p>
</footer>

<script src="/static/app.js"></script>
</body>
</html>"#,
        title = title,
        nav = NAV_HTML,
        query = escape(query),
        history_html = history_html,
        filter_count = filters.active_count(),
        cancer_checkboxes = cancer_checkboxes,
        article_checkboxes = article_checkboxes,
    )
}

fn filter_checkbox(group: &str, label: &str, checked: bool) -> String {
    let base = group == "cancer" && label == oncohub_search::models::BASE_CANCER_TYPE;
    format!(
        r#"<label class="filter-option"><input type="checkbox" data-group="{group}" value="{label}"{checked}{disabled}> {label}</label>
"#,
        group = group,
        label = escape(label),
        checked = if checked { " checked" } else { "" },
        // The base subject label is always on; see Filters::ensure_base.
        disabled = if base { " disabled" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_home_reflects_query_in_title() {
        let html = render_home("lung", &Filters::default(), &[]);
        assert!(html.contains("<title>lung - OncoHub</title>"));
        assert!(html.contains(r#"value="lung""#));
    }

    #[test]
    fn test_render_home_default_title_and_checked_base() {
        let html = render_home("", &Filters::default(), &[]);
        assert!(html.contains("<title>OncoHub | Latest Cancer Research Articles</title>"));
        assert!(html.contains(r#"value="Cancer" checked disabled"#));
    }

    #[test]
    fn test_render_home_escapes_query() {
        let html = render_home("<script>", &Filters::default(), &[]);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_home_lists_history() {
        let recent = vec!["kras".to_string(), "egfr".to_string()];
        let html = render_home("", &Filters::default(), &recent);
        assert!(html.contains(r#"data-query="kras""#));
        assert!(html.contains(r#"data-query="egfr""#));
    }
}
