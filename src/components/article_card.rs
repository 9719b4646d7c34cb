//! Article Card Component
//!
//! One fetched Zenn article, linking back to the platform.

use leptos::prelude::*;

use crate::models::ZennArticle;

const ZENN_ORIGIN: &str = "https://zenn.dev";

/// Display form of `published_at`; falls back to the raw text if the
/// platform ever changes its timestamp format.
fn format_published(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn ArticleCard(article: ZennArticle) -> impl IntoView {
    let href = format!("{ZENN_ORIGIN}{}", article.path);
    let published = format_published(&article.published_at);

    view! {
        <a class="article-card" href=href target="_blank" rel="noopener">
            <span class="article-emoji">{article.emoji}</span>
            <div class="article-meta">
                <h3 class="article-title">{article.title}</h3>
                <p class="article-info">
                    {published}
                    " · ♥ " {article.liked_count}
                    " · " {article.comments_count} " comments"
                </p>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_published_zenn_timestamp() {
        assert_eq!(
            format_published("2024-03-01T12:00:00.000+09:00"),
            "2024-03-01"
        );
    }

    #[test]
    fn test_format_published_falls_back_to_raw() {
        assert_eq!(format_published("sometime in march"), "sometime in march");
    }
}
