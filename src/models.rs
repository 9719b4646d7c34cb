//! Zenn API Models
//!
//! Data structures mirroring the Zenn "list articles" endpoint, plus the
//! validation step that turns a raw response body into a typed value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Article author (matches the nested `user` object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZennUser {
    pub username: String,
    pub name: String,
}

/// One published article (matches the Zenn API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZennArticle {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub published_at: String,
    pub emoji: String,
    pub path: String,
    pub liked_count: u32,
    pub comments_count: u32,
    pub body_letters_count: u32,
    pub user: ZennUser,
}

/// One page of the paginated article list.
///
/// `next_page` absent or null means pagination is exhausted; `total_count`
/// absent or null means the platform did not report it. Neither is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZennApiResponse {
    pub articles: Vec<ZennArticle>,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u32>,
}

/// Response body does not match the documented article-list schema
#[derive(Debug, Error)]
pub enum SchemaMismatch {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("response is not a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field does not match schema: {0}")]
    FieldMismatch(String),
}

/// Validate a raw response body against the article-list schema.
///
/// Every article field is required; `next_page` and `total_count` may be
/// absent. Errors surface to whoever initiated the fetch, nothing is
/// recovered here.
pub fn parse_article_list(body: &str) -> Result<ZennApiResponse, SchemaMismatch> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SchemaMismatch::InvalidJson(e.to_string()))?;
    if !value
        .as_object()
        .ok_or(SchemaMismatch::NotAnObject)?
        .contains_key("articles")
    {
        return Err(SchemaMismatch::MissingField("articles"));
    }
    serde_json::from_value(value).map_err(|e| SchemaMismatch::FieldMismatch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_json(slug: &str) -> String {
        format!(
            r#"{{
                "id": 1,
                "title": "Title",
                "slug": "{slug}",
                "published_at": "2024-03-01T12:00:00.000+09:00",
                "emoji": "🦀",
                "path": "/someone/articles/{slug}",
                "liked_count": 12,
                "comments_count": 3,
                "body_letters_count": 4500,
                "user": {{ "username": "someone", "name": "Someone" }}
            }}"#
        )
    }

    #[test]
    fn test_parse_full_page() {
        let body = format!(
            r#"{{ "articles": [{}], "next_page": 2, "total_count": 48 }}"#,
            article_json("abc123")
        );
        let page = parse_article_list(&body).unwrap();
        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles[0].slug, "abc123");
        assert_eq!(page.articles[0].liked_count, 12);
        assert_eq!(page.articles[0].user.username, "someone");
        assert_eq!(page.next_page, Some(2));
        assert_eq!(page.total_count, Some(48));
    }

    #[test]
    fn test_missing_next_page_is_terminal_not_error() {
        let body = format!(r#"{{ "articles": [{}] }}"#, article_json("abc123"));
        let page = parse_article_list(&body).unwrap();
        assert_eq!(page.next_page, None);
        assert_eq!(page.total_count, None);
    }

    #[test]
    fn test_null_next_page_is_terminal() {
        let body = r#"{ "articles": [], "next_page": null, "total_count": null }"#;
        let page = parse_article_list(body).unwrap();
        assert_eq!(page.next_page, None);
        assert_eq!(page.total_count, None);
    }

    #[test]
    fn test_missing_articles_is_schema_mismatch() {
        let err = parse_article_list(r#"{ "next_page": null }"#).unwrap_err();
        assert!(matches!(err, SchemaMismatch::MissingField("articles")));
    }

    #[test]
    fn test_wrong_articles_type_is_schema_mismatch() {
        let err = parse_article_list(r#"{ "articles": "nope" }"#).unwrap_err();
        assert!(matches!(err, SchemaMismatch::FieldMismatch(_)));
    }

    #[test]
    fn test_article_missing_required_field_is_schema_mismatch() {
        // "title" removed from an otherwise complete article
        let body = r#"{ "articles": [{
            "id": 1, "slug": "abc123",
            "published_at": "2024-03-01T12:00:00.000+09:00",
            "emoji": "🦀", "path": "/someone/articles/abc123",
            "liked_count": 0, "comments_count": 0, "body_letters_count": 1,
            "user": { "username": "someone", "name": "Someone" }
        }] }"#;
        let err = parse_article_list(body).unwrap_err();
        assert!(matches!(err, SchemaMismatch::FieldMismatch(_)));
    }

    #[test]
    fn test_non_object_body_is_schema_mismatch() {
        assert!(matches!(
            parse_article_list("[]").unwrap_err(),
            SchemaMismatch::NotAnObject
        ));
        assert!(matches!(
            parse_article_list("not json").unwrap_err(),
            SchemaMismatch::InvalidJson(_)
        ));
    }
}
