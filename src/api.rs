//! Zenn API Client
//!
//! Fetch wrappers for the public article-list endpoint. One page per request,
//! pagination follows `next_page` until the platform reports no more.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::{parse_article_list, SchemaMismatch, ZennApiResponse, ZennArticle};

const API_BASE: &str = "https://zenn.dev/api/articles";

/// Article fetch failure, surfaced unchanged to whoever started the fetch
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("article fetch failed: {0}")]
    Network(String),
    #[error(transparent)]
    Schema(#[from] SchemaMismatch),
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

async fn fetch_text(url: &str) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not return a Response".to_string()))?;
    if !response.ok() {
        return Err(ApiError::Network(format!(
            "HTTP {} from {url}",
            response.status()
        )));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| ApiError::Network("response body is not text".to_string()))
}

/// Fetch one page of a user's articles, newest first
pub async fn fetch_articles(username: &str, page: u32) -> Result<ZennApiResponse, ApiError> {
    let url = format!("{API_BASE}?username={username}&order=latest&page={page}");
    let body = fetch_text(&url).await?;
    Ok(parse_article_list(&body)?)
}

/// Fetch every page of a user's articles.
///
/// Pages until `next_page` comes back null. Errors on any page abort the
/// whole fetch.
pub async fn fetch_all_articles(username: &str) -> Result<Vec<ZennArticle>, ApiError> {
    let mut articles = Vec::new();
    let mut page = 1;
    loop {
        let response = fetch_articles(username, page).await?;
        articles.extend(response.articles);
        match response.next_page {
            Some(next) => page = next,
            None => return Ok(articles),
        }
    }
}
