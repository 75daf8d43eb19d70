//! Fetching overlay content pages.

use crate::constants::{CONTENT_ID, CONTENT_TITLE_ATTR};
use anyhow::{anyhow, Context};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// The `#content` element of a fetched page and its title.
pub struct ContentPage {
    pub title: String,
    pub body: web::Element,
}

async fn fetch_ok(path: &str) -> anyhow::Result<web::Response> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow!("fetch {path}: {:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|_| anyhow!("fetch {path}: not a Response"))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {path}: HTTP {}", resp.status()));
    }
    Ok(resp)
}

pub async fn fetch_text(path: &str) -> anyhow::Result<String> {
    let resp = fetch_ok(path).await?;
    let promise = resp.text().map_err(|e| anyhow!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("read body of {path}: {:?}", e))?
        .as_string()
        .ok_or_else(|| anyhow!("body of {path} is not text"))
}

pub async fn fetch_blob(path: &str) -> anyhow::Result<web::Blob> {
    let resp = fetch_ok(path).await?;
    let promise = resp.blob().map_err(|e| anyhow!("{:?}", e))?;
    let blob = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("read body of {path}: {:?}", e))?;
    blob.dyn_into()
        .map_err(|_| anyhow!("body of {path} is not a Blob"))
}

/// Parse an HTML document and pull out its `#content` element.
pub fn parse_page(html: &str) -> anyhow::Result<ContentPage> {
    let parser = web::DomParser::new().map_err(|e| anyhow!("DOMParser: {:?}", e))?;
    let doc = parser
        .parse_from_str(html, web::SupportedType::TextHtml)
        .map_err(|e| anyhow!("parse: {:?}", e))?;
    let body = doc
        .get_element_by_id(CONTENT_ID)
        .with_context(|| format!("page has no #{CONTENT_ID}"))?;
    let title = body.get_attribute(CONTENT_TITLE_ATTR).unwrap_or_default();
    Ok(ContentPage { title, body })
}

pub async fn load_page(path: &str) -> anyhow::Result<ContentPage> {
    let html = fetch_text(path).await?;
    parse_page(&html)
}
