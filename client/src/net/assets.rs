//! Static asset fetches for the browser build.
//!
//! SSR stubs return an error; nothing on the server needs these assets.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(url: &str, status: u16) -> String {
    format!("fetch {url} failed: {status}")
}

/// Fetch a same-origin text asset.
///
/// # Errors
///
/// Returns a message on transport failure, non-2xx status, or when called
/// outside the browser.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message(url, resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(format!("fetch {url}: not available during server rendering"))
    }
}
