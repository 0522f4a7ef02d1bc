use contracts::shared::CodeKeywords;
use gloo_net::http::Request;

/// Served next to the site's static pages.
pub const CODE_KEYWORDS_URL: &str = "/api/code-keywords";

/// Load the code keyword configuration for the page.
pub async fn fetch_code_keywords() -> Result<CodeKeywords, String> {
    let response = Request::get(CODE_KEYWORDS_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
