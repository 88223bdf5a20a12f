//! Smoke check of the example application

use std::time::Duration;

use regex::Regex;
use tracing::info;

use crate::error::{E2eError, E2eResult};

/// Text of the first paragraph the example application serves
pub const EXPECTED_GREETING: &str = "Hello, Zalenium!";

/// Fetch `/` from `base_url` and assert the first `<p>` reads
/// [`EXPECTED_GREETING`].
pub async fn check_greeting(base_url: &str) -> E2eResult<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    let url = format!("{}/", base_url.trim_end_matches('/'));
    let resp = client.get(&url).send().await?;
    if !resp.status().is_success() {
        return Err(E2eError::AssertionFailed(format!(
            "GET {} returned {}",
            url,
            resp.status()
        )));
    }

    let body = resp.text().await?;
    let text = first_paragraph(&body)
        .ok_or_else(|| E2eError::AssertionFailed(format!("no <p> element in {:?}", body)))?;

    if text != EXPECTED_GREETING {
        return Err(E2eError::AssertionFailed(format!(
            "expected {:?}, got {:?}",
            EXPECTED_GREETING, text
        )));
    }

    info!("{} greets with {:?}", url, text);
    Ok(())
}

/// Trimmed inner text of the first `<p>` element
fn first_paragraph(html: &str) -> Option<String> {
    let paragraph = Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p>").ok()?;
    let tags = Regex::new(r"<[^>]+>").ok()?;

    let inner = paragraph.captures(html)?.get(1)?.as_str();
    Some(tags.replace_all(inner, "").trim().to_string())
}
