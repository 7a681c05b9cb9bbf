use crate::fixtures::find;
use anyhow::{Error, Ok, Result};
use fantoccini::Client;
use pretty_assertions::assert_eq;
use std::time::Duration;

pub async fn text_with_selector_is(client: &Client, expected: &str, selector: &str) -> Result<()> {
    let actual = find::text_with_selector(client, selector).await?;
    assert_eq!(&actual, expected);
    Ok(())
}

pub async fn text_with_selector_contains(client: &Client, expected: &str, selector: &str) -> Result<()> {
    let actual = find::text_with_selector(client, selector).await?;
    if !actual.contains(expected) {
        return Err(Error::msg(format!("`{selector}` does not contain `{expected}`")));
    }
    Ok(())
}

pub async fn link_exists(client: &Client, href: &str) -> Result<()> {
    find::link_with_href(client, href).await?;
    Ok(())
}

pub async fn video_is_revealed(client: &Client) -> Result<()> {
    let video = find::element_with_selector(client, "#video").await?;
    // the reveal is driven by the observer callback, so allow it a moment
    for _ in 0..20 {
        let class = video.attr("class").await?.unwrap_or_default();
        if class.split_whitespace().any(|c| c == "revealed") {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    Err(Error::msg("video was never revealed"))
}

pub async fn copy_label_is(client: &Client, key: &str, expected: &str) -> Result<()> {
    text_with_selector_is(client, expected, &format!("#{key} .copy-label")).await
}
