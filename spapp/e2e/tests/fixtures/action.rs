use super::{find, world::HOST};
use anyhow::Result;
use fantoccini::Client;
use std::result::Result::Ok;

pub async fn goto_path(client: &Client, path: &str) -> Result<()> {
    let uri = format!("{}{}", HOST, path);
    client.goto(&uri).await?;
    Ok(())
}

pub async fn scroll_to_video(client: &Client) -> Result<()> {
    let video = find::element_with_selector(client, "#video").await?;
    client.execute(
        "arguments[0].scrollIntoView({block: 'center'});",
        vec![serde_json::to_value(&video)?],
    ).await?;
    Ok(())
}

pub async fn click_copy(client: &Client, key: &str) -> Result<()> {
    let button = find::copy_button(client, key).await?;
    button.click().await?;
    Ok(())
}
