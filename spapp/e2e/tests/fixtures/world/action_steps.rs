use crate::fixtures::{action, world::AppWorld};
use anyhow::{Ok, Result};
use cucumber::{given, when};
use std::time::Duration;

#[given("I see the app")]
#[given("I open the app")]
#[when("I open the app")]
async fn i_open_the_app(world: &mut AppWorld) -> Result<()> {
    let client = &world.client;
    action::goto_path(client, "").await?;
    Ok(())
}

#[given(regex = "^I (refresh|reload) the (browser|page)$")]
#[when(regex = "^I (refresh|reload) the (browser|page)$")]
async fn i_refresh_the_browser(world: &mut AppWorld) -> Result<()> {
    let client = &world.client;
    client.refresh().await?;
    Ok(())
}

#[when("I scroll to the demo video")]
async fn i_scroll_to_the_demo_video(world: &mut AppWorld) -> Result<()> {
    let client = &world.client;
    action::scroll_to_video(client).await?;
    Ok(())
}

#[when(regex = r"^I copy the citation (\S+)$")]
async fn i_copy_the_citation(world: &mut AppWorld, key: String) -> Result<()> {
    let client = &world.client;
    action::click_copy(client, &key).await?;
    Ok(())
}

#[when(regex = r"^I wait (\d+) milliseconds$")]
async fn i_wait(_world: &mut AppWorld, millis: u64) -> Result<()> {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    Ok(())
}
