use crate::fixtures::{check, world::AppWorld};
use anyhow::{Ok, Result};
use cucumber::{then, gherkin::Step};
use spcore::content::CITATIONS;

#[then(regex = r"^I see the page title is (.*)$")]
async fn i_see_the_page_title_is(
    world: &mut AppWorld,
    text: String,
) -> Result<()> {
    let client = &world.client;
    check::text_with_selector_is(client, "h1", &text).await?;
    Ok(())
}

#[then(expr = "I can find the following links")]
async fn i_can_find_the_following_links(
    world: &mut AppWorld,
    step: &Step,
) -> Result<()> {
    let client = &world.client;
    if let Some(table) = step.table.as_ref() {
        for row in table.rows.iter() {
            check::link_exists(client, &row[0]).await?;
        }
    }
    Ok(())
}

#[then("I see both citations in full")]
async fn i_see_both_citations_in_full(world: &mut AppWorld) -> Result<()> {
    let client = &world.client;
    for citation in CITATIONS.iter() {
        let selector = format!("#{} .bibtex", citation.key);
        check::text_with_selector_is(client, citation.bibtex, &selector).await?;
    }
    Ok(())
}

#[then("I see the demo video revealed")]
async fn i_see_the_demo_video_revealed(world: &mut AppWorld) -> Result<()> {
    let client = &world.client;
    check::video_is_revealed(client).await?;
    Ok(())
}

#[then(regex = r"^I see the copy label of (\S+) is (.*)$")]
async fn i_see_the_copy_label(
    world: &mut AppWorld,
    key: String,
    label: String,
) -> Result<()> {
    let client = &world.client;
    check::copy_label_is(client, &key, &label).await?;
    Ok(())
}

#[then(regex = r"^I see the footer mentions (.*)$")]
async fn i_see_the_footer_mentions(
    world: &mut AppWorld,
    text: String,
) -> Result<()> {
    let client = &world.client;
    check::text_with_selector_contains(client, &text, "footer").await?;
    Ok(())
}
