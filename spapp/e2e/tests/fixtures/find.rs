use anyhow::{Ok, Result};
use fantoccini::{elements::Element, Client, Locator};

pub async fn text_with_selector(client: &Client, selector: &str) -> Result<String> {
    let element = client
        .wait()
        .for_element(Locator::Css(selector))
        .await
        .expect(format!("loaded message not found by selector `{selector}`").as_str());
    let text = element.text().await?;
    Ok(text)
}

pub async fn element_with_selector(client: &Client, selector: &str) -> Result<Element> {
    let element = client
        .wait()
        .for_element(Locator::Css(selector))
        .await
        .expect(format!("element not found by selector `{selector}`").as_str());
    Ok(element)
}

pub async fn link_with_href(client: &Client, href: &str) -> Result<Element> {
    let selector = format!("a[href=\"{href}\"]");
    let link = client
        .wait()
        .for_element(Locator::Css(&selector))
        .await
        .expect(format!("Link to `{href}` not found").as_str());
    Ok(link)
}

pub async fn copy_button(client: &Client, key: &str) -> Result<Element> {
    element_with_selector(client, &format!("#{key} .copy-button")).await
}
