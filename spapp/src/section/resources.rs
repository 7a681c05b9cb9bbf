use leptos::prelude::*;
use spcore::content::{
    ResourceGroup,
    ResourceLink,
    RESOURCE_GROUPS,
    RESOURCES_HEADING,
};

use crate::component::{Glyph, Icon};

#[component]
pub fn Resources() -> impl IntoView {
    view! {
        <section class="resources fade-in-up">
            <div class="resources-heading">
                <Icon glyph=Glyph::HuggingFace class="icon-heading"/>
                <span>{RESOURCES_HEADING}</span>
            </div>
            <div class="resource-groups">
                {RESOURCE_GROUPS.iter()
                    .map(|group| view! { <ResourceGroupCard group=*group/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ResourceGroupCard(group: ResourceGroup) -> impl IntoView {
    view! {
        <div class="resource-group">
            <h3>{group.title}</h3>
            <div class="resource-links">
                {group.links.iter()
                    .map(|link| view! { <ResourceButton link=*link/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ResourceButton(link: ResourceLink) -> impl IntoView {
    view! {
        <a class="resource-button" href=link.url target="_blank" rel="noopener noreferrer">
            <Icon glyph=link.icon class="icon icon-inline"/>
            {link.label}
        </a>
    }
}
