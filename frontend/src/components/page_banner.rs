use yew::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct PageBannerProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

/// Blue banner that opens every inner page.
#[function_component(PageBanner)]
pub fn page_banner(props: &PageBannerProps) -> Html {
    html! {
        <section class="page-banner">
            <div class="banner-glow">
                <div class="glow white"></div>
                <div class="glow yellow"></div>
            </div>
            <div class="container-custom">
                <Reveal start={0.80} class="banner-content">
                    <span class="banner-eyebrow">{props.eyebrow.clone()}</span>
                    <h1>{props.title.clone()}</h1>
                    <p>{props.subtitle.clone()}</p>
                </Reveal>
            </div>
        </section>
    }
}
