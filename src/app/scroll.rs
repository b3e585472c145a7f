use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::effects::{parallax_transform, scroll_top_visible};

use super::dom::smooth_scroll_to;
use super::page_state::PageState;

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let page = expect_context::<PageState>();
    let threshold = config.scroll_top_threshold;

    view! {
        <button
            class="scroll-top-btn"
            class:show=move || scroll_top_visible(page.scroll_y.get(), threshold)
            aria-label="Scroll to top"
            on:click=move |_| smooth_scroll_to(0.0)
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

#[component]
pub fn ParallaxImage(src: String, alt: String) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let page = expect_context::<PageState>();
    let factor = config.parallax_factor;

    view! {
        <div class="home-image">
            <img
                src=src
                alt=alt
                style:transform=move || parallax_transform(page.scroll_y.get(), factor)
            />
        </div>
    }
}
