use leptos::{either::Either, html, prelude::*};

use crate::config::SiteConfig;
use crate::effects::reveal_schedule;

use super::animate::use_one_shot;

/// Text that fades in one character at a time the first time it scrolls into view.
#[component]
pub fn RevealText(
    text: String,
    key: &'static str,
    #[prop(optional)] heading: bool,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let target = NodeRef::<html::Div>::new();
    let animated = use_one_shot(target, format!("reveal:{key}"), config.reveal_threshold);
    let chars = reveal_schedule(&text, config.reveal_step);

    let content = move || {
        if animated.get() {
            Either::Left(
                chars
                    .iter()
                    .map(|c| view! { <span style=c.style()>{c.ch.to_string()}</span> })
                    .collect_view(),
            )
        } else {
            Either::Right(text.clone())
        }
    };

    view! {
        <div node_ref=target class="reveal-text">
            {if heading {
                Either::Left(view! { <h1>{content}</h1> })
            } else {
                Either::Right(view! { <p>{content}</p> })
            }}
        </div>
    }
}
