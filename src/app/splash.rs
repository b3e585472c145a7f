use std::time::Duration;

use leptos::{ev::TransitionEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SiteConfig;
use crate::effects::{Splash, SplashPhase, NO_SCROLL};

use super::dom::set_body_class;

#[component]
pub fn SplashScreen(name: String) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let splash = RwSignal::new(Splash::new(Duration::from_millis(config.splash_duration)));

    Effect::new(move |_| {
        set_body_class(NO_SCROLL, splash.with(Splash::blocks_scroll));
    });

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            splash.maybe_update(|s| {
                let shown_for = s.duration();
                s.elapsed(shown_for)
            });
            log::debug!("splash screen hidden");
        },
        config.splash_duration as f64,
    );
    Effect::new(move |_| start(()));

    let on_transition_end = move |ev: TransitionEvent| {
        // ignore transitions bubbling up from the overlay's children
        if ev.target() != ev.current_target() {
            return;
        }
        splash.maybe_update(Splash::transition_end);
    };

    move || {
        (splash.with(Splash::phase) != SplashPhase::Gone).then(|| {
            let name = name.clone();
            view! {
                <div
                    class="splash-screen"
                    class:hidden=move || splash.with(Splash::is_hidden)
                    on:transitionend=on_transition_end
                >
                    <div class="splash-content">
                        <div class="splash-logo">{name}</div>
                        <div class="splash-spinner"></div>
                    </div>
                </div>
            }
        })
    }
}
