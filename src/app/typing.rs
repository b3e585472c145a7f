use std::time::Duration;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::effects::Typewriter;

fn schedule_tick(
    writer: StoredValue<Typewriter>,
    handle: StoredValue<Option<TimeoutHandle>>,
    set_text: WriteSignal<String>,
    delay: Duration,
) {
    let res = set_timeout_with_handle(
        move || {
            // component is gone
            let Some(step) = writer.try_update_value(|w| w.tick()) else {
                return;
            };
            set_text.set(step.text);
            schedule_tick(writer, handle, set_text, step.delay);
        },
        delay,
    );
    match res {
        Ok(h) => {
            handle.try_set_value(Some(h));
        }
        Err(e) => log::warn!("couldn't schedule typing effect: {e:?}"),
    }
}

#[component]
pub fn TypingText(roles: Vec<String>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (text, set_text) = signal(String::new());
    let writer = StoredValue::new(Typewriter::new(roles, config.typing));
    let handle = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        let start = writer.with_value(Typewriter::start_delay);
        schedule_tick(writer, handle, set_text, start);
    });

    on_cleanup(move || {
        if let Some(h) = handle.try_get_value().flatten() {
            h.clear();
        }
    });

    view! { <span class="typing-text">{text}</span> }
}
