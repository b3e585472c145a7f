use std::time::Duration;

use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SiteConfig;
use crate::contact::{ContactMessage, Notice, NoticeKind, Submission};

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let submission = Submission::new(Duration::from_millis(config.submit_delay));
    let send_delay = submission.delay().as_millis() as f64;
    let submission = StoredValue::new(submission);
    let (sending, set_sending) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let read_message = move || ContactMessage {
        name: name_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
        email: email_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
        subject: subject_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
        message: message_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
    };

    let UseTimeoutFnReturn {
        start: start_dismiss,
        ..
    } = use_timeout_fn(move |_: ()| set_notice.set(None), config.notice_duration as f64);

    let UseTimeoutFnReturn {
        start: start_send, ..
    } = use_timeout_fn(
        move |message: ContactMessage| {
            let Some(res) = submission.try_update_value(|s| s.complete(&message)).flatten()
            else {
                return;
            };
            if res.kind == NoticeKind::Success {
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
            }
            set_notice.set(Some(res));
            set_sending.set(false);
            start_dismiss(());
        },
        send_delay,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let started = submission.try_update_value(Submission::begin).unwrap_or(false);
        if !started {
            return;
        }
        set_notice.set(None);
        set_sending.set(true);
        start_send(read_message());
    };

    view! {
        <form node_ref=form_ref class="contact-form" on:submit=on_submit>
            <div class="form-row">
                <input node_ref=name_ref type="text" name="name" placeholder="Your Name" />
                <input node_ref=email_ref type="email" name="email" placeholder="Your Email" />
            </div>
            <input node_ref=subject_ref type="text" name="subject" placeholder="Subject" />
            <textarea node_ref=message_ref name="message" rows="6" placeholder="Your Message"></textarea>
            <button type="submit" class="btn" disabled=sending>
                {move || {
                    if sending.get() {
                        Either::Left(
                            view! {
                                <i class="fas fa-spinner fa-spin"></i>
                                " Sending..."
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <i class="fas fa-paper-plane"></i>
                                " Send Message"
                            },
                        )
                    }
                }}
            </button>
            {move || {
                notice
                    .get()
                    .map(|n| {
                        let class = n.class();
                        let icon = match n.kind {
                            NoticeKind::Success => "fas fa-check-circle",
                            NoticeKind::Error => "fas fa-exclamation-circle",
                        };
                        view! {
                            <div class=class>
                                <i class=icon></i>
                                " "
                                {n.text}
                            </div>
                        }
                    })
            }}
        </form>
    }
}
