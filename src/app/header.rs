use leptos::{ev, ev::MouseEvent, html, prelude::*};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use crate::portfolio::NavItem;
use crate::view_state::link_target;

use super::dom::smooth_scroll_to;
use super::page_state::PageState;

fn node_contains<E: AsRef<web_sys::Node>>(el: Option<E>, target: Option<&web_sys::Node>) -> bool {
    el.is_some_and(|el| el.as_ref().contains(target))
}

#[component]
pub fn Header(nav: Vec<NavItem>, name: String) -> impl IntoView {
    let page = expect_context::<PageState>();
    let nav_ref = NodeRef::<html::Nav>::new();
    let toggle_ref = NodeRef::<html::Button>::new();

    // one listener for every link; the href fragment picks the section
    let on_nav_click = move |ev: MouseEvent| {
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a.nav-link").ok().flatten())
        else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(target) = link_target(&href) else {
            page.close_menu();
            return;
        };
        ev.prevent_default();
        if let Some(top) = page.activate_link(target) {
            smooth_scroll_to(top);
        }
    };

    let _ = use_event_listener(use_document(), ev::click, move |ev: MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let in_menu = node_contains(nav_ref.get_untracked(), target.as_ref());
        let in_toggle = node_contains(toggle_ref.get_untracked(), target.as_ref());
        page.view.maybe_update(|s| s.pointer_down(in_menu, in_toggle));
    });

    let menu_open = move || page.view.with(|s| s.menu().is_open());

    view! {
        <header class="sticky-header">
            <div class="header-inner">
                <a href="#home" class="logo">
                    {name}
                </a>
                <button
                    node_ref=toggle_ref
                    class="menu-toggle"
                    class:active=menu_open
                    aria-label="Toggle navigation"
                    on:click=move |_| {
                        page.view.update(|s| { s.toggle_menu(); });
                    }
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav node_ref=nav_ref class:active=menu_open on:click=on_nav_click>
                    <ul>
                        {nav
                            .into_iter()
                            .map(|item| {
                                let id = item.id.clone();
                                view! {
                                    <li>
                                        <a
                                            href=format!("#{}", item.id)
                                            class="nav-link"
                                            class:active=move || page.view.with(|s| s.is_active(&id))
                                        >
                                            {item.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
