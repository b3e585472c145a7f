use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::view_state::Section;

/// Height of the sticky header, or 0 if there isn't one.
pub fn header_height() -> f64 {
    document()
        .query_selector(".sticky-header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Measure the sections named by `ids`, in document order. Ids with no
/// element on the page are skipped.
pub fn measure_sections<S: AsRef<str>>(ids: &[S]) -> Vec<Section> {
    let doc = document();
    let mut sections = ids
        .iter()
        .filter_map(|id| {
            let el = doc
                .get_element_by_id(id.as_ref())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(Section::new(
                id.as_ref(),
                el.offset_top() as f64,
                el.offset_height() as f64,
            ))
        })
        .collect::<Vec<_>>();
    sections.sort_by(|a, b| a.top.total_cmp(&b.top));
    sections
}

pub fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

pub fn set_body_class(class: &str, on: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let list = body.class_list();
    let res = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = res {
        log::warn!("couldn't update body class {class}: {e:?}");
    }
}
