use leptos::prelude::*;

use crate::animate::{AnimState, OneShotAnimations};
use crate::view_state::{Section, ViewState};

use super::dom::{header_height, measure_sections};

/// Shared scroll-spy state for the page, provided through context.
#[derive(Clone, Copy)]
pub struct PageState {
    pub view: RwSignal<ViewState>,
    pub scroll_y: Signal<f64>,
}

impl PageState {
    pub fn new(section_ids: &[String], threshold: f64, scroll_y: Signal<f64>) -> Self {
        Self {
            view: RwSignal::new(ViewState::new(section_ids, threshold)),
            scroll_y,
        }
    }

    fn measure(&self) -> (Vec<Section>, f64) {
        let ids = self.view.with_untracked(|s| {
            s.links()
                .iter()
                .map(|l| l.target.clone())
                .collect::<Vec<_>>()
        });
        (measure_sections(&ids), header_height())
    }

    /// Keep the active nav link in step with the scroll position. Runs once
    /// on mount too, so the initial position is highlighted.
    pub fn track_scroll(self) {
        Effect::new(move |_| {
            let y = self.scroll_y.get();
            let (sections, header) = self.measure();
            self.view
                .maybe_update(|s| s.recompute_active_section(y, &sections, header));
        });
    }

    pub fn close_menu(self) {
        self.view.maybe_update(|s| s.close_menu());
    }

    /// Closes the menu. Returns the offset to scroll to if `target` is a section on the page.
    pub fn activate_link(self, target: &str) -> Option<f64> {
        let (sections, header) = self.measure();
        let mut top = None;
        self.view.maybe_update(|s| {
            let before = s.clone();
            top = s.activate_link(target, &sections, header);
            *s != before
        });
        top
    }
}

#[derive(Clone, Copy)]
pub struct Animations(StoredValue<OneShotAnimations>);

impl Default for Animations {
    fn default() -> Self {
        Self::new()
    }
}

impl Animations {
    pub fn new() -> Self {
        Self(StoredValue::new(OneShotAnimations::new()))
    }

    pub fn register(&self, key: &str, threshold: f64) -> bool {
        self.0.update_value(|a| a.register([key], threshold));
        self.0
            .with_value(|a| a.state(key) == Some(AnimState::Animated))
    }

    pub fn observe(&self, key: &str, is_intersecting: bool, ratio: f64) -> bool {
        self.0
            .try_update_value(|a| a.observe(key, is_intersecting, ratio))
            .unwrap_or(false)
    }
}
