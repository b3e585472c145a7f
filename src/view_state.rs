//! Scroll-spy navigation state.
//!
//! Everything here is plain data: the UI layer measures sections, feeds the
//! scroll position in, and only touches the DOM when an operation reports a
//! change.

/// A named, vertically positioned region of the page that a nav link points at.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Offset from the top of the document.
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub target: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Section id named by a nav link's `href` fragment (`"#about"` -> `"about"`).
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Id of the section the reader is currently in.
///
/// A section qualifies once `scroll >= top - header_height - threshold`; when
/// several qualify the last one in document order wins, so the result is the
/// section whose top has most recently been scrolled past.
pub fn current_section(
    scroll: f64,
    sections: &[Section],
    header_height: f64,
    threshold: f64,
) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll >= s.top - header_height - threshold)
        .last()
        .map(|s| s.id.as_str())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    links: Vec<NavLink>,
    current: Option<String>,
    menu: MenuState,
    threshold: f64,
}

impl ViewState {
    pub fn new<S: AsRef<str>>(targets: &[S], threshold: f64) -> Self {
        let links = targets
            .iter()
            .map(|t| NavLink {
                target: t.as_ref().to_string(),
                active: false,
            })
            .collect();
        Self {
            links,
            current: None,
            menu: MenuState::Closed,
            threshold,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.active)
            .map(|l| l.target.as_str())
    }

    pub fn is_active(&self, target: &str) -> bool {
        self.links.iter().any(|l| l.active && l.target == target)
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Recompute which link is active for `scroll`. Returns true if anything changed.
    pub fn recompute_active_section(
        &mut self,
        scroll: f64,
        sections: &[Section],
        header_height: f64,
    ) -> bool {
        let current = current_section(scroll, sections, header_height, self.threshold);
        self.set_current(current)
    }

    /// Handle a click on the link for `target`.
    ///
    /// The menu is always closed. Returns the document offset to smooth-scroll
    /// to, or `None` when no such section exists (the active link is left alone
    /// in that case). Otherwise only this link is marked active until the next
    /// scroll recompute.
    pub fn activate_link(
        &mut self,
        target: &str,
        sections: &[Section],
        header_height: f64,
    ) -> Option<f64> {
        self.close_menu();
        let section = sections.iter().find(|s| s.id == target)?;
        self.set_current(Some(target));
        Some(section.top - header_height)
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = match self.menu {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.menu
    }

    /// Returns true if the menu was open.
    pub fn close_menu(&mut self) -> bool {
        let was_open = self.menu.is_open();
        self.menu = MenuState::Closed;
        was_open
    }

    /// A pointer interaction anywhere on the page; closes the menu unless it
    /// landed inside the menu or on its toggle.
    pub fn pointer_down(&mut self, in_menu: bool, in_toggle: bool) -> bool {
        if in_menu || in_toggle {
            return false;
        }
        self.close_menu()
    }

    fn set_current(&mut self, current: Option<&str>) -> bool {
        if self.current.as_deref() == current {
            return false;
        }
        if current.is_some() {
            log::debug!("current section: {:?}", current);
        }
        self.current = current.map(str::to_string);
        for link in self.links.iter_mut() {
            link.active = Some(link.target.as_str()) == current;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 800.0),
            Section::new("contact", 1600.0, 800.0),
        ]
    }

    fn state() -> ViewState {
        ViewState::new(&["home", "about", "contact"], 50.0)
    }

    #[test]
    fn test_current_section_scenario() {
        let sections = sections();
        assert_eq!(current_section(900.0, &sections, 100.0, 50.0), Some("about"));
        assert_eq!(current_section(0.0, &sections, 100.0, 50.0), Some("home"));
        // about qualifies from 800 - 100 - 50
        assert_eq!(current_section(649.0, &sections, 100.0, 50.0), Some("home"));
        assert_eq!(current_section(650.0, &sections, 100.0, 50.0), Some("about"));
        assert_eq!(current_section(5000.0, &sections, 100.0, 50.0), Some("contact"));
    }

    #[test]
    fn test_nothing_above_first_section() {
        let sections = vec![Section::new("home", 400.0, 800.0)];
        assert_eq!(current_section(0.0, &sections, 0.0, 50.0), None);

        let mut state = ViewState::new(&["home"], 50.0);
        assert!(!state.recompute_active_section(0.0, &sections, 0.0));
        assert_eq!(state.active(), None);
    }

    #[test]
    fn test_last_qualifying_section_wins() {
        // overlapping geometry: both tops are above the scroll position
        let sections = vec![
            Section::new("a", 0.0, 1000.0),
            Section::new("b", 100.0, 50.0),
        ];
        assert_eq!(current_section(200.0, &sections, 0.0, 0.0), Some("b"));
    }

    #[test]
    fn test_at_most_one_active() {
        let sections = sections();
        let mut state = state();
        let mut scroll = -200.0;
        while scroll < 3000.0 {
            state.recompute_active_section(scroll, &sections, 100.0);
            assert!(state.links().iter().filter(|l| l.active).count() <= 1);
            scroll += 37.0;
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let sections = sections();
        let mut state = state();
        assert!(state.recompute_active_section(900.0, &sections, 100.0));
        assert!(state.is_active("about"));
        assert!(!state.recompute_active_section(900.0, &sections, 100.0));
        // still within about
        assert!(!state.recompute_active_section(1000.0, &sections, 100.0));
        assert!(state.recompute_active_section(1500.0, &sections, 100.0));
        assert_eq!(state.active(), Some("contact"));
    }

    #[test]
    fn test_unknown_section_clears_links() {
        let unlinked = vec![Section::new("blog", 0.0, 800.0)];
        let mut state = state();
        state.recompute_active_section(900.0, &sections(), 100.0);
        assert!(state.recompute_active_section(10.0, &unlinked, 0.0));
        assert_eq!(state.active(), None);
    }

    #[test]
    fn test_activate_link() {
        let sections = sections();
        let mut state = state();
        state.recompute_active_section(0.0, &sections, 100.0);

        let top = state.activate_link("contact", &sections, 100.0);
        assert_eq!(top, Some(1500.0));
        assert_eq!(state.active(), Some("contact"));

        // repeated clicks change nothing
        let links = state.links().to_vec();
        assert_eq!(state.activate_link("contact", &sections, 100.0), Some(1500.0));
        assert_eq!(state.links(), &links[..]);

        // scroll resolves the real section again
        assert!(state.recompute_active_section(900.0, &sections, 100.0));
        assert_eq!(state.active(), Some("about"));
    }

    #[test]
    fn test_activate_missing_section() {
        let sections = sections();
        let mut state = state();
        state.toggle_menu();
        state.recompute_active_section(900.0, &sections, 100.0);
        assert_eq!(state.activate_link("projects", &sections, 100.0), None);
        assert_eq!(state.active(), Some("about"));
        assert_eq!(state.menu(), MenuState::Closed);
    }

    #[test]
    fn test_click_on_unlinked_section_closes_menu() {
        let mut state = ViewState::new(&["home", "blog"], 50.0);
        state.toggle_menu();
        let home = [Section::new("home", 0.0, 800.0)];
        assert_eq!(state.activate_link("blog", &home, 100.0), None);
        assert_eq!(state.menu(), MenuState::Closed);
    }

    #[test]
    fn test_click_always_closes_menu() {
        let sections = sections();
        for open in [false, true] {
            let mut state = state();
            if open {
                state.toggle_menu();
            }
            state.activate_link("about", &sections, 0.0);
            assert_eq!(state.menu(), MenuState::Closed);
        }
    }

    #[test]
    fn test_menu_toggle_and_outside_click() {
        let mut state = state();
        assert_eq!(state.toggle_menu(), MenuState::Open);
        assert!(!state.pointer_down(true, false));
        assert!(!state.pointer_down(false, true));
        assert!(state.menu().is_open());
        assert!(state.pointer_down(false, false));
        assert_eq!(state.menu(), MenuState::Closed);
        // closing a closed menu is not a change
        assert!(!state.close_menu());
        assert_eq!(state.toggle_menu(), MenuState::Open);
        assert_eq!(state.toggle_menu(), MenuState::Closed);
    }

    #[test]
    fn test_link_target() {
        assert_eq!(link_target("#about"), Some("about"));
        assert_eq!(link_target("#"), None);
        assert_eq!(link_target("/blog"), None);
    }
}
