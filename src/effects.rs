use std::time::Duration;

use crate::config::TypingConfig;

/// One frame of the typewriter: what to show and how long until the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeStep {
    pub text: String,
    pub delay: Duration,
}

/// Types out each role one character at a time, holds it, deletes it, then
/// moves on to the next role forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    timing: TypingConfig,
    role_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(roles: Vec<String>, timing: TypingConfig) -> Self {
        Self {
            roles,
            timing,
            role_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.timing.start_delay)
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn tick(&mut self) -> TypeStep {
        let Some(role) = self.roles.get(self.role_index) else {
            return TypeStep {
                text: String::new(),
                delay: Duration::from_millis(self.timing.next_role_delay),
            };
        };
        let len = role.chars().count();
        if len == 0 {
            self.next_role();
            return TypeStep {
                text: String::new(),
                delay: Duration::from_millis(self.timing.next_role_delay),
            };
        }

        let mut delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.timing.delete_delay
        } else {
            self.char_index = (self.char_index + 1).min(len);
            self.timing.type_delay
        };
        let text = role.chars().take(self.char_index).collect::<String>();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay = self.timing.hold_delay;
        } else if self.deleting && self.char_index == 0 {
            self.next_role();
            delay = self.timing.next_role_delay;
        }

        TypeStep {
            text,
            delay: Duration::from_millis(delay),
        }
    }

    fn next_role(&mut self) {
        self.deleting = false;
        self.char_index = 0;
        self.role_index = (self.role_index + 1) % self.roles.len();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Visible,
    /// `hidden` applied; the fade-out transition is still running.
    Fading,
    Gone,
}

/// Body class present while page scrolling is blocked.
pub const NO_SCROLL: &str = "no-scroll";

/// Full-viewport overlay shown at load. Page scrolling stays blocked until
/// the overlay has finished fading out.
#[derive(Debug, Clone)]
pub struct Splash {
    phase: SplashPhase,
    duration: Duration,
}

impl Splash {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: SplashPhase::Visible,
            duration,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_hidden(&self) -> bool {
        self.phase != SplashPhase::Visible
    }

    pub fn blocks_scroll(&self) -> bool {
        self.phase != SplashPhase::Gone
    }

    /// Class for `<body>` in this phase. A new splash already blocks
    /// scrolling, so server-rendered markup starts out blocked.
    pub fn body_class(&self) -> &'static str {
        if self.blocks_scroll() {
            NO_SCROLL
        } else {
            ""
        }
    }

    /// Advance to `Fading` once `elapsed` since load reaches the display duration.
    pub fn elapsed(&mut self, elapsed: Duration) -> bool {
        if self.phase == SplashPhase::Visible && elapsed >= self.duration {
            self.phase = SplashPhase::Fading;
            return true;
        }
        false
    }

    /// The overlay's fade-out transition finished. Transitions that end while
    /// the overlay is still fully visible (e.g. bubbled from children) are ignored.
    pub fn transition_end(&mut self) -> bool {
        if self.phase == SplashPhase::Fading {
            self.phase = SplashPhase::Gone;
            return true;
        }
        false
    }
}

pub fn scroll_top_visible(scroll: f64, threshold: f64) -> bool {
    scroll > threshold
}

pub fn parallax_transform(scroll: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll * factor)
}

/// A single character of a revealed heading and its CSS animation delay.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealChar {
    pub ch: char,
    pub delay_ms: u64,
}

impl RevealChar {
    pub fn style(&self) -> String {
        format!(
            "opacity: 0; animation: fadeIn 0.5s ease-in-out forwards; animation-delay: {}ms",
            self.delay_ms
        )
    }
}

/// Split `text` into per-character fade-ins, each starting `step` seconds after the last.
pub fn reveal_schedule(text: &str, step: f64) -> Vec<RevealChar> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| RevealChar {
            ch,
            delay_ms: (i as f64 * step * 1000.0).round() as u64,
        })
        .collect()
}
