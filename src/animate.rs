use std::collections::HashMap;

/// Browsers report crossing ratios with rounding error (0.2999 for a 0.3
/// threshold), and only call back again on the next crossing.
const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Pending,
    Animated,
}

/// Tracks elements that play an entrance animation once, the first time
/// enough of them is visible.
///
/// Keys are removed from the observed set as soon as they animate, so the
/// set only ever shrinks after registration.
#[derive(Debug, Clone, Default)]
pub struct OneShotAnimations {
    observed: HashMap<String, f64>,
    animated: Vec<String>,
}

impl OneShotAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `keys` with a visible-fraction threshold in `[0, 1]`.
    ///
    /// Keys that already animated stay animated; keys already observed keep
    /// their original threshold.
    pub fn register<I, S>(&mut self, keys: I, threshold: f64)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let threshold = threshold.clamp(0.0, 1.0);
        for key in keys {
            let key = key.into();
            if self.animated.contains(&key) {
                continue;
            }
            self.observed.entry(key).or_insert(threshold);
        }
    }

    pub fn state(&self, key: &str) -> Option<AnimState> {
        if self.observed.contains_key(key) {
            Some(AnimState::Pending)
        } else if self.animated.iter().any(|k| k == key) {
            Some(AnimState::Animated)
        } else {
            None
        }
    }

    pub fn observed_len(&self) -> usize {
        self.observed.len()
    }

    /// Feed an intersection observation for `key`.
    ///
    /// Returns true exactly once per key: on the first observation whose
    /// visible `ratio` reaches the key's threshold. The caller plays the
    /// animation and unsubscribes its observer when this returns true.
    pub fn observe(&mut self, key: &str, is_intersecting: bool, ratio: f64) -> bool {
        let Some(&threshold) = self.observed.get(key) else {
            return false;
        };
        if !is_intersecting || ratio + RATIO_TOLERANCE < threshold {
            return false;
        }
        self.observed.remove(key);
        self.animated.push(key.to_string());
        log::debug!("animating {key}");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_once() {
        let mut anims = OneShotAnimations::new();
        anims.register(["skills-frontend"], 0.3);
        assert_eq!(anims.state("skills-frontend"), Some(AnimState::Pending));

        assert!(!anims.observe("skills-frontend", true, 0.1));
        assert!(anims.observe("skills-frontend", true, 0.35));
        assert_eq!(anims.state("skills-frontend"), Some(AnimState::Animated));

        // leaving and re-entering the viewport does nothing
        for _ in 0..5 {
            assert!(!anims.observe("skills-frontend", false, 0.0));
            assert!(!anims.observe("skills-frontend", true, 1.0));
        }
    }

    #[test]
    fn test_observed_set_only_shrinks() {
        let mut anims = OneShotAnimations::new();
        anims.register(["a", "b", "c"], 0.5);
        assert_eq!(anims.observed_len(), 3);

        anims.observe("b", true, 0.5);
        assert_eq!(anims.observed_len(), 2);

        // re-registering an animated key does not resurrect it
        anims.register(["b"], 0.5);
        assert_eq!(anims.observed_len(), 2);
        assert_eq!(anims.state("b"), Some(AnimState::Animated));

        anims.observe("a", true, 0.9);
        anims.observe("c", true, 0.9);
        assert_eq!(anims.observed_len(), 0);
    }

    #[test]
    fn test_not_intersecting_ignored() {
        let mut anims = OneShotAnimations::new();
        anims.register(["hero-title"], 0.5);
        // ratio can be reported above threshold while the entry leaves
        assert!(!anims.observe("hero-title", false, 0.6));
        assert_eq!(anims.state("hero-title"), Some(AnimState::Pending));
    }

    #[test]
    fn test_crossing_reported_just_below_threshold() {
        let mut anims = OneShotAnimations::new();
        anims.register(["skills-frontend", "about"], 0.3);
        assert!(anims.observe("skills-frontend", true, 0.2999));
        assert!(!anims.observe("about", true, 0.25));
    }

    #[test]
    fn test_unregistered_key() {
        let mut anims = OneShotAnimations::new();
        assert!(!anims.observe("nope", true, 1.0));
        assert_eq!(anims.state("nope"), None);
    }

    #[test]
    fn test_threshold_clamped() {
        let mut anims = OneShotAnimations::new();
        anims.register(["x"], 4.0);
        assert!(anims.observe("x", true, 1.0));
    }
}
