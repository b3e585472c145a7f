use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use super::page_state::Animations;

/// Flips to true the first time `threshold` of `target` is in view, then
/// disconnects the observer.
pub fn use_one_shot(target: NodeRef<html::Div>, key: String, threshold: f64) -> ReadSignal<bool> {
    let anims = expect_context::<Animations>();
    let already = anims.register(&key, threshold);
    let (animated, set_animated) = signal(already);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let hit = entries
                .iter()
                .any(|e| anims.observe(&key, e.is_intersecting(), e.intersection_ratio()));
            if hit {
                set_animated.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if animated.get() {
            stop();
        }
    });

    animated
}
