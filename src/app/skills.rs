use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SiteConfig;
use crate::portfolio::SkillCategory;

use super::animate::use_one_shot;

#[component]
pub fn SkillCategoryCard(category: SkillCategory) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let target = NodeRef::<html::Div>::new();
    let animated = use_one_shot(
        target,
        format!("skills:{}", category.name),
        config.skill_threshold,
    );
    let (filled, set_filled) = signal(false);

    // bars start from zero; the short delay lets the reset paint before the fill transition
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_filled.set(true), config.bar_reset_delay as f64);
    Effect::new(move |_| {
        if animated.get() {
            start(());
        }
    });

    view! {
        <div node_ref=target class="skill-category" data-aos="fade-up">
            <h3>{category.name}</h3>
            {category
                .skills
                .into_iter()
                .map(|skill| {
                    let level = skill.level;
                    view! {
                        <div class="skill">
                            <div class="skill-info">
                                <span>{skill.name}</span>
                                <span>{format!("{level}%")}</span>
                            </div>
                            <div class="progress">
                                <div
                                    class="progress-bar"
                                    style:width=move || {
                                        if filled.get() { format!("{level}%") } else { "0".to_string() }
                                    }
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
