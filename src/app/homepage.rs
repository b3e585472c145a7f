use chrono::{DateTime, Datelike};
use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::use_window_scroll;

use crate::config::SiteConfig;
use crate::portfolio::{portfolio, ContactInfo, Portfolio, Project};

use super::contact::ContactForm;
use super::header::Header;
use super::page_state::{Animations, PageState};
use super::reveal::RevealText;
use super::scroll::{ParallaxImage, ScrollTopButton};
use super::skills::SkillCategoryCard;
use super::splash::SplashScreen;
use super::typing::TypingText;

#[component]
pub fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(p) => Either::Left(view! { <PortfolioPage portfolio=p.clone() /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <p class="content-error">"This page is temporarily unavailable."</p>
            })
        }
    }
}

#[component]
fn PortfolioPage(portfolio: Portfolio) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (_, scroll_y) = use_window_scroll();
    let page = PageState::new(&portfolio.section_ids(), config.nav_threshold, scroll_y);
    provide_context(page);
    provide_context(Animations::new());
    page.track_scroll();

    #[cfg(feature = "hydrate")]
    {
        let aos = config.aos.clone();
        Effect::new(move |_| super::aos::init_aos(&aos));
    }

    let Portfolio {
        name,
        title,
        roles,
        intro,
        hero_image,
        nav,
        about,
        skills,
        projects,
        contact,
    } = portfolio;
    let footer_name = name.clone();

    view! {
        <Title text=title.clone() />
        <SplashScreen name=name.clone() />
        <Header nav name=name.clone() />
        <main>
            <section id="home" class="hero-section">
                <div class="home-text-content">
                    <RevealText text=format!("Hi, I'm {name}") key="home-title" heading=true />
                    <h2>"I'm a " <TypingText roles /></h2>
                    <RevealText text=intro key="home-intro" />
                    <a href="#contact" class="btn">
                        "Get in touch"
                    </a>
                </div>
                <ParallaxImage src=hero_image alt=name.clone() />
            </section>
            <section id="about">
                <h2 class="section-title" data-aos="fade-up">
                    "About Me"
                </h2>
                <div class="about-content" data-aos="fade-up">
                    {about.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
            </section>
            <section id="skills">
                <h2 class="section-title" data-aos="fade-up">
                    "Skills"
                </h2>
                <div class="skills-grid">
                    {skills
                        .into_iter()
                        .map(|category| view! { <SkillCategoryCard category /> })
                        .collect_view()}
                </div>
            </section>
            <section id="projects">
                <h2 class="section-title" data-aos="fade-up">
                    "Projects"
                </h2>
                <div class="projects-grid">
                    {projects.into_iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </section>
            <section id="contact">
                <h2 class="section-title" data-aos="fade-up">
                    "Contact"
                </h2>
                <div class="contact-content">
                    <ContactDetails contact />
                    <ContactForm />
                </div>
            </section>
        </main>
        <Footer name=footer_name />
        <ScrollTopButton />
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card" data-aos="fade-up">
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <div class="project-tags">
                {project.tags.into_iter().map(|t| view! { <span>{t}</span> }).collect_view()}
            </div>
            {project
                .link
                .map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer">
                            <i class="fab fa-github"></i>
                            " View code"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
fn ContactDetails(contact: ContactInfo) -> impl IntoView {
    view! {
        <div class="contact-info" data-aos="fade-right">
            <p>
                <i class="fas fa-envelope"></i>
                " "
                <a href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a>
            </p>
            <p>
                <i class="fas fa-map-marker-alt"></i>
                " "
                {contact.location}
            </p>
            <div class="social-links">
                <a href=contact.github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                    <i class="fab fa-github"></i>
                </a>
                <a
                    href=contact.linkedin
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="LinkedIn"
                >
                    <i class="fab fa-linkedin"></i>
                </a>
            </div>
        </div>
    }
}

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|d| d.year())
}

#[component]
fn Footer(name: String) -> impl IntoView {
    let year = build_year().map(|y| format!("{y} ")).unwrap_or_default();
    view! {
        <footer>
            <p>{format!("© {year}{name}. All rights reserved.")}</p>
        </footer>
    }
}
