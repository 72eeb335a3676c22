//! Content sections: about, skills, projects, services, and the footer.
//!
//! Cards lift on hover through an inline transform; the scroll reveal
//! controller picks them up by class.

use leptos::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::content::{
    ABOUT_PARAGRAPHS, NAV_ENTRIES, OWNER_NAME, PROJECTS, Project, SERVICES, SKILL_CATEGORIES, STATS, Service,
    SkillCategory,
};
use crate::state::effects::card_transform;

/// Wraps children in a card that lifts while hovered.
#[component]
fn HoverCard(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let hovered = RwSignal::new(false);
    view! {
        <div
            class=class
            style:transform=move || card_transform(hovered.get())
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="sobre-mi" class="about">
            <div class="container">
                <h2 class="section-title fade-in">"Sobre mí"</h2>
                <div class="about-content">
                    <div class="about-text fade-in">
                        {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                    <div class="about-stats">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat-item">
                                        <span class="stat-number">{stat.value}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn skill_card(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <HoverCard class="skill-category">
            <div class="skill-icon">
                <i class=format!("fas {}", category.icon)></i>
            </div>
            <h3>{category.title}</h3>
            <ul class="skill-list">
                {category.skills.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
            </ul>
        </HoverCard>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="habilidades" class="skills">
            <div class="container">
                <h2 class="section-title fade-in">"Habilidades"</h2>
                <div class="skills-grid">{SKILL_CATEGORIES.iter().map(skill_card).collect_view()}</div>
            </div>
        </section>
    }
}

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <HoverCard class="project-card">
            <div class="project-image">
                <LazyImage src=project.image alt=project.title/>
            </div>
            <div class="project-content">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
                <a href=project.url class="project-link">
                    "Ver proyecto "
                    <i class="fas fa-arrow-right"></i>
                </a>
            </div>
        </HoverCard>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="proyectos" class="projects">
            <div class="container">
                <h2 class="section-title fade-in">"Proyectos"</h2>
                <div class="projects-grid">{PROJECTS.iter().map(project_card).collect_view()}</div>
            </div>
        </section>
    }
}

fn service_card(service: &'static Service) -> impl IntoView {
    view! {
        <HoverCard class="service-card">
            <div class="service-icon">
                <i class=format!("fas {}", service.icon)></i>
            </div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
        </HoverCard>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="servicios" class="services">
            <div class="container">
                <h2 class="section-title fade-in">"Servicios"</h2>
                <div class="services-grid">{SERVICES.iter().map(service_card).collect_view()}</div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <nav class="footer-links">
                    {NAV_ENTRIES
                        .iter()
                        .map(|entry| view! { <a href=format!("#{}", entry.id)>{entry.label}</a> })
                        .collect_view()}
                </nav>
                <p>{format!("© {OWNER_NAME}. Todos los derechos reservados.")}</p>
            </div>
        </footer>
    }
}
