//! The single-page portfolio.

use leptos::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::hero::Hero;
use crate::components::lazy_image::LazyImages;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::components::notification_stack::NotificationStack;
use crate::components::reveal::ScrollReveal;
use crate::components::sections::{AboutSection, Footer, ProjectsSection, ServicesSection, SkillsSection};

/// Renders every section, then binds the selector-driven controllers.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <LoadingScreen/>
        <Navbar/>
        <main>
            <Hero/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ServicesSection/>
            <ContactSection/>
        </main>
        <Footer/>
        <NotificationStack/>
        <ScrollReveal/>
        <LazyImages/>
    }
}
