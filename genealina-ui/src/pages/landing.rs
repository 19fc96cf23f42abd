//! Landing Page
//!
//! The public marketing page: hero, services, about, technologies and the
//! contact form.

use chrono::Datelike;
use leptos::*;

use crate::components::{ContactFormView, Header, ScrollReveal, TechCarousel, Toast};

const SERVICES: [(&str, &str, &str); 3] = [
    (
        "🖥️",
        "Web Development",
        "Fast, responsive websites and web apps built with modern frameworks.",
    ),
    (
        "⚙️",
        "Backend & APIs",
        "Reliable Node.js and NestJS services backed by MongoDB.",
    ),
    (
        "🎨",
        "UI Design",
        "Clean interfaces that put your content and your customers first.",
    ),
];

const SKILLS: [&str; 4] = ["Frontend", "Backend", "Databases", "Deployment"];

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <Header />

        <main class="main">
            <section id="home" class="hero section">
                <div class="hero__content container">
                    <h1 class="hero__title">"Genealina Labs"</h1>
                    <p class="hero__description">
                        "We design and build websites and applications for growing businesses."
                    </p>
                    <a href="#contact" class="btn btn--primary">"Let's talk"</a>
                </div>
            </section>

            <section id="services" class="services section">
                <h2 class="section__title">"Services"</h2>
                <p class="section__subtitle">"What we can do for you"</p>
                <div class="services__grid container">
                    {SERVICES.into_iter().map(|(icon, title, description)| view! {
                        <article class="service__card">
                            <span class="service__icon">{icon}</span>
                            <h3 class="service__title">{title}</h3>
                            <p class="service__description">{description}</p>
                        </article>
                    }).collect_view()}
                </div>
            </section>

            <section id="about" class="about section">
                <h2 class="section__title">"About"</h2>
                <p class="section__subtitle">"A small studio with a full stack"</p>
                <div class="about__container container">
                    <p class="about__text">
                        "From the first sketch to deployment we take care of every layer of your product."
                    </p>
                    <ul class="about__skills">
                        {SKILLS.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
                    </ul>
                </div>
            </section>

            <section id="technologies" class="technologies section">
                <h2 class="section__title">"Technologies"</h2>
                <p class="section__subtitle">"The tools we work with"</p>
                <TechCarousel />
            </section>

            <section id="contact" class="contact section">
                <h2 class="section__title">"Contact"</h2>
                <p class="section__subtitle">"Tell us about your project"</p>
                <div class="container">
                    <ContactFormView />
                </div>
            </section>
        </main>

        <footer class="footer">
            <p class="footer__copy">{format!("© {} Genealina Labs", year)}</p>
        </footer>

        <Toast />
        <ScrollReveal />
    }
}
