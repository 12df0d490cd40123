//! Single portfolio page: hero, about, skills, projects, contact, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the reveal controller for its lifetime: it is installed when
//! the page mounts and torn down on cleanup so no intersection callback can
//! act on a detached section. Section ids match `NavTarget::id`.

use leptos::prelude::*;

use crate::components::navbar::{NavBar, NavLink};
use crate::components::reveal::{Reveal, RevealHandle};
use crate::content::{Contacts, SiteContent, current_year};
use crate::state::nav::NavTarget;
use crate::util::dom;

#[component]
pub fn HomePage() -> impl IntoView {
    let reveal = RevealHandle::install();
    provide_context(reveal);
    on_cleanup(move || reveal.teardown());

    view! {
        <div class="page">
            <NavBar/>
            <HeroSection/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <ContactSection/>
            <PageFooter/>
        </div>
    }
}

/// Link to another site, opened in a new tab.
#[component]
fn ExternalLink(#[prop(into)] href: String, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <a href=href class=class target="_blank" rel="noreferrer">
            {children()}
        </a>
    }
}

#[component]
fn SocialLinks(contacts: Contacts) -> impl IntoView {
    view! {
        <div class="social-links">
            <ExternalLink href=contacts.linkedin class="btn btn-sm btn-circle">"in"</ExternalLink>
            <ExternalLink href=contacts.facebook class="btn btn-sm btn-circle btn-primary">"f"</ExternalLink>
            <ExternalLink href=contacts.whatsapp class="btn btn-sm btn-circle btn-success">"wa"</ExternalLink>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let profile = content.profile;
    let contacts = content.contacts;
    let email = contacts.email.clone();

    view! {
        <header id=NavTarget::Hero.id() class="container section section--hero">
            <div class="grid grid--two">
                <Reveal class="hero__intro">
                    <p class="muted">"Hello, I'm"</p>
                    <h1 class="hero__name">{profile.name}</h1>
                    <p class="hero__title">{profile.title}</p>
                    <p class="hero__bio">
                        {profile.bio}
                        " I focus on performance, accessibility and delightful UX."
                    </p>
                    <div class="hero__actions">
                        <NavLink target=NavTarget::Projects class="btn btn-primary btn-lg">
                            "See projects"
                        </NavLink>
                        <a href=email class="btn btn-ghost btn-lg">"Email me"</a>
                    </div>
                    <SocialLinks contacts=contacts/>
                </Reveal>
                <Reveal class="hero__portrait">
                    <img src=profile.avatar alt="Profile" loading="lazy"/>
                </Reveal>
            </div>
        </header>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let profile = content.profile;
    let contacts = content.contacts;

    let focus_cards = content
        .focus_areas
        .into_iter()
        .map(|area| {
            view! {
                <div class="card card--outline">
                    <h3>{area.title}</h3>
                    <p class="muted">{area.description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=NavTarget::About.id() class="container section">
            <div class="grid grid--about">
                <Reveal class="about__body">
                    <h2>"About me"</h2>
                    <p>{content.about}</p>
                    <div class="grid grid--cards">{focus_cards}</div>
                </Reveal>
                <Reveal class="about__facts card card--outline">
                    <h4>"Quick facts"</h4>
                    <ul class="facts">
                        <li><strong>"Location: "</strong>{profile.location}</li>
                        <li><strong>"Available: "</strong>{profile.availability}</li>
                        <li><strong>"Stack: "</strong>{profile.stack}</li>
                        <li>
                            <strong>"Contact: "</strong>
                            <a class="link" href=contacts.email>"Email"</a>
                        </li>
                    </ul>
                    <ExternalLink href=contacts.whatsapp class="btn btn-block btn-success">
                        "Message on WhatsApp"
                    </ExternalLink>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let skills = content
        .skills
        .into_iter()
        .map(|skill| view! { <li>{skill}</li> })
        .collect::<Vec<_>>();

    view! {
        <section id=NavTarget::Skills.id() class="container section">
            <h2>"Skills & Experience"</h2>
            <div class="grid grid--two">
                <Reveal class="card card--outline">
                    <h3>"Core skills"</h3>
                    <ul class="skills">{skills}</ul>
                </Reveal>
                <Reveal class="card card--outline">
                    <h3>"Experience"</h3>
                    <p>{content.experience}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let cards = content
        .projects
        .into_iter()
        .map(|project| {
            let alt = project.title.clone();
            view! {
                <Reveal class="card project">
                    <figure>
                        <img src=project.image alt=alt loading="lazy"/>
                    </figure>
                    <div class="project__body">
                        <h3>{project.title}</h3>
                        <p class="muted">{project.description}</p>
                        <div class="project__actions">
                            <ExternalLink href=project.url class="btn btn-primary btn-sm">"↗"</ExternalLink>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=NavTarget::Projects.id() class="container section">
            <h2>"Selected projects"</h2>
            <div class="grid grid--projects">{cards}</div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let contacts = expect_context::<SiteContent>().contacts;
    let whatsapp = contacts.whatsapp.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dom::open_in_new_tab(&whatsapp);
    };

    view! {
        <section id=NavTarget::Contact.id() class="container section">
            <div class="grid grid--two">
                <Reveal>
                    <h2>"Get in touch"</h2>
                    <p>
                        "Want to collaborate? Send me a quick message through any of the channels below. "
                        "I'll usually respond within 24-48 hours."
                    </p>
                    <div class="contact__channels">
                        <ExternalLink href=contacts.whatsapp class="btn btn-success btn-block">"WhatsApp"</ExternalLink>
                        <ExternalLink href=contacts.facebook class="btn btn-primary btn-block">"Facebook"</ExternalLink>
                        <ExternalLink href=contacts.linkedin class="btn btn-outline btn-block">"LinkedIn"</ExternalLink>
                        <a href=contacts.email class="btn btn-secondary btn-block">"Email"</a>
                    </div>
                </Reveal>
                <Reveal class="card card--outline">
                    <form class="contact__form" on:submit=on_submit>
                        <h3>"Send a quick message"</h3>
                        <input name="name" type="text" placeholder="Your name" class="input" required=true/>
                        <input name="email" type="email" placeholder="Your email" class="input" required=true/>
                        <textarea name="message" placeholder="Your message" class="textarea" rows="4" required=true></textarea>
                        <button type="submit" class="btn btn-success">"Send via WhatsApp"</button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn PageFooter() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let copyright = content.copyright_notice(current_year());
    let profile = content.profile;

    view! {
        <footer id=NavTarget::Footer.id() class="footer">
            <div class="container footer__inner">
                <div class="footer__identity">
                    <img class="footer__avatar" src=profile.avatar alt="avatar small" loading="lazy"/>
                    <div>
                        <div class="footer__name">{profile.name}</div>
                        <div class="muted">{profile.title}</div>
                    </div>
                </div>
                <SocialLinks contacts=content.contacts/>
                <div class="muted">{copyright}</div>
            </div>
        </footer>
    }
}
