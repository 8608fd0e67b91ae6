use chrono::Datelike;
use log::warn;
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::counter::Counter;
use crate::components::faq::FaqList;
use crate::components::reveal::Reveal;
use crate::components::service_modal::ServiceModal;
use crate::components::tilt::TiltCard;
use crate::config;
use crate::forms::deep_link;
use crate::modal::{open_streaming_order, ModalAction, ModalContext};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub catalog: Catalog,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let modals = use_context::<ModalContext>();
    let catalog = &props.catalog;

    let open_service = |slug: String| {
        let modals = modals.clone();
        Callback::from(move |_: MouseEvent| match &modals {
            Some(modals) => modals.dispatch(ModalAction::Open(slug.clone())),
            None => warn!("no modal registry for {}", slug),
        })
    };

    let order_streaming = |platform: String| {
        let modals = modals.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(modals) = &modals {
                open_streaming_order(modals, platform.clone());
            }
        })
    };

    let contact_link = deep_link(config::whatsapp_number(), "Bonjour, j'aimerais avoir des informations.");
    let year = chrono::Utc::now().year();

    html! {
        <div class="home">
            <section class="hero">
                <div class="hero-glow"></div>
                <Reveal class="hero-content">
                    <h1>{&catalog.brand}</h1>
                    <p class="hero-tagline">{&catalog.tagline}</p>
                    <div class="hero-cta-group">
                        <a href="#services" class="btn-primary">{"Découvrir nos services"}</a>
                        <a href={contact_link.clone()} target="_blank" rel="noopener noreferrer" class="btn-ghost">
                            {"Nous écrire"}
                        </a>
                    </div>
                </Reveal>
                <Reveal class="stats">
                    { for catalog.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <Counter count={stat.count.clone()} suffix={stat.suffix.clone()} />
                            <span class="stat-label">{&stat.label}</span>
                        </div>
                    }) }
                </Reveal>
            </section>

            <section id="services" class="services">
                <Reveal class="section-title">
                    <h2>{"Nos services"}</h2>
                    <p>{"Cliquez sur un service pour passer commande."}</p>
                </Reveal>
                <div class="services-grid">
                    { for catalog.services.iter().map(|service| html! {
                        <Reveal>
                            <TiltCard
                                class="service-card"
                                service={service.slug.clone()}
                                onclick={open_service(service.slug.clone())}
                            >
                                <span class="service-icon">{&service.icon}</span>
                                <h3>{&service.name}</h3>
                                <p>{&service.summary}</p>
                                <span class="service-cta">{"Commander →"}</span>
                            </TiltCard>
                        </Reveal>
                    }) }
                </div>
            </section>

            if !catalog.streaming_platforms.is_empty() {
                <section id="streaming" class="streaming">
                    <Reveal class="section-title">
                        <h2>{"Streaming"}</h2>
                        <p>{"Choisissez votre plateforme, on s'occupe du reste."}</p>
                    </Reveal>
                    <Reveal class="platforms">
                        { for catalog.streaming_platforms.iter().map(|platform| html! {
                            <button type="button" class="platform" onclick={order_streaming(platform.clone())}>
                                {platform}
                            </button>
                        }) }
                    </Reveal>
                </section>
            }

            <section id="faq" class="faq">
                <Reveal class="section-title">
                    <h2>{"Questions fréquentes"}</h2>
                </Reveal>
                <Reveal>
                    <FaqList entries={catalog.faq.clone()} />
                </Reveal>
            </section>

            <footer id="contact" class="footer">
                <Reveal class="footer-inner">
                    <p>{"Une question ? Écrivez-nous directement sur WhatsApp."}</p>
                    <a href={contact_link} target="_blank" rel="noopener noreferrer" class="btn-primary">
                        {"WhatsApp"}
                    </a>
                    <p class="copyright">{format!("© {} {}", year, catalog.brand)}</p>
                </Reveal>
            </footer>

            { for catalog.services.iter().map(|service| html! {
                <ServiceModal key={service.slug.clone()} service={service.clone()} />
            }) }

            <style>
                {r#"
                :root {
                    --accent: #25d366;
                    --bg: #0b0f14;
                    --panel: #141a22;
                    --text: #e8eef5;
                    --muted: #93a1b0;
                }
                body {
                    margin: 0;
                    background: var(--bg);
                    color: var(--text);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 2rem;
                    transition: background 0.3s ease, padding 0.3s ease;
                }
                .header.scrolled {
                    background: rgba(11, 15, 20, 0.92);
                    backdrop-filter: blur(10px);
                    padding: 0.75rem 2rem;
                }
                .header-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .logo {
                    color: var(--text);
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-link {
                    color: var(--muted);
                    margin-left: 1.5rem;
                    text-decoration: none;
                }
                .burger {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: var(--text);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .burger.active span:nth-child(2) { opacity: 0; }
                .burger.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .mobile-nav {
                    position: fixed;
                    inset: 0 0 0 30%;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 6rem 2rem;
                    background: var(--panel);
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                }
                .mobile-nav.active { transform: translateX(0); }
                .mobile-nav a { color: var(--text); text-decoration: none; font-size: 1.2rem; }
                @media (max-width: 768px) {
                    .nav-desktop { display: none; }
                    .burger { display: block; }
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: none;
                }
                section { padding: 6rem 2rem; max-width: 1100px; margin: 0 auto; }
                .hero { min-height: 90vh; display: flex; flex-direction: column; justify-content: center; }
                .hero h1 { font-size: 3rem; margin: 0 0 1rem; }
                .hero-tagline { color: var(--muted); font-size: 1.25rem; }
                .btn-primary, .btn-ghost {
                    display: inline-block;
                    padding: 0.8rem 1.6rem;
                    border-radius: 999px;
                    text-decoration: none;
                    margin-right: 1rem;
                }
                .btn-primary { background: var(--accent); color: #04110a; }
                .btn-ghost { border: 1px solid var(--muted); color: var(--text); }
                .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1.5rem; margin-top: 4rem; }
                .stat-number { display: block; font-size: 2.5rem; font-weight: 700; color: var(--accent); }
                .stat-label { color: var(--muted); }
                .services-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
                .service-card {
                    background: var(--panel);
                    border-radius: 20px;
                    padding: 2rem;
                    cursor: pointer;
                    transition: transform 0.15s ease-out, box-shadow 0.3s ease;
                    transform-style: preserve-3d;
                }
                .service-card:hover { box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4); }
                .service-icon { font-size: 2rem; }
                .service-cta { color: var(--accent); }
                .platforms { display: flex; flex-wrap: wrap; gap: 1rem; }
                .platform {
                    background: var(--panel);
                    color: var(--text);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    padding: 1rem 1.5rem;
                    cursor: pointer;
                }
                .faq-item { border-bottom: 1px solid rgba(255, 255, 255, 0.08); }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    color: var(--muted);
                    transition: max-height 0.35s ease;
                }
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.7);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.25s ease;
                }
                .modal-overlay.active { opacity: 1; pointer-events: auto; }
                .modal {
                    position: relative;
                    width: min(520px, 92vw);
                    max-height: 90vh;
                    overflow-y: auto;
                    background: var(--panel);
                    border-radius: 20px;
                    padding: 2rem;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: var(--muted);
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .form-group { display: flex; flex-direction: column; margin-bottom: 1rem; }
                .form-label { margin-bottom: 0.4rem; color: var(--muted); }
                .form-input, .form-select, .form-textarea {
                    padding: 0.7rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    background: var(--bg);
                    color: var(--text);
                }
                .dynamic-field { display: none; }
                .dynamic-field.visible { display: flex; }
                .form-checkbox { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 1rem; }
                .form-submit {
                    width: 100%;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 999px;
                    background: var(--accent);
                    color: #04110a;
                    font-weight: 700;
                    cursor: pointer;
                }
                .footer { text-align: center; padding: 4rem 2rem; }
                .copyright { color: var(--muted); font-size: 0.85rem; }
                "#}
            </style>
        </div>
    }
}
