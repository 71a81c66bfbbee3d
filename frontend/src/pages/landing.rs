use chrono::Datelike;
use yew::prelude::*;

use crate::components::cards::{AreaCard, SectionHeading, StatTile, TestimonialCard};
use crate::components::cta::{use_contact_link, CtaButton, FloatingContact};
use crate::components::faq::FaqList;
use crate::components::glyph::Glyph;
use crate::content::{self, Icon};

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-glow">
                <div class="glow glow-accent"></div>
                <div class="glow glow-gold"></div>
            </div>
            <div class="container hero-content">
                <div class="hero-badge">
                    <Glyph icon={Icon::ShieldCheck} />
                    <span>{content::HERO_BADGE}</span>
                </div>
                <h1>
                    {content::HERO_HEADLINE}{" "}
                    <span class="accent">{content::HERO_HEADLINE_ACCENT}</span>
                    {" "}{content::HERO_HEADLINE_TAIL}
                </h1>
                <p class="hero-subtitle">{content::HERO_SUBTITLE}</p>
                <div class="hero-actions">
                    <CtaButton />
                    <div class="social-proof">
                        <div class="avatar-stack">
                            {
                                for content::HERO_AVATAR_SEEDS.iter().map(|seed| html! {
                                    <img
                                        key={*seed}
                                        src={content::avatar_url(*seed, 40)}
                                        alt="Cliente satisfeito"
                                    />
                                })
                            }
                        </div>
                        <span>{content::HERO_SOCIAL_PROOF}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[function_component(StatsBar)]
fn stats_bar() -> Html {
    html! {
        <section class="stats-bar">
            <div class="container stats-grid">
                { for content::STATS.iter().map(|stat| html! { <StatTile stat={*stat} /> }) }
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="servicos" class="services">
            <div class="container">
                <SectionHeading
                    title={content::SERVICES_TITLE}
                    subtitle={content::SERVICES_SUBTITLE}
                />
                <div class="areas-grid">
                    { for content::SERVICE_AREAS.iter().map(|area| html! { <AreaCard area={*area} /> }) }
                </div>
                <div class="section-cta">
                    <CtaButton text="TENHO UM PROBLEMA JURÍDICO" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Experience)]
fn experience() -> Html {
    html! {
        <section class="experience">
            <div class="container experience-layout">
                <div class="experience-portrait">
                    <div class="portrait-frame"></div>
                    <img src={content::portrait_url()} alt="Advogado" />
                    <div class="portrait-badge">
                        <p class="portrait-badge-value">{content::EXPERIENCE_BADGE_VALUE}</p>
                        <p class="portrait-badge-label">{content::EXPERIENCE_BADGE_LABEL}</p>
                    </div>
                </div>
                <div class="experience-copy">
                    <h2>
                        {content::EXPERIENCE_TITLE}{" "}
                        <span class="accent">{content::EXPERIENCE_TITLE_ACCENT}</span>
                    </h2>
                    <p>
                        {content::EXPERIENCE_INTRO}{" "}
                        <strong>{content::EXPERIENCE_INTRO_STRONG}</strong>
                        {content::EXPERIENCE_INTRO_TAIL}
                    </p>
                    <ul class="highlights">
                        {
                            for content::HIGHLIGHTS.iter().map(|item| html! {
                                <li>
                                    <div class="highlight-icon"><Glyph icon={item.icon} /></div>
                                    <span>{item.text}</span>
                                </li>
                            })
                        }
                    </ul>
                    <CtaButton class="wide-on-mobile" text="AGENDAR CONSULTA DE AVALIAÇÃO" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <div class="container">
                <SectionHeading
                    title={content::TESTIMONIALS_TITLE}
                    subtitle={content::TESTIMONIALS_SUBTITLE}
                />
                <div class="testimonials-grid">
                    {
                        for content::TESTIMONIALS.iter().map(|t| html! {
                            <TestimonialCard testimonial={*t} />
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="container narrow">
                <SectionHeading title={content::FAQ_TITLE} />
                <FaqList entries={content::FAQ} />
                <div class="closing-box">
                    <h3>{content::CLOSING_TITLE}</h3>
                    <p>{content::CLOSING_TEXT}</p>
                    <CtaButton />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let contact = use_contact_link();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div class="footer-brand">
                    <div class="brand">
                        <Glyph icon={Icon::Scale} />
                        <span>{content::BRAND}{" "}<span class="accent">{content::BRAND_ACCENT}</span></span>
                    </div>
                    <p class="rights">{format!("© {} {}", year, content::FOOTER_RIGHTS)}</p>
                </div>
                <div class="footer-links">
                    <a href="#servicos"><Glyph icon={Icon::ShieldCheck} /></a>
                    <a href="#faq"><Glyph icon={Icon::Briefcase} /></a>
                    <a href={contact} class="footer-contact"><Glyph icon={Icon::Message} /></a>
                </div>
            </div>
            <div class="container">
                <p class="disclaimer">{content::FOOTER_DISCLAIMER}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <StatsBar />
            <Services />
            <Experience />
            <Testimonials />
            <FaqSection />
            <Footer />
            <FloatingContact />
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #ffffff;
                    color: #0f1c33;
                    overflow-x: hidden;
                    font-family: 'Inter', system-ui, sans-serif;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    position: relative;
                    z-index: 1;
                }

                .container.narrow {
                    max-width: 900px;
                }

                .accent {
                    color: #c9a45c;
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: #25D366;
                    color: #fff;
                    font-weight: 800;
                    border-radius: 8px;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.2);
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    background: #128C7E;
                    transform: scale(1.05);
                }

                .bounce-subtle {
                    animation: bounce-subtle 2s infinite ease-in-out;
                }

                @keyframes bounce-subtle {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-5px); }
                }

                .hero {
                    position: relative;
                    background: #0f1c33;
                    padding: 8rem 0;
                    overflow: hidden;
                    text-align: center;
                }

                .hero-glow {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    pointer-events: none;
                }

                .glow {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                }

                .glow-accent {
                    top: -6rem;
                    right: -6rem;
                    background: #c9a45c;
                }

                .glow-gold {
                    bottom: -6rem;
                    left: -6rem;
                    background: #b8860b;
                    opacity: 0.3;
                }

                .hero-content {
                    max-width: 900px;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(201, 164, 92, 0.2);
                    background: rgba(201, 164, 92, 0.1);
                    color: #c9a45c;
                    font-size: 0.8rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                }

                .hero h1 {
                    color: #fff;
                    font-size: 3.5rem;
                    font-weight: 800;
                    line-height: 1.15;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    color: #d1d5db;
                    font-size: 1.25rem;
                    font-weight: 300;
                    line-height: 1.6;
                    max-width: 760px;
                    margin: 0 auto 3rem;
                }

                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .social-proof {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: #9ca3af;
                    font-size: 0.85rem;
                }

                .avatar-stack {
                    display: flex;
                }

                .avatar-stack img {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 2px solid #0f1c33;
                    margin-left: -0.5rem;
                }

                .stats-bar {
                    background: #f9fafb;
                    border-top: 1px solid #f3f4f6;
                    border-bottom: 1px solid #f3f4f6;
                    padding: 2rem 0;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    opacity: 0.8;
                }

                .stat-tile {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .stat-value {
                    font-size: 1.5rem;
                    font-weight: 800;
                }

                .stat-label {
                    font-size: 0.65rem;
                    font-weight: 600;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #6b7280;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }

                .section-subtitle {
                    color: #4b5563;
                    font-size: 1.1rem;
                    font-weight: 300;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .section-heading.light h2 {
                    color: #fff;
                }

                .section-heading.light .section-subtitle {
                    color: #d1d5db;
                }

                .section-rule {
                    width: 5rem;
                    height: 6px;
                    margin: 1.5rem auto 0;
                    border-radius: 999px;
                    background: #b8860b;
                }

                .section-heading.light .section-rule {
                    background: #c9a45c;
                }

                .services {
                    padding: 8rem 0;
                }

                .areas-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .area-card {
                    background: #fff;
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    display: flex;
                    flex-direction: column;
                    transition: box-shadow 0.3s ease;
                }

                .area-card:hover {
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                }

                .area-icon {
                    width: fit-content;
                    margin-bottom: 1.5rem;
                    padding: 0.75rem;
                    border-radius: 12px;
                    background: #f9fafb;
                    font-size: 2rem;
                }

                .area-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    margin-bottom: 0.75rem;
                }

                .area-card p {
                    color: #4b5563;
                    font-size: 0.9rem;
                    font-weight: 300;
                    line-height: 1.6;
                }

                .section-cta {
                    margin-top: 4rem;
                    text-align: center;
                }

                .experience {
                    padding: 8rem 0;
                    background: linear-gradient(135deg, #0f1c33, #1a2b4b, #0f1c33);
                    overflow: hidden;
                }

                .experience-layout {
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                }

                .experience-portrait,
                .experience-copy {
                    flex: 1;
                }

                .experience-portrait {
                    position: relative;
                }

                .portrait-frame {
                    position: absolute;
                    top: -1rem;
                    left: -1rem;
                    width: 100%;
                    height: 100%;
                    border: 2px solid #c9a45c;
                    border-radius: 16px;
                }

                .experience-portrait img {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    border-radius: 16px;
                    object-fit: cover;
                    filter: grayscale(20%);
                }

                .portrait-badge {
                    position: absolute;
                    bottom: -2rem;
                    right: -2rem;
                    z-index: 2;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #c9a45c;
                    color: #fff;
                }

                .portrait-badge-value {
                    font-size: 2.25rem;
                    font-weight: 800;
                }

                .portrait-badge-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                }

                .experience-copy h2 {
                    color: #fff;
                    font-size: 3rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    line-height: 1.15;
                    margin-bottom: 2rem;
                }

                .experience-copy > p {
                    color: #d1d5db;
                    font-size: 1.1rem;
                    font-weight: 300;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .highlights {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 3rem;
                }

                .highlights li {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: #fff;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }

                .highlight-icon {
                    padding: 0.5rem;
                    border-radius: 8px;
                    background: rgba(201, 164, 92, 0.2);
                }

                .testimonials {
                    padding: 5rem 0;
                    background: #f9fafb;
                }

                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .testimonial-card {
                    position: relative;
                    background: #fff;
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid #f3f4f6;
                    font-style: italic;
                    font-weight: 300;
                }

                .quote-mark {
                    position: absolute;
                    top: -1rem;
                    left: 2rem;
                    font-size: 3.75rem;
                    font-family: serif;
                    color: #c9a45c;
                    opacity: 0.2;
                }

                .testimonial-text {
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .testimonial-avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    overflow: hidden;
                    background: #e5e7eb;
                }

                .testimonial-name {
                    font-size: 0.85rem;
                    font-weight: 700;
                    font-style: normal;
                    text-transform: uppercase;
                }

                .testimonial-role {
                    font-size: 0.65rem;
                    font-weight: 700;
                    font-style: normal;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #b8860b;
                }

                .faq-section {
                    padding: 8rem 0;
                }

                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                    padding: 1rem 0;
                }

                .faq-item:last-child {
                    border-bottom: none;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.5rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    color: #0f1c33;
                    font-size: 1.1rem;
                    font-weight: 600;
                    transition: color 0.2s ease;
                }

                .faq-question:hover {
                    color: #b8860b;
                }

                .toggle-icon {
                    flex-shrink: 0;
                    color: #9ca3af;
                }

                .faq-item.open .toggle-icon {
                    color: #b8860b;
                }

                .faq-answer {
                    margin-top: 1rem;
                }

                .faq-answer p {
                    color: #4b5563;
                    font-weight: 300;
                    line-height: 1.6;
                    padding-bottom: 1rem;
                }

                .closing-box {
                    position: relative;
                    margin-top: 4rem;
                    padding: 3rem;
                    border-radius: 24px;
                    background: #0f1c33;
                    text-align: center;
                    overflow: hidden;
                }

                .closing-box h3 {
                    color: #fff;
                    font-size: 1.9rem;
                    font-weight: 800;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }

                .closing-box p {
                    color: #9ca3af;
                    font-weight: 300;
                    max-width: 560px;
                    margin: 0 auto 2rem;
                }

                .site-footer {
                    background: #0f1c33;
                    border-top: 1px solid #1f2937;
                    padding: 3rem 0;
                }

                .footer-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 800;
                    text-transform: uppercase;
                }

                .rights {
                    color: #6b7280;
                    font-size: 0.85rem;
                    font-weight: 300;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-links a {
                    color: #9ca3af;
                    font-size: 1.5rem;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-links a:hover {
                    color: #c9a45c;
                }

                .disclaimer {
                    margin: 3rem auto 0;
                    max-width: 640px;
                    text-align: center;
                    color: #4b5563;
                    font-size: 0.65rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    line-height: 2;
                    text-transform: uppercase;
                }

                @media (max-width: 1024px) {
                    .areas-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .experience-layout {
                        flex-direction: column;
                    }
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 5rem 0;
                    }

                    .hero h1 {
                        font-size: 1.9rem;
                    }

                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }

                    .areas-grid,
                    .testimonials-grid {
                        grid-template-columns: 1fr;
                    }

                    .services,
                    .experience,
                    .faq-section {
                        padding: 5rem 0;
                    }

                    .experience-copy h2 {
                        font-size: 1.9rem;
                    }

                    .portrait-badge {
                        display: none;
                    }

                    .wide-on-mobile {
                        width: 100%;
                    }

                    .footer-row {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
