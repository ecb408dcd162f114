use yew::prelude::*;

use crate::components::page_banner::PageBanner;
use crate::components::reveal::{Motion, Reveal};
use crate::components::scroll_top::use_scroll_to_top;
use crate::config;
use crate::content::CORE_VALUES;

const STATS: [(&str, &str); 3] = [
    ("10+", "Years Experience"),
    ("500+", "Clients Served"),
    ("25+", "Team Members"),
];

const CREDENTIALS: [&str; 3] = ["CPA(K)", "ACCA", "Tax Expert"];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <main class="about-page">
            <PageBanner
                eyebrow="About Us"
                title="Building Trust Through Excellence"
                subtitle={format!("For over a decade, {} has been the trusted financial partner for businesses across Kenya and East Africa.", config::COMPANY_NAME)}
            />

            <section class="section-padding story-section">
                <div class="container-custom two-column">
                    <Reveal motion={Motion::FadeLeft} start={0.70} class="story-image">
                        <div class="story-backdrop"></div>
                        <div class="image-card">
                            <img src="/about-image.jpg" alt="Our team at work" />
                        </div>
                    </Reveal>

                    <Reveal motion={Motion::FadeRight} start={0.70} class="story-content">
                        <span class="pre-title">{"Our Story"}</span>
                        <h2>{"A Legacy of Financial Excellence"}</h2>
                        <div class="story-text">
                            <p>{"Founded in 2014, Bookright Limited emerged from a vision to provide world-class financial services tailored to the unique needs of Kenyan businesses. What started as a small audit firm has grown into a comprehensive financial services provider."}</p>
                            <p>{"Our journey has been marked by continuous growth, learning, and an unwavering commitment to our clients' success. Today, we serve over 500 clients across various industries, from startups to established enterprises."}</p>
                            <p>{"Led by CPA Dingili Calvince, our team of certified professionals brings together decades of combined experience in audit, tax, accounting, and business consulting."}</p>
                        </div>
                        <div class="story-stats">
                            { for STATS.iter().map(|(value, label)| html! {
                                <div>
                                    <p class="stat-value">{*value}</p>
                                    <p class="stat-label">{*label}</p>
                                </div>
                            }) }
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="section-padding tinted">
                <div class="container-custom mission-grid">
                    <div class="mission-card">
                        <div class="mission-icon blue">{"🎯"}</div>
                        <h3>{"Our Mission"}</h3>
                        <p>{"To empower businesses with accurate financial insights, strategic guidance, and compliant practices that drive sustainable growth. We are committed to delivering excellence through integrity, professionalism, and a deep understanding of our clients' needs."}</p>
                    </div>
                    <div class="mission-card">
                        <div class="mission-icon yellow">{"👁"}</div>
                        <h3>{"Our Vision"}</h3>
                        <p>{"To be the most trusted financial partner for businesses across East Africa, recognized for our excellence, integrity, and commitment to client success. We aim to set the standard for professional financial services in the region."}</p>
                    </div>
                </div>
            </section>

            <section class="section-padding">
                <div class="container-custom">
                    <div class="section-header">
                        <span class="pre-title">{"Our Principles"}</span>
                        <h2>{"Core Values"}</h2>
                        <p>{"These principles guide everything we do, from client interactions to internal operations."}</p>
                    </div>
                    <div class="values-grid">
                        { for CORE_VALUES.iter().enumerate().map(|(i, value)| html! {
                            <Reveal motion={Motion::ScaleIn} delay_ms={i as u32 * 100}>
                                <div class="value-card">
                                    <div class="value-icon">{value.glyph}</div>
                                    <h4>{value.title}</h4>
                                    <p>{value.description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section-padding tinted team-section">
                <div class="container-custom">
                    <div class="section-header">
                        <span class="pre-title">{"Leadership"}</span>
                        <h2>{"Meet Our Senior Consultant"}</h2>
                    </div>
                    <Reveal start={0.70} class="team-card">
                        <div class="team-portrait">
                            <img src="/hero-image.jpg" alt="CPA Dingili Calvince" />
                        </div>
                        <div class="team-bio">
                            <h3>{"CPA Dingili Calvince"}</h3>
                            <p class="team-role">{"Senior Consultant & Founder"}</p>
                            <p>{"CPA Dingili is a seasoned financial expert with over 15 years of experience in audit, tax advisory, and business consulting. He holds certifications from leading professional bodies and has advised numerous organizations across East Africa."}</p>
                            <p>{"His expertise spans statutory audits, tax planning, financial management, and business advisory services. Under his leadership, Bookright has grown to become a trusted name in Kenya's financial services sector."}</p>
                            <p>{"Calvince is passionate about helping businesses achieve their full potential through sound financial practices and strategic guidance."}</p>
                            <div class="credentials">
                                { for CREDENTIALS.iter().map(|c| html! { <span class="credential">{*c}</span> }) }
                            </div>
                        </div>
                    </Reveal>
                </div>
            </section>
        </main>
    }
}
