use yew::prelude::*;

use crate::components::reveal::{Motion, Reveal};
use crate::config;
use crate::content::WHY_CHOOSE_US;

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section class="section-padding why-section">
            <div class="container-custom two-column">
                <div class="why-copy">
                    <Reveal class="why-header">
                        <span class="pre-title">{"Why Choose Us"}</span>
                        <h2>{format!("The {} Advantage", config::BRAND)}</h2>
                        <p>{"We combine local expertise with international standards to deliver exceptional financial services that help your business thrive."}</p>
                    </Reveal>

                    <div class="features-grid">
                        { for WHY_CHOOSE_US.iter().enumerate().map(|(i, feature)| html! {
                            <Reveal motion={Motion::ScaleIn} delay_ms={i as u32 * 120}>
                                <div class="feature-card">
                                    <div class="feature-icon">{feature.glyph}</div>
                                    <h4>{feature.title}</h4>
                                    <p>{feature.description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>

                <Reveal motion={Motion::Wipe} start={0.70} class="why-visual">
                    <div class="image-card">
                        <img src="/why-choose-us.jpg" alt="Professional team meeting" />
                        <div class="image-overlay"></div>
                    </div>
                    <div class="dashed-frame"></div>
                    <div class="stat-badge">
                        <p class="stat-value">{"98%"}</p>
                        <p class="stat-label">{"Client Satisfaction"}</p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
