use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Motion, Reveal};
use crate::config;
use crate::content::{CONTACT_INFO, SERVICES};
use crate::Route;

#[function_component(ContactPreview)]
pub fn contact_preview() -> Html {
    // The form collects nothing yet, a submit only stays on the page
    let on_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted, no handler configured");
    });

    html! {
        <section class="section-padding contact-preview">
            <div class="container-custom">
                <Reveal class="section-header">
                    <span class="pre-title">{"Get In Touch"}</span>
                    <h2>{"Let's Discuss Your Financial Needs"}</h2>
                    <p>{"Ready to take your business to the next level? Contact us for a free consultation and discover how we can help."}</p>
                </Reveal>

                <div class="contact-grid">
                    <Reveal start={0.70} delay_ms={200} class="contact-form-card">
                        <h3>{"Send Us a Message"}</h3>
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="form-row">
                                <label>
                                    <span>{"Full Name"}</span>
                                    <input type="text" placeholder="John Doe" />
                                </label>
                                <label>
                                    <span>{"Email Address"}</span>
                                    <input type="email" placeholder="john@example.com" />
                                </label>
                            </div>
                            <div class="form-row">
                                <label>
                                    <span>{"Phone Number"}</span>
                                    <input type="tel" placeholder={config::PHONE_DISPLAY} />
                                </label>
                                <label>
                                    <span>{"Service Required"}</span>
                                    <select>
                                        <option value="">{"Select a service"}</option>
                                        { for SERVICES.iter().map(|service| html! {
                                            <option value={service.id.slug()}>{service.title}</option>
                                        }) }
                                    </select>
                                </label>
                            </div>
                            <label>
                                <span>{"Message"}</span>
                                <textarea rows="4" placeholder="Tell us about your needs..." />
                            </label>
                            <button type="submit" class="btn-primary">{"Send Message →"}</button>
                        </form>
                    </Reveal>

                    <div class="contact-cards">
                        { for CONTACT_INFO.iter().enumerate().map(|(i, entry)| html! {
                            <Reveal motion={Motion::FadeRight} start={0.65} delay_ms={300 + i as u32 * 100}>
                                <div class="info-card">
                                    <div class="info-icon">{entry.glyph}</div>
                                    <div>
                                        <h4>{entry.title}</h4>
                                        {
                                            match entry.link {
                                                Some(href) => html! { <a href={href}>{entry.content}</a> },
                                                None => html! { <p>{entry.content}</p> },
                                            }
                                        }
                                    </div>
                                </div>
                            </Reveal>
                        }) }

                        <Reveal motion={Motion::FadeRight} start={0.65} delay_ms={700}>
                            <div class="info-card urgent">
                                <h4>{"Need Urgent Assistance?"}</h4>
                                <p>{"Our team is ready to help you with any urgent financial matters."}</p>
                                <Link<Route> to={Route::Contact} classes="btn-yellow">
                                    {"Contact Us Now →"}
                                </Link<Route>>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
