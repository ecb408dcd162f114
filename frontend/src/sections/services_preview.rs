use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Motion, Reveal};
use crate::content::{ServiceId, SERVICES};
use crate::Route;

#[function_component(ServicesPreview)]
pub fn services_preview() -> Html {
    let active = use_state(|| ServiceId::Audit);

    let select = |id: ServiceId| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Service tab selected: {}", id.slug());
            active.set(id);
        })
    };

    html! {
        <div class="section-padding services-section">
            <div class="container-custom">
                <Reveal class="section-header">
                    <span class="pre-title">{"Our Services"}</span>
                    <h2>{"Comprehensive Financial Solutions"}</h2>
                    <p>{"From audit and assurance to tax consulting, we offer a full spectrum of financial services tailored to your needs."}</p>
                </Reveal>

                <Reveal class="services-tabs" start={0.70} delay_ms={200}>
                    { for SERVICES.iter().map(|service| html! {
                        <button
                            class={classes!("service-tab", (*active == service.id).then_some("active"))}
                            onclick={select(service.id)}
                        >
                            {service.title}
                        </button>
                    }) }
                </Reveal>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal motion={Motion::FadeUp} delay_ms={300 + i as u32 * 150}>
                            <div
                                class={classes!("service-card", (*active == service.id).then_some("selected"))}
                                onclick={select(service.id)}
                            >
                                <div class="service-icon">{service.glyph}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="check-list">
                                    { for service.features.iter().map(|feature| html! {
                                        <li><span class="check">{"✔"}</span>{*feature}</li>
                                    }) }
                                </ul>
                                <Link<Route> to={Route::Services} classes="learn-more">
                                    {"Learn More →"}
                                </Link<Route>>
                            </div>
                        </Reveal>
                    }) }
                </div>

                <div class="section-cta">
                    <Link<Route> to={Route::Services} classes="btn-primary">
                        {"View All Services →"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
