use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_banner::PageBanner;
use crate::components::reveal::{Motion, Reveal};
use crate::components::scroll_top::use_scroll_to_top;
use crate::content::SERVICES;
use crate::sections::{contact_preview::ContactPreview, why_choose_us::WhyChooseUs};
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();

    html! {
        <main class="services-page">
            <PageBanner
                eyebrow="Our Services"
                title="Comprehensive Financial Solutions"
                subtitle="From audit and assurance to tax consulting, we offer a full spectrum of financial services tailored to your needs."
            />

            <section class="section-padding">
                <div class="container-custom service-details">
                    { for SERVICES.iter().enumerate().map(|(i, service)| {
                        let motion = if i % 2 == 0 { Motion::FadeLeft } else { Motion::FadeRight };
                        html! {
                            <Reveal motion={motion} start={0.75}>
                                <article id={service.id.slug()} class="service-detail">
                                    <div class="service-icon large">{service.glyph}</div>
                                    <div>
                                        <h2>{service.title}</h2>
                                        <p>{service.description}</p>
                                        <ul class="check-list">
                                            { for service.features.iter().map(|feature| html! {
                                                <li><span class="check">{"✔"}</span>{*feature}</li>
                                            }) }
                                        </ul>
                                        <Link<Route> to={Route::Contact} classes="text-link">
                                            {format!("Discuss {} →", service.title)}
                                        </Link<Route>>
                                    </div>
                                </article>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>

            <WhyChooseUs />
            <ContactPreview />
        </main>
    }
}
