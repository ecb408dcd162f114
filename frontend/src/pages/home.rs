use yew::prelude::*;

use crate::components::scroll_top::use_scroll_to_top;
use crate::sections::{
    about_preview::AboutPreview, contact_preview::ContactPreview, hero::HeroSection,
    services_preview::ServicesPreview, testimonials::Testimonials, why_choose_us::WhyChooseUs,
};

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <main class="home-page">
            <HeroSection />
            <ServicesPreview />
            <AboutPreview />
            <WhyChooseUs />
            <Testimonials />
            <ContactPreview />
        </main>
    }
}
