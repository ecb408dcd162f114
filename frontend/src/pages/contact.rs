use yew::prelude::*;

use crate::components::page_banner::PageBanner;
use crate::components::scroll_top::use_scroll_to_top;
use crate::sections::contact_preview::ContactPreview;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();

    html! {
        <main class="contact-page">
            <PageBanner
                eyebrow="Contact"
                title="We're Here to Help"
                subtitle="Reach out for a free consultation on audit, tax, accounting, or advisory needs."
            />
            <ContactPreview />
        </main>
    }
}
