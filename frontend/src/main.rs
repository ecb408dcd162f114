use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod carousel;
mod config;
mod content;
mod components {
    pub mod footer;
    pub mod header;
    pub mod page_banner;
    pub mod reveal;
    pub mod scroll_top;
    pub mod stars;
}
mod sections {
    pub mod about_preview;
    pub mod contact_preview;
    pub mod hero;
    pub mod services_preview;
    pub mod testimonials;
    pub mod why_choose_us;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod services;
}

use components::{footer::Footer, header::Header};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    services::Services,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
