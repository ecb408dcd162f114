use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::NAV_LINKS;
use crate::Route;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_THRESHOLD_PX
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let route = use_route::<Route>();

    // Close the mobile menu whenever the route changes
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |route| {
                debug!("Route changed to {:?}, closing menu", route);
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let is_active = |target: &Route| route.as_ref() == Some(target);

    html! {
        <header class={classes!("site-header", is_scrolled(scroll_y).then_some("scrolled"))}>
            <div class="container-custom header-bar">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img src="/logo.png" alt={config::COMPANY_NAME} />
                    <span>{config::BRAND}</span>
                </Link<Route>>

                <nav class="header-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <Link<Route>
                            to={link.route.clone()}
                            classes={classes!("nav-link", is_active(&link.route).then_some("active"))}
                        >
                            {link.label}
                        </Link<Route>>
                    }) }
                </nav>

                <div class="header-cta">
                    <a href={config::PHONE_HREF} class="header-phone">
                        <span class="glyph">{"📞"}</span>
                        <span>{config::PHONE_DISPLAY}</span>
                    </a>
                    <Link<Route> to={Route::Contact} classes="btn-primary">
                        {"Request Consultation"}
                    </Link<Route>>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                <div class="container-custom">
                    <nav class="mobile-nav">
                        { for NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                            <div onclick={close_menu.clone()} style={format!("animation-delay: {}ms;", i * 100)}>
                                <Link<Route>
                                    to={link.route.clone()}
                                    classes={classes!("mobile-link", is_active(&link.route).then_some("active"))}
                                >
                                    {link.label}
                                </Link<Route>>
                            </div>
                        }) }
                    </nav>
                    <div class="mobile-cta">
                        <a href={config::PHONE_HREF} class="header-phone">
                            <span class="glyph">{"📞"}</span>
                            <span>{config::PHONE_DISPLAY}</span>
                        </a>
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Contact} classes="btn-primary full-width">
                                {"Request Consultation"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}
