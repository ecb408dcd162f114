use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{NAV_LINKS, SERVICES, SOCIAL_LINKS};
use crate::Route;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All Rights Reserved.", year, config::COMPANY_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-accent"></div>

            <div class="container-custom footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <img src="/logo.png" alt={config::COMPANY_NAME} />
                        <span>{config::BRAND}</span>
                    </Link<Route>>
                    <p>
                        {"Your trusted partner for audit, tax, accounting, and consulting services in Nairobi. We deliver excellence with integrity."}
                    </p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a href={social.href} aria-label={social.label} class="social-link">
                                {social.glyph}
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li>
                                <Link<Route> to={link.route.clone()} classes="footer-link">
                                    {link.label}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Our Services"}</h4>
                    <ul class="footer-links">
                        { for SERVICES.iter().map(|service| html! {
                            <li>
                                <Link<Route> to={Route::Services} classes="footer-link">
                                    {service.title}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Contact Us"}</h4>
                    <ul class="footer-contact">
                        <li>
                            <span class="glyph">{"📍"}</span>
                            <span>
                                {config::ADDRESS_LINES[0]}<br />
                                {config::ADDRESS_LINES[1]}
                            </span>
                        </li>
                        <li>
                            <span class="glyph">{"📞"}</span>
                            <a href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a>
                        </li>
                        <li>
                            <span class="glyph">{"✉"}</span>
                            <a href={config::EMAIL_HREF}>{config::EMAIL}</a>
                        </li>
                        <li>
                            <span class="glyph">{"🕗"}</span>
                            <span>{config::BUSINESS_HOURS}</span>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container-custom footer-bottom-bar">
                    <p>{copyright_line(year)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
