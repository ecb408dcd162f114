use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Title words and whether they carry the accent color.
const TITLE_WORDS: [(&str, bool); 6] = [
    ("Trusted", false),
    ("Financial", false),
    ("Expertise", false),
    ("for", false),
    ("Sustainable", true),
    ("Growth", true),
];

// Entrance timeline, in ms after mount
const TITLE_START_MS: u32 = 500;
const TITLE_STAGGER_MS: u32 = 80;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section class="hero-section">
            <div class="hero-blobs">
                <div class="blob blob-blue top-left"></div>
                <div class="blob blob-yellow bottom-right"></div>
                <div class="blob blob-blue center"></div>
            </div>

            <div class="container-custom hero-grid">
                <div class="hero-copy">
                    <span class="hero-pretitle enter-left" style="animation-delay: 300ms;">
                        {"Welcome to Bookright"}
                    </span>

                    <h1 class="hero-title">
                        { for TITLE_WORDS.iter().enumerate().map(|(i, (word, accent))| html! {
                            <>
                                <span
                                    class={classes!("enter-up", accent.then_some("accent"))}
                                    style={format!("animation-delay: {}ms;", TITLE_START_MS + i as u32 * TITLE_STAGGER_MS)}
                                >
                                    {*word}
                                </span>
                                {" "}
                            </>
                        }) }
                    </h1>

                    <p class="hero-description enter-up" style="animation-delay: 800ms;">
                        {"Delivering reliable audit, tax, accounting, and consulting services in Nairobi and beyond. Partner with us for financial excellence."}
                    </p>

                    <div class="hero-cta-group">
                        <div class="enter-pop" style="animation-delay: 1000ms;">
                            <Link<Route> to={Route::Contact} classes="btn-primary">
                                {"Request Consultation →"}
                            </Link<Route>>
                        </div>
                        <div class="enter-pop" style="animation-delay: 1100ms;">
                            <Link<Route> to={Route::Services} classes="btn-secondary">
                                {"Our Services ›"}
                            </Link<Route>>
                        </div>
                    </div>

                    <div class="trust-badges">
                        <div class="trust-badge">
                            <div class="badge-circle blue">{"10+"}</div>
                            <span>{"Years Experience"}</span>
                        </div>
                        <div class="trust-badge">
                            <div class="badge-circle yellow">{"500+"}</div>
                            <span>{"Clients Served"}</span>
                        </div>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-shape pulse"></div>
                    <div class="hero-image enter-right float">
                        <img src="/hero-image.jpg" alt="Professional financial consultant" />
                        <div class="hero-image-overlay"></div>
                    </div>
                    <div class="rating-badge float">
                        <div class="rating-icon">{"⭐"}</div>
                        <div>
                            <p class="rating-score">{"4.9/5 Rating"}</p>
                            <p class="rating-count">{"From 200+ reviews"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
