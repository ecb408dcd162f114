use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Motion, Reveal};
use crate::Route;

#[function_component(AboutPreview)]
pub fn about_preview() -> Html {
    html! {
        <section class="section-padding about-preview">
            <div class="container-custom two-column">
                <Reveal motion={Motion::Wipe} start={0.70} class="about-visual">
                    <div class="frame-outline"></div>
                    <div class="image-card">
                        <img src="/about-image.jpg" alt="Team collaboration" />
                    </div>
                    <div class="corner-block yellow"></div>
                </Reveal>

                <div>
                    <Reveal>
                        <span class="pre-title">{"Who We Are"}</span>
                    </Reveal>
                    <Reveal delay_ms={100}>
                        <h2>{"We're a Team of Professional Financial Experts"}</h2>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <p class="lead">
                            {"With years of experience serving businesses across Kenya, we provide tailored financial solutions that drive growth and ensure compliance. Our team of certified professionals brings deep industry knowledge and a commitment to excellence."}
                        </p>
                    </Reveal>

                    <Reveal start={0.70} delay_ms={300} class="mission-blocks">
                        <div class="mission-block blue">
                            <div class="mission-icon">{"🎯"}</div>
                            <div>
                                <h4>{"Our Mission"}</h4>
                                <p>{"To empower businesses with accurate financial insights and strategic guidance for sustainable growth."}</p>
                            </div>
                        </div>
                        <div class="mission-block yellow">
                            <div class="mission-icon">{"👁"}</div>
                            <div>
                                <h4>{"Our Vision"}</h4>
                                <p>{"To be the most trusted financial partner for businesses across East Africa."}</p>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal motion={Motion::FadeLeft} start={0.70} delay_ms={500}>
                        <Link<Route> to={Route::About} classes="text-link">
                            {"Learn More About Us →"}
                        </Link<Route>>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
