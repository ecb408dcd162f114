use std::rc::Rc;

use log::error;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::carousel::{mount_for, BrowserScheduler, Carousel, Snapshot};
use crate::components::reveal::{Motion, Reveal};
use crate::components::stars::Stars;
use crate::config;
use crate::content::{load_testimonials, Testimonial};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let testimonials = use_memo(
        |_| match load_testimonials() {
            Ok(testimonials) => testimonials,
            Err(e) => {
                error!("Testimonials unavailable: {}", e);
                Vec::new()
            }
        },
        (),
    );

    html! {
        <section class="section-padding testimonials-section">
            <div class="container-custom">
                <Reveal class="section-header" start={0.75}>
                    <span class="pre-title">{"Testimonials"}</span>
                    <h2>{"What Our Clients Say"}</h2>
                    <p>{"Hear from businesses that have transformed their financial operations with our help."}</p>
                </Reveal>

                if !testimonials.is_empty() {
                    <Reveal motion={Motion::ScaleIn} start={0.70} delay_ms={200}>
                        <TestimonialCarousel testimonials={testimonials.clone()} />
                    </Reveal>
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: Rc<Vec<Testimonial>>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let snapshot = use_state(|| Snapshot {
        index: 0,
        transitioning: false,
    });
    let carousel = use_mut_ref(|| None::<Carousel<BrowserScheduler>>);
    let len = props.testimonials.len();

    // The carousel and its timers live exactly as long as this view
    {
        let carousel = carousel.clone();
        let setter = snapshot.setter();
        use_effect_with_deps(
            move |len: &usize| {
                *carousel.borrow_mut() = mount_for(
                    *len,
                    BrowserScheduler,
                    config::CAROUSEL_TIMING,
                    move |snap| setter.set(snap),
                );
                move || {
                    carousel.borrow_mut().take();
                }
            },
            len,
        );
    }

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(c) = carousel.borrow().as_ref() {
                c.previous();
            }
        })
    };

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(c) = carousel.borrow().as_ref() {
                c.next();
            }
        })
    };

    let go_to = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(c) = carousel.borrow().as_ref() {
                c.go_to(index);
            }
        })
    };

    let Some(current) = props.testimonials.get(snapshot.index) else {
        return html! {};
    };

    html! {
        <div class="testimonials-slider">
            <div class="testimonial-card">
                <div class="quote-badge">{"❝"}</div>

                <div
                    key={current.id.to_string()}
                    class={classes!("testimonial-content", snapshot.transitioning.then_some("transitioning"))}
                >
                    <div class="client-photo">
                        <img src={current.image.clone()} alt={current.name.clone()} />
                    </div>
                    <div class="client-quote">
                        <Stars rating={current.rating} />
                        <blockquote>{format!("\"{}\"", current.quote)}</blockquote>
                        <div>
                            <p class="client-name">{current.name.clone()}</p>
                            <p class="client-role">{current.role.clone()}</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="slider-nav">
                <button class="slider-arrow" onclick={on_previous} aria-label="Previous testimonial">
                    {"‹"}
                </button>

                <div class="slider-dots">
                    { for (0..len).map(|i| html! {
                        <button
                            class={classes!("slider-dot", (i == snapshot.index).then_some("active"))}
                            onclick={go_to(i)}
                            aria-label={format!("Go to testimonial {}", i + 1)}
                        />
                    }) }
                </div>

                <button class="slider-arrow" onclick={on_next} aria-label="Next testimonial">
                    {"›"}
                </button>
            </div>
        </div>
    }
}
