use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// True once an element whose top edge sits at `top` (viewport coordinates)
/// has scrolled past `start_fraction` of the viewport height.
pub fn reaches_trigger(top: f64, viewport_height: f64, start_fraction: f64) -> bool {
    viewport_height > 0.0 && top <= viewport_height * start_fraction
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    FadeUp,
    FadeLeft,
    FadeRight,
    ScaleIn,
    Wipe,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal-up",
            Motion::FadeLeft => "reveal-left",
            Motion::FadeRight => "reveal-right",
            Motion::ScaleIn => "reveal-scale",
            Motion::Wipe => "reveal-wipe",
        }
    }
}

/// One-shot scroll trigger. Returns true once the element has been seen and
/// stays true for the lifetime of the component.
#[hook]
pub fn use_reveal(node: NodeRef, start_fraction: f64) -> bool {
    let visible = use_state(|| false);
    let seen_now = *visible;

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |seen: &bool| {
                let mut listener = None;
                let window = web_sys::window();

                if let (false, Some(window)) = (*seen, window.clone()) {
                    let check = {
                        let window = window.clone();
                        move || {
                            let Some(element) = node.cast::<Element>() else {
                                return;
                            };
                            let height = window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            let top = element.get_bounding_client_rect().top();
                            if reaches_trigger(top, height, start_fraction) {
                                visible.set(true);
                            }
                        }
                    };
                    check();

                    let callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    listener = Some(callback);
                }

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            seen_now,
        );
    }

    seen_now
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Motion::FadeUp)]
    pub motion: Motion,
    /// Fraction of the viewport height the element's top must cross.
    #[prop_or(0.75)]
    pub start: f64,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.start);

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.motion.class(), props.class.clone(), visible.then_some("visible"))}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
