use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarsProps {
    pub rating: u8,
}

#[function_component(Stars)]
pub fn stars(props: &StarsProps) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of 5 stars", props.rating)}>
            { for (0..props.rating).map(|_| html! { <span class="star">{"★"}</span> }) }
        </div>
    }
}
