use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <div class="container-custom">
                <h1>{"Page not found"}</h1>
                <p>{"The page you are looking for does not exist or has moved."}</p>
                <Link<Route> to={Route::Home} classes="btn-primary">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </main>
    }
}
