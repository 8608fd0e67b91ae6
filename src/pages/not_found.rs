use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"Page introuvable"}</h1>
            <p>{"Cette page n'existe pas ou a été déplacée."}</p>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {"Retour à l'accueil"}
            </Link<Route>>
        </section>
    }
}
