use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod forms;
mod modal;
mod observer;
mod scroll_lock;
mod components {
    pub mod counter;
    pub mod faq;
    pub mod header;
    pub mod order_form;
    pub mod reveal;
    pub mod service_modal;
    pub mod tilt;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use catalog::Catalog;
use components::header::Header;
use modal::ModalHost;
use pages::{home::Home, not_found::NotFound};
use scroll_lock::ScrollLock;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, catalog: &Catalog) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home catalog={catalog.clone()} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

fn load_catalog() -> Catalog {
    match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("invalid site catalog: {}", err);
            Catalog::default()
        }
    }
}

#[function_component]
fn App() -> Html {
    let catalog = use_state(load_catalog);
    let scroll_lock = use_state(ScrollLock::for_body);

    let render = {
        let catalog = (*catalog).clone();
        move |routes: Route| switch(routes, &catalog)
    };

    html! {
        <ContextProvider<ScrollLock> context={(*scroll_lock).clone()}>
            <ModalHost>
                <BrowserRouter>
                    <Header brand={catalog.brand.clone()} />
                    <Switch<Route> {render} />
                </BrowserRouter>
            </ModalHost>
        </ContextProvider<ScrollLock>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting storefront");
    yew::Renderer::<App>::new().render();
}
