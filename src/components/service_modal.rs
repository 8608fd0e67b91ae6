use yew::prelude::*;

use crate::catalog::Service;
use crate::components::order_form::OrderForm;
use crate::modal::{overlay_click, overlay_id, ClickOrigin, ModalAction, ModalContext};

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub service: Service,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let modals = use_context::<ModalContext>();
    let slug = props.service.slug.clone();
    let is_open = modals.as_ref().map_or(false, |m| m.is_open(&slug));
    let overlay = use_node_ref();

    let on_overlay_click = {
        let modals = modals.clone();
        let slug = slug.clone();
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            let origin = ClickOrigin::of(&e, &overlay);
            if let (Some(modals), Some(action)) = (&modals, overlay_click(&slug, origin)) {
                modals.dispatch(action);
            }
        })
    };

    let on_close = {
        let slug = slug.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(modals) = &modals {
                modals.dispatch(ModalAction::Close(slug.clone()));
            }
        })
    };

    html! {
        <div
            ref={overlay}
            id={overlay_id(&slug)}
            class={classes!("modal-overlay", is_open.then_some("active"))}
            onclick={on_overlay_click}
        >
            <div class="modal">
                <button type="button" class="modal-close" aria-label="Fermer" onclick={on_close}>{"×"}</button>
                <div class="modal-header">
                    <span class="modal-icon">{&props.service.icon}</span>
                    <h3>{&props.service.name}</h3>
                    <p>{&props.service.summary}</p>
                </div>
                <OrderForm service={props.service.clone()} />
            </div>
        </div>
    }
}
