use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::catalog::{FieldKind, FieldSpec, Service};
use crate::config;
use crate::forms::{deep_link, ControlValue, ControlValues, FieldEntry, OrderMessage};
use crate::modal::{ModalAction, ModalContext};

/// Text of the `.form-label` in the control's `.form-group`, or empty.
fn label_for(control: &Element) -> String {
    control
        .closest(".form-group")
        .ok()
        .flatten()
        .and_then(|group| group.query_selector(".form-label").ok().flatten())
        .and_then(|label| label.text_content())
        .unwrap_or_default()
}

fn entry_for(control: &Element) -> Option<FieldEntry> {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        if input.type_() == "checkbox" {
            let label = control
                .closest(".form-checkbox")
                .ok()
                .flatten()
                .and_then(|label| label.text_content());
            return FieldEntry::from_checkbox(input.checked(), label.as_deref());
        }
        return FieldEntry::from_value(&label_for(control), &input.value());
    }
    let value = if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        return None;
    };
    FieldEntry::from_value(&label_for(control), &value)
}

/// Message lines for every filled control of `form`, in document order.
fn collect_entries(form: &HtmlFormElement) -> Vec<FieldEntry> {
    let Ok(controls) = form.query_selector_all("input, select, textarea") else {
        warn!("could not list form controls");
        return Vec::new();
    };
    (0..controls.length())
        .filter_map(|i| controls.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|control| entry_for(&control))
        .collect()
}

fn control_value(kind: FieldKind, e: &Event) -> Option<ControlValue> {
    match kind {
        FieldKind::Checkbox => Some(ControlValue::Checked(
            e.target_dyn_into::<HtmlInputElement>()?.checked(),
        )),
        FieldKind::Select => Some(ControlValue::Text(e.target_dyn_into::<HtmlSelectElement>()?.value())),
        FieldKind::Textarea => Some(ControlValue::Text(e.target_dyn_into::<HtmlTextAreaElement>()?.value())),
        FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
            Some(ControlValue::Text(e.target_dyn_into::<HtmlInputElement>()?.value()))
        }
    }
}

fn render_control(field: &FieldSpec, onchange: Option<Callback<Event>>) -> Html {
    let id = field.id.clone();
    match field.kind {
        FieldKind::Select => html! {
            <select class="form-select" id={id.clone()} name={id} required={field.required} {onchange}>
                <option value="" selected=true>{"Choisir..."}</option>
                { for field.options.iter().map(|option| html! {
                    <option value={option.value.clone()}>{&option.label}</option>
                }) }
            </select>
        },
        FieldKind::Textarea => html! {
            <textarea
                class="form-textarea"
                id={id.clone()}
                name={id}
                rows="3"
                required={field.required}
                placeholder={field.placeholder.clone()}
                {onchange}
            />
        },
        FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Checkbox => {
            let input_type = match field.kind {
                FieldKind::Email => "email",
                FieldKind::Tel => "tel",
                _ => "text",
            };
            html! {
                <input
                    class="form-input"
                    type={input_type}
                    id={id.clone()}
                    name={id}
                    required={field.required}
                    placeholder={field.placeholder.clone()}
                    {onchange}
                />
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct OrderFormProps {
    pub service: Service,
}

#[function_component(OrderForm)]
pub fn order_form(props: &OrderFormProps) -> Html {
    let modals = use_context::<ModalContext>();
    let controls = use_state(ControlValues::default);
    let service = &props.service;
    let controllers: Vec<&str> = service.controllers().collect();

    let on_control = |field: &FieldSpec| -> Option<Callback<Event>> {
        if !controllers.contains(&field.id.as_str()) {
            return None;
        }
        let controls = controls.clone();
        let id = field.id.clone();
        let kind = field.kind;
        Some(Callback::from(move |e: Event| {
            if let Some(value) = control_value(kind, &e) {
                let mut next = (*controls).clone();
                next.set(id.clone(), value);
                controls.set(next);
            }
        }))
    };

    let onsubmit = {
        let controls = controls.clone();
        let name = service.name.clone();
        let slug = service.slug.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = e.target_dyn_into::<HtmlFormElement>() else {
                return;
            };

            let mut message = OrderMessage::new(name.clone());
            message.extend(collect_entries(&form));
            let url = deep_link(config::whatsapp_number(), &message.render());
            match web_sys::window().map(|w| w.open_with_url_and_target(&url, "_blank")) {
                Some(Ok(_)) => info!("order for {} handed to WhatsApp", slug),
                _ => warn!("could not open WhatsApp link for {}", slug),
            }

            if let Some(modals) = &modals {
                modals.dispatch(ModalAction::Close(slug.clone()));
            }
            form.reset();
            controls.set(ControlValues::default());
        })
    };

    html! {
        <form class="order-form" {onsubmit}>
            { for service.fields.iter().map(|field| {
                let onchange = on_control(field);
                if field.kind == FieldKind::Checkbox {
                    return html! {
                        <label class="form-checkbox">
                            <input type="checkbox" id={field.id.clone()} name={field.id.clone()} {onchange} />
                            <span>{&field.label}</span>
                        </label>
                    };
                }
                let dynamic = field.visible_when.as_ref();
                let visible = dynamic.map_or(false, |rule| rule.evaluate(&controls));
                html! {
                    <div
                        class={classes!(
                            "form-group",
                            dynamic.is_some().then_some("dynamic-field"),
                            visible.then_some("visible")
                        )}
                        id={dynamic.map(|_| format!("{}-field", field.id))}
                    >
                        <label class="form-label" for={field.id.clone()}>{&field.label}</label>
                        { render_control(field, onchange) }
                    </div>
                }
            }) }
            <button type="submit" class="form-submit">{"Commander sur WhatsApp"}</button>
        </form>
    }
}
