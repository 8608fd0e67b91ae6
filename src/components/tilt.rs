use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{TILT_LIFT_PX, TILT_MAX_DEG, TILT_PERSPECTIVE_PX};

/// Client-space rectangle of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Rotation for a pointer at (`client_x`, `client_y`). Each axis is
    /// proportional to the offset from the card's center and reaches
    /// `TILT_MAX_DEG` at the edges.
    pub fn from_pointer(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::default();
        }
        let center_x = bounds.width / 2.0;
        let center_y = bounds.height / 2.0;
        let x = client_x - bounds.left;
        let y = client_y - bounds.top;
        Self {
            rotate_x: (y - center_y) / center_y * -TILT_MAX_DEG,
            rotate_y: (x - center_x) / center_x * TILT_MAX_DEG,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y, TILT_LIFT_PX
        )
    }

    pub fn rest_transform() -> String {
        format!("perspective({}px) rotateX(0) rotateY(0) translateY(0)", TILT_PERSPECTIVE_PX)
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    /// Rendered as `data-service` when set.
    #[prop_or_default]
    pub service: Option<String>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();

    let onmousemove = {
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = node.cast::<HtmlElement>() {
                let rect = card.get_bounding_client_rect();
                let bounds = Bounds {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                };
                let tilt = Tilt::from_pointer(bounds, f64::from(e.client_x()), f64::from(e.client_y()));
                let _ = card.style().set_property("transform", &tilt.transform());
            }
        })
    };

    let onmouseleave = {
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = node.cast::<HtmlElement>() {
                let _ = card.style().set_property("transform", &Tilt::rest_transform());
            }
        })
    };

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            data-tilt="true"
            data-service={props.service.clone()}
            onclick={props.onclick.clone()}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn center_is_flat() {
        assert_eq!(Tilt::from_pointer(CARD, 200.0, 100.0), Tilt::default());
    }

    #[test]
    fn corners_hit_the_maximum() {
        let top_left = Tilt::from_pointer(CARD, 100.0, 50.0);
        assert_eq!(top_left, Tilt { rotate_x: 6.0, rotate_y: -6.0 });

        let bottom_right = Tilt::from_pointer(CARD, 300.0, 150.0);
        assert_eq!(bottom_right, Tilt { rotate_x: -6.0, rotate_y: 6.0 });
    }

    #[test]
    fn collapsed_card_does_not_tilt() {
        let empty = Bounds { width: 0.0, ..CARD };
        assert_eq!(Tilt::from_pointer(empty, 10.0, 10.0), Tilt::default());
    }

    #[test]
    fn transform_text() {
        let tilt = Tilt { rotate_x: 1.5, rotate_y: -3.0 };
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(1.5deg) rotateY(-3deg) translateY(-6px)"
        );
        assert_eq!(
            Tilt::rest_transform(),
            "perspective(1000px) rotateX(0) rotateY(0) translateY(0)"
        );
    }
}
