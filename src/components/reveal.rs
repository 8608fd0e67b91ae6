use web_sys::Element;
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::observer::OnceVisible;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub children: Children,
}

/// Section that fades in the first time it scrolls into view and stays
/// revealed afterwards.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let reveal = revealed.setter();
        use_effect_with_deps(
            move |_| {
                let watcher = node.cast::<Element>().and_then(|element| {
                    OnceVisible::observe(&element, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move || {
                        reveal.set(true)
                    })
                });
                move || drop(watcher)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), (*revealed).then_some("revealed"))}
        >
            { for props.children.iter() }
        </div>
    }
}
