use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::catalog::FaqEntry;

/// Which FAQ entry, if any, is open. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Accordion {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Clicking the open entry closes it; clicking any other entry moves
    /// the open slot there.
    pub fn toggle(self, index: usize) -> Self {
        if self.is_expanded(index) {
            Self { expanded: None }
        } else {
            Self { expanded: Some(index) }
        }
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    expanded: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer = use_node_ref();

    // Height follows the answer's content at the moment it opens.
    {
        let answer = answer.clone();
        use_effect_with_deps(
            move |expanded| {
                if let Some(el) = answer.cast::<HtmlElement>() {
                    let style = el.style();
                    if *expanded {
                        let _ = style.set_property("max-height", &format!("{}px", el.scroll_height()));
                    } else {
                        let _ = style.remove_property("max-height");
                    }
                }
                || ()
            },
            props.expanded,
        );
    }

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.expanded.then_some("active"))}>
            <button class="faq-question" {onclick}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.expanded { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" ref={answer}>
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: ()| {
                        let next = (*accordion).toggle(index);
                        debug!("faq: {:?} -> {:?}", accordion.expanded(), next.expanded());
                        accordion.set(next);
                    })
                };
                html! {
                    <FaqItem
                        key={index}
                        question={entry.question.clone()}
                        answer={entry.answer.clone()}
                        expanded={accordion.is_expanded(index)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_the_open_entry_collapses_everything() {
        let open = Accordion::default().toggle(2);
        assert_eq!(open.expanded(), Some(2));
        assert_eq!(open.toggle(2).expanded(), None);
    }

    #[test]
    fn clicking_another_entry_switches() {
        let state = Accordion::default().toggle(0).toggle(3);
        assert_eq!(state.expanded(), Some(3));
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn never_more_than_one_open() {
        let clicks = [0, 1, 1, 4, 2, 2, 2, 0, 3, 3, 1, 4, 4, 0];
        let mut state = Accordion::default();
        for (step, index) in clicks.into_iter().enumerate() {
            let before = state;
            state = state.toggle(index);
            let open = (0..5).filter(|&i| state.is_expanded(i)).count();
            assert!(open <= 1, "step {}", step);
            if before.is_expanded(index) {
                assert_eq!(open, 0);
            } else {
                assert!(state.is_expanded(index));
            }
        }
    }
}
