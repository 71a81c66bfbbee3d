use yew::prelude::*;

use crate::components::glyph::Glyph;
use crate::content::{FaqContent, Icon};
use crate::disclosure::{FaqAction, FaqBoard};

/// DOM id of the `index`-th FAQ entry. Numbered ids keep question text out
/// of the id space, so they cannot clash with section ids like `faq`.
pub fn item_id(index: usize) -> String {
    format!("faq-item-{}", index + 1)
}

pub fn answer_id(index: usize) -> String {
    format!("faq-answer-{}", index + 1)
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub index: usize,
    pub question: AttrValue,
    pub answer: AttrValue,
    pub expanded: bool,
    pub ontoggle: Callback<()>,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let ontoggle = props.ontoggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ontoggle.emit(());
        })
    };

    let answer_id = answer_id(props.index);
    let chevron = if props.expanded {
        Icon::ChevronUp
    } else {
        Icon::ChevronDown
    };

    html! {
        <div id={item_id(props.index)} class={classes!("faq-item", props.expanded.then(|| "open"))}>
            <button
                type="button"
                class="faq-question"
                aria-expanded={props.expanded.to_string()}
                aria-controls={answer_id.clone()}
                onclick={toggle}
            >
                <span class="question-text">{&props.question}</span>
                <Glyph icon={chevron} class="toggle-icon" />
            </button>
            <div id={answer_id} class="faq-answer" hidden={!props.expanded}>
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqContent],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let entries = props.entries;
    let board = use_reducer(move || FaqBoard::from_content(entries));

    html! {
        <div class="faq-list">
            {
                for board.entries().iter().enumerate().map(|(index, entry)| {
                    let ontoggle = {
                        let dispatcher = board.dispatcher();
                        Callback::from(move |_: ()| dispatcher.dispatch(FaqAction::Toggle(index)))
                    };
                    html! {
                        <FaqItem
                            key={index}
                            {index}
                            question={entry.question.clone()}
                            answer={entry.answer.clone()}
                            expanded={entry.is_expanded()}
                            {ontoggle}
                        />
                    }
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_numbered_from_one() {
        assert_eq!(item_id(0), "faq-item-1");
        assert_eq!(answer_id(3), "faq-answer-4");
    }

    #[test]
    fn ids_stay_clear_of_section_ids() {
        let mut ids: Vec<String> = (0..crate::content::FAQ.len())
            .flat_map(|i| [item_id(i), answer_id(i)])
            .collect();
        assert!(!ids.iter().any(|id| id == "faq" || id == "servicos"));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
