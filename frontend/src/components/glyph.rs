use yew::prelude::*;

use crate::content::Icon;

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    html! {
        <span
            class={classes!("glyph", props.class.clone())}
            role="img"
            aria-label={props.icon.label()}
        >
            {props.icon.glyph()}
        </span>
    }
}
