use yew::prelude::*;

use crate::components::glyph::Glyph;
use crate::content::{self, ServiceArea, Stat, Testimonial};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Light text for dark backgrounds.
    #[prop_or_default]
    pub light: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class={classes!("section-heading", props.light.then(|| "light"))}>
            <h2>{&props.title}</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }
            }
            <div class="section-rule"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AreaCardProps {
    pub area: ServiceArea,
}

#[function_component(AreaCard)]
pub fn area_card(props: &AreaCardProps) -> Html {
    let area = props.area;
    html! {
        <div class="area-card">
            <div class="area-icon">
                <Glyph icon={area.icon} />
            </div>
            <h3>{area.title}</h3>
            <p>{area.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatTileProps {
    pub stat: Stat,
}

#[function_component(StatTile)]
pub fn stat_tile(props: &StatTileProps) -> Html {
    html! {
        <div class="stat-tile">
            <span class="stat-value">{props.stat.value}</span>
            <span class="stat-label">{props.stat.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = props.testimonial;
    html! {
        <div class="testimonial-card">
            <div class="quote-mark">{"\""}</div>
            <p class="testimonial-text">{t.text}</p>
            <div class="testimonial-author">
                <div class="testimonial-avatar">
                    <img src={content::avatar_url(t.avatar_seed, 40)} alt={t.name} loading="lazy" />
                </div>
                <div>
                    <p class="testimonial-name">{t.name}</p>
                    <p class="testimonial-role">{t.role}</p>
                </div>
            </div>
        </div>
    }
}
