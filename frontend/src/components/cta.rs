use yew::prelude::*;

use crate::components::glyph::Glyph;
use crate::config::ContactLink;
use crate::content::Icon;

pub const DEFAULT_CTA_TEXT: &str = "FALAR COM ESPECIALISTA AGORA";

/// The outbound contact link provided by [`crate::app::App`]. Falls back to
/// the build defaults when rendered outside the provider.
#[hook]
pub fn use_contact_link() -> AttrValue {
    use_context::<ContactLink>().unwrap_or_default().0
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or(AttrValue::Static(DEFAULT_CTA_TEXT))]
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub pulse: bool,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let href = use_contact_link();

    html! {
        <a
            href={href}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("cta-button", props.pulse.then(|| "bounce-subtle"), props.class.clone())}
        >
            <Glyph icon={Icon::Message} class="cta-icon" />
            <span>{&props.text}</span>
        </a>
    }
}

/// Round contact button pinned to the bottom corner on small screens.
#[function_component(FloatingContact)]
pub fn floating_contact() -> Html {
    let href = use_contact_link();

    html! {
        <div class="floating-contact">
            <a href={href} class="floating-contact-button" aria-label="Falar pelo WhatsApp">
                <Glyph icon={Icon::Message} />
            </a>
            <style>
                {r#"
                .floating-contact {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    display: none;
                }

                .floating-contact-button {
                    width: 4rem;
                    height: 4rem;
                    background: #25D366;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.8rem;
                    text-decoration: none;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.35);
                    animation: bounce 1s infinite;
                }

                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                    50% { transform: translateY(0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                }

                @media (max-width: 768px) {
                    .floating-contact {
                        display: block;
                    }
                }
                "#}
            </style>
        </div>
    }
}
