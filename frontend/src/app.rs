use log::info;
use yew::prelude::*;

use crate::config::{self, ContactLink};
use crate::pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    // Resolved once per mount; every call-to-action reads the same value.
    let contact = use_memo(
        |_| {
            let link = ContactLink::from_config(&config::load());
            info!("contact link: {}", link.0);
            link
        },
        (),
    );

    html! {
        <ContextProvider<ContactLink> context={(*contact).clone()}>
            <Landing />
        </ContextProvider<ContactLink>>
    }
}
