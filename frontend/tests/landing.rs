// Presence checks for the full page and the shared contact link.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use wasm_bindgen_test::*;

use legal_landing::app::App;
use legal_landing::config::ContactLink;
use legal_landing::content;

use support::{
    cleanup, click, create_mount_point, cta_hrefs, inject_recipient, inject_recipient_number,
    remove_app_config, select_all, settle, text,
};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn page_renders_every_section() {
    remove_app_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    assert_eq!(select_all(&mount, "header.hero").len(), 1);
    assert_eq!(select_all(&mount, ".stat-tile").len(), content::STATS.len());
    assert_eq!(select_all(&mount, ".area-card").len(), content::SERVICE_AREAS.len());
    assert_eq!(select_all(&mount, ".highlights li").len(), content::HIGHLIGHTS.len());
    assert_eq!(
        select_all(&mount, ".testimonial-card").len(),
        content::TESTIMONIALS.len()
    );
    assert_eq!(select_all(&mount, ".faq-item").len(), content::FAQ.len());
    assert_eq!(select_all(&mount, "footer.site-footer").len(), 1);
    assert_eq!(select_all(&mount, ".floating-contact a").len(), 1);

    let titles: Vec<String> = select_all(&mount, ".area-card h3").iter().map(text).collect();
    let expected: Vec<&str> = content::SERVICE_AREAS.iter().map(|a| a.title).collect();
    assert_eq!(titles, expected);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn call_to_actions_open_contact_link_in_new_tab() {
    remove_app_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    let expected = ContactLink::default().0.to_string();
    let ctas = select_all(&mount, "a.cta-button");
    assert_eq!(ctas.len(), 4);
    for cta in &ctas {
        assert_eq!(cta.get_attribute("href").as_deref(), Some(expected.as_str()));
        assert_eq!(cta.get_attribute("target").as_deref(), Some("_blank"));
        assert_eq!(
            cta.get_attribute("rel").as_deref(),
            Some("noopener noreferrer")
        );
    }

    let labels: Vec<String> = ctas.iter().map(text).collect();
    assert!(labels.contains(&"TENHO UM PROBLEMA JURÍDICO".to_string()));
    assert!(labels.contains(&"AGENDAR CONSULTA DE AVALIAÇÃO".to_string()));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn contact_link_survives_faq_toggles() {
    remove_app_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    let before = cta_hrefs(&mount);
    for button in select_all(&mount, ".faq-question") {
        click(&button);
        settle().await;
    }
    assert_eq!(cta_hrefs(&mount), before);

    let footer_contact = select_all(&mount, "a.footer-contact").remove(0);
    assert_eq!(footer_contact.get_attribute("href"), before.first().cloned());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn runtime_config_overrides_recipient() {
    inject_recipient("5511987654321");
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    for href in cta_hrefs(&mount) {
        assert!(
            href.starts_with("https://wa.me/5511987654321?text="),
            "unexpected href {}",
            href
        );
    }

    remove_app_config();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn numeric_recipient_is_accepted() {
    inject_recipient_number(5511987654321.0);
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    let hrefs = cta_hrefs(&mount);
    assert!(!hrefs.is_empty());
    for href in hrefs {
        assert!(
            href.starts_with("https://wa.me/5511987654321?text="),
            "unexpected href {}",
            href
        );
    }

    remove_app_config();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn element_ids_are_unique() {
    remove_app_config();
    let mount = create_mount_point();
    yew::Renderer::<App>::with_root(mount.clone()).render();
    settle().await;

    let mut ids: Vec<String> = select_all(&mount, "[id]")
        .iter()
        .map(|el| el.id())
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total, "duplicate element ids on the page");
    assert!(ids.contains(&"faq".to_string()));
    assert!(ids.contains(&"servicos".to_string()));

    cleanup(&mount);
}
