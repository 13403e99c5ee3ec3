use dioxus::prelude::*;

use crate::{
    domain::CatalogueView,
    infra::catalogue_source::{loaded_catalogue, CatalogueOrigin},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::ExplorePage,
        shell::Shell,
    },
    util::assets,
};

#[component]
pub fn App() -> Element {
    let loaded = loaded_catalogue();

    let view = use_signal(|| CatalogueView::new(loaded.catalogue.clone()));
    use_context_provider(|| view);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    // Surface load fallbacks once, on first render.
    use_hook(move || {
        if let Some(warning) = loaded.warning.as_deref() {
            let kind = match loaded.origin {
                CatalogueOrigin::Empty => ToastKind::Error,
                _ => ToastKind::Warning,
            };
            push_toast(toasts, kind, warning);
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Shell { ExplorePage {} }
        Toast {}
    }
}
