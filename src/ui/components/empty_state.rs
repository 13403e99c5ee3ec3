use dioxus::prelude::*;

#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div { class: "py-12 text-center",
            div { class: "mb-4 text-6xl text-gray-400", "📍" }
            h3 { class: "mb-2 text-xl font-semibold text-gray-600", "No destinations found" }
            p { class: "text-gray-500", "Try adjusting your filters or search terms" }
        }
    }
}
