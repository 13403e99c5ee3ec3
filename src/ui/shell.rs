use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-emerald-50 via-teal-50 to-cyan-50 font-sans",
            main { {children} }

            footer { class: "mt-16 bg-gray-800 py-12 text-white",
                div { class: "mx-auto max-w-6xl px-4 text-center",
                    h4 { class: "mb-4 text-2xl font-bold", "Explore Pakistan's Beauty" }
                    p { class: "mx-auto mb-6 max-w-2xl text-gray-300",
                        "Discover the breathtaking landscapes, rich culture, and warm hospitality that Pakistan has to offer. "
                        "Plan your perfect trip with confidence using our comprehensive destination guide."
                    }
                    div { class: "flex flex-wrap justify-center gap-8 text-sm text-gray-400",
                        span { "🏔️ Mountain Adventures" }
                        span { "🏛️ Historical Sites" }
                        span { "🏖️ Coastal Escapes" }
                        span { "🍽️ Culinary Experiences" }
                    }
                    p { class: "mt-8 text-xs text-gray-500", "{APP_NAME} {version}" }
                }
            }
        }
    }
}
