//! Result card component

use dioxus::prelude::*;

use crate::types::SearchResult;

/// Props for ResultCard
#[derive(Props, Clone, PartialEq)]
pub struct ResultCardProps {
    pub result: SearchResult,
}

/// Card displaying a single search result: title link plus description
#[component]
pub fn ResultCard(props: ResultCardProps) -> Element {
    let result = &props.result;

    rsx! {
        div {
            class: "bg-white border border-gray-200 rounded-lg p-6 hover:shadow-md transition-shadow",

            a {
                href: "{result.url}",
                class: "text-lg font-semibold text-blue-600 hover:text-blue-700",
                "{result.display_title()}"
            }

            div {
                class: "mt-2",
                div {
                    class: "text-gray-600 text-sm",
                    "{result.display_description()}"
                }
            }
        }
    }
}
