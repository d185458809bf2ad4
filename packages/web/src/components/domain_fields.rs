//! Domain scope fields
//!
//! A growable list of text inputs scoping the search to specific domains.
//! The "add" button appends one empty field; fields are never removed,
//! matching the original form. Blank entries are filtered at dispatch
//! time, not here.

use dioxus::prelude::*;

/// Props for DomainFields
#[derive(Props, Clone, PartialEq)]
pub struct DomainFieldsProps {
    pub domains: Signal<Vec<String>>,
}

/// Dynamic list of domain inputs plus the add control
#[component]
pub fn DomainFields(props: DomainFieldsProps) -> Element {
    let mut domains = props.domains;

    rsx! {
        div {
            class: "flex flex-wrap items-center gap-2",

            for (index, value) in domains().into_iter().enumerate() {
                input {
                    key: "{index}",
                    r#type: "text",
                    name: "search-domain",
                    value: "{value}",
                    oninput: move |e| domains.write()[index] = e.value(),
                    placeholder: "Domain",
                    class: "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                }
            }

            button {
                r#type: "button",
                onclick: move |_| domains.write().push(String::new()),
                class: "px-3 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
                "+"
            }
        }
    }
}
