use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct TooltipProps {
    pub text: String,
    /// URL rendered as a "Learn more" anchor after the text.
    pub link: Option<String>,
    pub children: Element,
}

/// Hover tooltip wrapping arbitrary content. Shown below the wrapped
/// element, styled in main.css.
#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let anchor = match props.link.as_ref() {
        Some(link) => rsx! {
            a {
                class: "tooltip-link",
                href: "{link}",
                target: "_blank",
                "Learn more"
            }
        },
        None => rsx! {},
    };

    rsx! {
        span { class: "tooltip",
            {props.children}
            span { class: "tooltip-text",
                "{props.text}"
                {anchor}
            }
        }
    }
}
