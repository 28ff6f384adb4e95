use dioxus::prelude::*;

/// Console sections. Switching is plain local state, there is no URL
/// routing in this app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Nodes,
    Databases,
    Metrics,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Nodes,
        Section::Databases,
        Section::Metrics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Nodes => "Nodes",
            Section::Databases => "Databases",
            Section::Metrics => "Metrics",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct NavbarProps {
    pub active: Section,
    pub on_select: EventHandler<Section>,
}

#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    rsx! {
        nav { class: "sidebar",
            div { class: "sidebar-brand", "Quorum" }
            ul { class: "sidebar-nav",
                {Section::ALL.iter().map(|section| {
                    let section = *section;
                    let class = if section == props.active {
                        "sidebar-link sidebar-link-active"
                    } else {
                        "sidebar-link"
                    };
                    let on_select = props.on_select;
                    rsx! {
                        li { key: "{section.title()}",
                            button {
                                class: "{class}",
                                onclick: move |_| on_select.call(section),
                                "{section.title()}"
                            }
                        }
                    }
                })}
            }
        }
    }
}
