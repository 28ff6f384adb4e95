use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};

mod cluster;
mod components;
mod utils;
mod views;

use utils::config;
use views::{Databases, Home, Metrics, Navbar, Nodes, Section};

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(WindowBuilder::new().with_title(config::APP_TITLE)),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut section = use_signal(|| Section::Overview);

    let page = match section() {
        Section::Overview => rsx! { Home {} },
        Section::Nodes => rsx! { Nodes {} },
        Section::Databases => rsx! { Databases {} },
        Section::Metrics => rsx! { Metrics {} },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "console-layout",
            Navbar {
                active: section(),
                on_select: move |s| section.set(s)
            }
            main { class: "console-content",
                {page}
            }
        }
    }
}
