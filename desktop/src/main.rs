#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, warn, Level};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::explorer::use_explorer_state_provider;
use ui::core::ExplorerConfig;
use ui::views::Explorer;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Explorer {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme, embedded so packaged builds need no asset folder.

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        warn!("logger already initialized: {err}");
    }

    let resource_dir = resolve_resource_dir();
    info!(dir = %resource_dir.display(), "launching desktop explorer");

    // Canvas plus margins; the page scrolls horizontally below this.
    let config = ExplorerConfig::default();
    let min_size = LogicalSize::new(config.outer_width + 80.0, config.height + 200.0);

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Sentiscope – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(min_size)
                        .with_min_inner_size(min_size),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppHeader updates this on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Lives above the keyed wrapper so a locale switch keeps the loaded plot.
    use_explorer_state_provider();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount when the language changes.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppHeader { }

        Outlet::<Route> {}
    }
}
