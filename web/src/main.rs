use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::explorer::use_explorer_state_provider;
use ui::views::Explorer;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Explorer {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        warn!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppHeader writes the chosen locale here; keyed below so pages remount.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Lives above the keyed wrapper so a locale switch keeps the loaded plot.
    use_explorer_state_provider();

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: shared header above the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}
