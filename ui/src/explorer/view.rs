use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::html::FileEngine;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::RecordIndex;
use crate::t;
use crate::viz::{ColorMode, Dot, Scene};

use super::legend::LegendView;
use super::selection_list::SelectionList;
use super::state::{Action, ExplorerState, Outcome, UploadTicket};

const EXPLORER_CSS: Asset = asset!("/assets/styling/explorer.css");
const EXPLORER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/explorer.css"
));

/// Puts a fresh [`ExplorerState`] into context. Launchers call this above the
/// locale-keyed wrapper; a remounted [`ExplorerView`] then picks the same
/// dataset, selection and mode back up.
pub fn use_explorer_state_provider() -> Signal<ExplorerState> {
    use_context_provider(|| Signal::new(ExplorerState::default()))
}

/// Context state if a provider exists, otherwise state local to this scope.
fn use_explorer_state() -> Signal<ExplorerState> {
    use_hook(|| {
        try_consume_context::<Signal<ExplorerState>>()
            .unwrap_or_else(|| Signal::new(ExplorerState::default()))
    })
}

#[component]
pub fn ExplorerView() -> Element {
    let state = use_explorer_state();

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ExplorerEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<ExplorerEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut state_signal = state;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    ExplorerEvent::FilesChosen(engine) => {
                        let Some(file) = engine.files().into_iter().next() else {
                            continue;
                        };
                        let outcome = state_signal
                            .with_mut(|s| s.apply(Action::BeginUpload { file: file.clone() }));
                        if let Outcome::UploadQueued(ticket) = outcome {
                            queue_read(sender_slot.clone(), engine, ticket, file);
                        }
                    }
                    ExplorerEvent::Dispatch(action) => {
                        state_signal.with_mut(|s| s.apply(action));
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    let snapshot = state.read();
    let scene = snapshot.scene();
    let mode = snapshot.color_mode();
    let pending = snapshot.pending_upload().map(str::to_string);
    let error = snapshot.last_error().map(str::to_string);
    let selected = snapshot.selection().items().to_vec();
    drop(snapshot);

    rsx! {
        document::Link { rel: "stylesheet", href: EXPLORER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{EXPLORER_CSS_INLINE}" }
        }

        article { class: "explorer",
            div { class: "explorer__upload",
                h2 { {t!("upload-title")} }
                input {
                    r#type: "file",
                    accept: ".json",
                    multiple: false,
                    onchange: move |evt: FormEvent| {
                        if let Some(engine) = evt.files() {
                            coroutine.send(ExplorerEvent::FilesChosen(engine));
                        }
                    },
                }
                if let Some(file) = pending {
                    span { class: "explorer__status", {t!("upload-reading", file = file)} }
                }
                if let Some(err) = error {
                    div { class: "explorer__error",
                        span { "⚠️ {err}" }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| coroutine.send(ExplorerEvent::Dispatch(Action::DismissError)),
                            {t!("upload-dismiss")}
                        }
                    }
                }
            }

            if let Some(scene) = scene {
                div { class: "explorer__mode",
                    label { r#for: "color-mode", {t!("mode-label")} }
                    select {
                        id: "color-mode",
                        value: "{mode.as_str()}",
                        onchange: move |evt: FormEvent| {
                            if let Some(mode) = ColorMode::parse(&evt.value()) {
                                coroutine.send(ExplorerEvent::Dispatch(Action::SetColorMode(mode)));
                            }
                        },
                        for option_mode in ColorMode::ALL {
                            option {
                                key: "{option_mode.as_str()}",
                                value: "{option_mode.as_str()}",
                                {mode_label(option_mode)}
                            }
                        }
                    }
                }

                {render_scene(scene, move |index| {
                    coroutine.send(ExplorerEvent::Dispatch(Action::ToggleDot(index)))
                })}

                SelectionList { items: selected }
            }
        }
    }
}

fn render_scene(scene: Scene, on_toggle: impl FnMut(RecordIndex) + Clone + 'static) -> Element {
    rsx! {
        div { class: "explorer__canvas",
            svg {
                class: "explorer__svg",
                width: "{scene.outer_width}",
                height: "{scene.height}",

                for label in scene.labels.iter() {
                    text {
                        key: "{label.text}",
                        class: "explorer__month",
                        x: "{label.x}",
                        y: "{label.y}",
                        dy: "0.35em",
                        "{label.text}"
                    }
                }

                for dot in scene.dots.iter() {
                    {render_dot(*dot, on_toggle.clone())}
                }

                LegendView { legend: scene.legend.clone() }
            }
        }
    }
}

fn render_dot(dot: Dot, mut on_toggle: impl FnMut(RecordIndex) + 'static) -> Element {
    let stroke = if dot.selected { "black" } else { "transparent" };
    let class = if dot.selected {
        "explorer__dot explorer__dot--selected"
    } else {
        "explorer__dot"
    };

    rsx! {
        circle {
            key: "{dot.index}",
            class: "{class}",
            cx: "{dot.cx}",
            cy: "{dot.cy}",
            r: "{dot.r}",
            style: "fill: {dot.fill}; stroke: {stroke};",
            onclick: move |_| on_toggle(dot.index),
        }
    }
}

fn mode_label(mode: ColorMode) -> String {
    match mode {
        ColorMode::Sentiment => t!("mode-sentiment"),
        ColorMode::Subjectivity => t!("mode-subjectivity"),
    }
}

fn queue_read(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ExplorerEvent>>>>,
    engine: Arc<dyn FileEngine>,
    ticket: UploadTicket,
    file: String,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        spawn(async move {
            let contents = engine.read_file(&file).await;
            let _ = sender.unbounded_send(ExplorerEvent::Dispatch(Action::FinishUpload {
                ticket,
                file,
                contents,
            }));
        });
    }
}

enum ExplorerEvent {
    FilesChosen(Arc<dyn FileEngine>),
    Dispatch(Action),
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    static SHARED_SEEN: AtomicUsize = AtomicUsize::new(usize::MAX);
    static LOCAL_SEEN: AtomicUsize = AtomicUsize::new(usize::MAX);

    fn loaded_state() -> ExplorerState {
        let mut state = ExplorerState::default().with_layout_seed(5);
        let Outcome::UploadQueued(ticket) = state.apply(Action::BeginUpload {
            file: "posts.json".into(),
        }) else {
            panic!("upload not queued");
        };
        state.apply(Action::FinishUpload {
            ticket,
            file: "posts.json".into(),
            contents: Some(
                br#"[{"Month":"Jan","Sentiment":0.4,"Subjectivity":0.2,"RawTweet":"a"},
                     {"Month":"Feb","Sentiment":-0.1,"Subjectivity":0.7,"RawTweet":"b"}]"#
                    .to_vec(),
            ),
        });
        state
    }

    #[component]
    fn SharedReader() -> Element {
        let state = use_explorer_state();
        SHARED_SEEN.store(state.read().dataset().len(), Ordering::SeqCst);
        rsx! {}
    }

    #[component]
    fn LocalReader() -> Element {
        let state = use_explorer_state();
        LOCAL_SEEN.store(state.read().dataset().len(), Ordering::SeqCst);
        rsx! {}
    }

    #[test]
    fn keyed_subtree_reads_state_provided_above_it() {
        fn root() -> Element {
            use_context_provider(|| Signal::new(loaded_state()));
            let lang = "fr-FR";
            rsx! {
                div { key: "{lang}", SharedReader {} }
            }
        }

        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        assert_eq!(SHARED_SEEN.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn view_without_provider_starts_empty() {
        fn root() -> Element {
            rsx! { LocalReader {} }
        }

        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        assert_eq!(LOCAL_SEEN.load(Ordering::SeqCst), 0);
    }
}
