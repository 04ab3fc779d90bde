//! TDE Predictor entry point
//!
//! Handles platform-specific initialization and wires the page to a session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement};

    use tde_predictor::persistence::{KeyValueStore, MemoryStore};
    use tde_predictor::platform::storage::LocalStorage;
    use tde_predictor::{Action, Notice, Notifier, Session, Symbol};

    type AppSession = Session<Box<dyn KeyValueStore>>;

    /// Shows notices in the page: predictions inline, everything else as an alert
    struct DomNotifier {
        document: Document,
    }

    impl Notifier for DomNotifier {
        fn notify(&mut self, notice: Notice) {
            match notice {
                Notice::Prediction(_) => {
                    if let Some(el) = self.document.get_element_by_id("prediction") {
                        el.set_text_content(Some(&notice.message()));
                    }
                }
                _ => {
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.alert_with_message(&notice.message()) {
                            log::warn!("Alert failed: {:?}", e);
                        }
                    }
                }
            }
        }
    }

    /// Page controller holding the session
    struct App {
        session: AppSession,
        notifier: DomNotifier,
    }

    impl App {
        fn dispatch(&mut self, action: Action) {
            self.session.handle(action, &mut self.notifier);
            self.refresh();
        }

        /// Sync DOM elements with session state
        fn refresh(&self) {
            let document = &self.notifier.document;

            if let Some(el) = document
                .get_element_by_id("sequence")
                .and_then(|e| e.dyn_into::<HtmlTextAreaElement>().ok())
            {
                el.set_value(self.session.sequence().as_str());
                el.set_disabled(!self.session.is_editing());
            }

            if let Some(el) = document.get_element_by_id("edit-btn") {
                let label = if self.session.is_editing() {
                    "Save Correction"
                } else {
                    "Make Correction"
                };
                el.set_text_content(Some(label));
            }

            let window_size = self.session.window_size().to_string();
            if let Some(el) = document
                .get_element_by_id("window-size")
                .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            {
                el.set_value(&window_size);
            }

            if let Some(el) = document
                .get_element_by_id("query")
                .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            {
                el.set_value(self.session.query());
                el.set_placeholder(&format!(
                    "Enter {} characters to search (T, D, E only)...",
                    window_size
                ));
            }
        }
    }

    /// Prefer LocalStorage; without it the page still works but every save fails
    fn open_store<N: Notifier>(notifier: &mut N) -> Box<dyn KeyValueStore> {
        match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::error!("{}, changes will not persist", e);
                notifier.notify(Notice::Rejected(e));
                Box::new(MemoryStore::unavailable())
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        tde_predictor::platform::init_logging();
        log::info!("TDE Predictor starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let mut notifier = DomNotifier {
            document: document.clone(),
        };
        let store = open_store(&mut notifier);
        let session = Session::open(store, &mut notifier);
        let app = Rc::new(RefCell::new(App { session, notifier }));
        app.borrow().refresh();

        // Symbol buttons
        for symbol in Symbol::ALL {
            on_click(&document, &format!("add-{}", symbol), app.clone(), move |_| {
                Action::Append(symbol)
            });
        }

        // Leaving edit mode commits the textarea first
        on_click(&document, "edit-btn", app.clone(), |app| {
            if app.session.is_editing() {
                let text = input_value(&app.notifier.document, "sequence");
                app.dispatch(Action::CommitEdit(text));
            }
            Action::ToggleEdit
        });

        on_click(&document, "save-btn", app.clone(), |app| {
            if app.session.is_editing() {
                let text = input_value(&app.notifier.document, "sequence");
                app.dispatch(Action::CommitEdit(text));
            }
            Action::Save
        });

        on_click(&document, "predict-btn", app.clone(), |_| Action::Predict);

        on_change(&document, "sequence", app.clone(), Action::CommitEdit);
        on_change(&document, "window-size", app.clone(), Action::SetWindowSize);
        on_change(&document, "query", app.clone(), Action::SetQuery);

        log::info!("TDE Predictor running!");
        Ok(())
    }

    /// Read the value of an input or textarea by id
    fn input_value(document: &Document, id: &str) -> String {
        let Some(el) = document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else {
            String::new()
        }
    }

    fn on_click<F>(document: &Document, id: &str, app: Rc<RefCell<App>>, make_action: F)
    where
        F: Fn(&mut App) -> Action + 'static,
    {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing element #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut app = app.borrow_mut();
            let action = make_action(&mut *app);
            app.dispatch(action);
        });
        if let Err(e) = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach click handler to #{}: {:?}", id, e);
        }
        closure.forget();
    }

    fn on_change<F>(document: &Document, id: &str, app: Rc<RefCell<App>>, make_action: F)
    where
        F: Fn(String) -> Action + 'static,
    {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("Missing element #{}", id);
            return;
        };
        let document = document.clone();
        let owned_id = id.to_string();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let text = input_value(&document, &owned_id);
            app.borrow_mut().dispatch(make_action(text));
        });
        if let Err(e) = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach change handler to #{}: {:?}", id, e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    web_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tde_predictor::notify::LogNotifier;
    use tde_predictor::persistence::MemoryStore;
    use tde_predictor::{Action, Session, Symbol};

    tde_predictor::platform::init_logging();
    log::info!("TDE Predictor (native) starting...");
    log::info!("The interactive page is web-only - run with `trunk serve` for the web version");

    // Smoke run against an in-memory store
    let mut notifier = LogNotifier;
    let mut session = Session::open(MemoryStore::new(), &mut notifier);
    for symbol in [Symbol::T, Symbol::D, Symbol::E, Symbol::T, Symbol::D, Symbol::T] {
        session.handle(Action::Append(symbol), &mut notifier);
    }
    session.handle(Action::SetWindowSize("2".into()), &mut notifier);
    session.handle(Action::SetQuery("TD".into()), &mut notifier);
    session.handle(Action::Predict, &mut notifier);
    session.handle(Action::Save, &mut notifier);

    println!(
        "{} -> {}",
        session.sequence(),
        session
            .last_prediction()
            .map(|p| p.to_string())
            .unwrap_or_default()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
