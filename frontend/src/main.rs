mod api;
mod components;

use components::header::render_header;
use components::results::render_results;
use components::upload_section::UploadPage;
use gloo_events::EventListener;
use smartseg_shared::{ClientConfig, DetectionPayload, Route, ViewTransfer, render};
use std::rc::Rc;
use yew::prelude::*;

// Yew msg components
enum Msg {
    Detected(DetectionPayload),
    HashChanged,
}

// Main component
struct App {
    config: Rc<ClientConfig>,
    route: Route,
    transfer: ViewTransfer,
    /// Payload claimed by the current result view, if any.
    result: Option<Rc<DetectionPayload>>,
    _hash_listener: EventListener,
}

fn load_config() -> ClientConfig {
    ClientConfig::from_values(
        option_env!("SMARTSEG_DETECT_URL"),
        option_env!("SMARTSEG_TIMEOUT_SECS"),
        option_env!("SMARTSEG_MAX_UPLOAD_BYTES"),
    )
    .unwrap_or_else(|e| {
        log::error!("Invalid client configuration, using defaults: {}", e);
        ClientConfig::default()
    })
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or_default()
}

fn push_route(route: Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route.hash()) {
            log::warn!("Failed to update location hash: {:?}", e);
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = load_config();
        log::info!("Detection endpoint: {}", config.endpoint);

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "hashchange", move |_| {
            link.send_message(Msg::HashChanged);
        });

        let mut app = Self {
            config: Rc::new(config),
            route: Route::Submission,
            transfer: ViewTransfer::new(),
            result: None,
            _hash_listener: listener,
        };
        app.activate(current_route());
        app
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Detected(payload) => {
                self.transfer.send(payload);
                self.activate(Route::Result);
                push_route(Route::Result);
                true
            }
            Msg::HashChanged => {
                let route = current_route();
                if route == self.route {
                    return false;
                }
                self.activate(route);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                {
                    match self.route {
                        Route::Submission => html! {
                            <UploadPage
                                config={self.config.clone()}
                                on_detected={ctx.link().callback(Msg::Detected)}
                            />
                        },
                        Route::Result => render_results(&render(self.result.as_deref())),
                    }
                }
                </main>
            </div>
        }
    }
}

impl App {
    /// Switches to `route`. Entering the result view claims whatever the transfer holds;
    /// entering the submission view drops the previous result.
    fn activate(&mut self, route: Route) {
        self.route = route;
        self.result = match route {
            Route::Result => self.transfer.take().map(Rc::new),
            Route::Submission => None,
        };
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
