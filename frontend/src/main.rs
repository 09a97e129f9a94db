mod api;
mod components;

use api::GlooInferenceClient;
use components::{handlers, header, info, results, upload_section, utils};
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use shared::{
    ClientConfig, DecodedPreview, NetworkError, PredictionResult, PredictionSession, SelectedFile,
    SubmissionId,
};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // File operations
    FileChosen(GlooFile),
    FileLoaded {
        pick: u64,
        source: GlooFile,
        file: SelectedFile,
    },
    FileUnreadable { pick: u64, reason: String },
    PreviewDecoded(DecodedPreview),
    Reset,

    // Analysis operations
    Submit,
    SubmissionFinished {
        id: SubmissionId,
        outcome: Result<PredictionResult, NetworkError>,
    },

    // UI states
    SetNotice(Option<String>),
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    session: PredictionSession,
    client: GlooInferenceClient,
    /// Transient message for rejected files and refused submissions.
    notice: Option<String>,
    is_dragging: bool,
    /// Bumped on every file pick; byte reads for older picks are dropped.
    latest_pick: u64,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ClientConfig::from_override(option_env!("KISAN_MODEL_URL"));
        log::info!("Inference endpoint: {}", config.endpoint);

        let mut model = Self {
            session: PredictionSession::new(config),
            client: GlooInferenceClient,
            notice: None,
            is_dragging: false,
            latest_pick: 0,
            paste_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        } else {
            log::warn!("No global window; clipboard paste disabled");
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::FileLoaded { pick, source, file } => {
                handlers::handle_file_loaded(self, ctx, pick, source, file)
            }
            Msg::FileUnreadable { pick, reason } => {
                handlers::handle_file_unreadable(self, pick, &reason)
            }
            Msg::PreviewDecoded(decoded) => handlers::handle_preview_decoded(self, decoded),
            Msg::Reset => handlers::handle_reset(self),

            // Analysis operations
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::SubmissionFinished { id, outcome } => {
                handlers::handle_submission_finished(self, id, outcome)
            }

            // UI states
            Msg::SetNotice(notice) => {
                self.notice = notice;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="farm-bg">
                { header::render_header() }

                <main class="main-content">
                    <div class="intro">
                        <h1>{"🥔 आलू रोग निदान / Potato Disease Detection"}</h1>
                        <p>
                            {"अपने आलू के पत्तों की तस्वीर अपलोड करें और तुरंत रोग की जांच कराएं"}
                            <br />
                            {"Upload potato leaf images for instant disease detection"}
                        </p>
                    </div>

                    <div class="panels">
                        <section class="card">
                            <h2>{"📷 छवि अपलोड करें / Upload Image"}</h2>
                            { upload_section::render_upload_section(self, ctx) }
                            { utils::render_error_message(self) }
                            { upload_section::render_actions(self, ctx) }
                        </section>

                        <section class="card">
                            <h2>{"📊 परिणाम / Results"}</h2>
                            { results::render_results(self) }
                        </section>
                    </div>

                    { info::render_info_section() }
                </main>

                <footer class="app-footer">
                    <p>{"🌾 किसान मित्र - आलू रोग निदान सिस्टम / Kisan Mitra - Potato Disease Detection System"}</p>
                    <p class="footer-tagline">{"Empowering farmers with AI-powered crop health monitoring"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
