use super::super::{Model, Msg};
use super::utils::{FILE_INPUT_ID, debounce, first_file, open_file_picker};
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        // allow picking the same file again
        input.set_value("");

        file.map(Msg::FileChosen)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <div class="upload-section">
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, open_file_picker)}
            >
                { render_preview(model) }
            </div>

            <button
                class="btn-secondary full-width"
                onclick={debounce(300, open_file_picker)}
            >
                {"📂 फ़ाइल चुनें / Choose File"}
            </button>

            { render_tips() }
        </div>
    }
}

fn render_preview(model: &Model) -> Html {
    match model.session.candidate() {
        Some(candidate) => match candidate.preview() {
            Some(url) => html! {
                <div class="preview">
                    <img src={url.to_string()} alt="Selected potato leaf" />
                    <p class="preview-selected">{"✅ छवि चुनी गई / Image selected"}</p>
                    <p class="preview-hint">{"नई छवि के लिए क्लिक करें / Click for new image"}</p>
                </div>
            },
            None => html! {
                <div class="loading-preview">
                    <span class="spinner"></span>
                    <p>
                        {"पूर्वावलोकन लोड हो रहा है..."}
                        <br />
                        { format!("Loading preview of {}...", candidate.file_name()) }
                    </p>
                </div>
            },
        },
        None => html! {
            <div class="upload-placeholder">
                <div class="placeholder-icon">{"📸"}</div>
                <p class="placeholder-title">{"आलू के पत्ते की तस्वीर अपलोड करें"}</p>
                <p>{"Upload potato leaf image"}</p>
                <ul class="file-types">
                    <li>{"• Click to browse, drag & drop, or paste"}</li>
                    <li>{"• Support: JPG, PNG, GIF"}</li>
                    <li>{"• Max size: 5MB"}</li>
                </ul>
            </div>
        },
    }
}

fn render_tips() -> Html {
    html! {
        <div class="tips">
            <h4>{"💡 बेहतर परिणामों के लिए / For better results:"}</h4>
            <ul>
                <li>{"• स्पष्ट और तेज़ तस्वीर लें / Take clear and sharp images"}</li>
                <li>{"• पत्ते को पूरी तरह दिखाएं / Show the complete leaf"}</li>
                <li>{"• अच्छी रोशनी में फोटो लें / Take photos in good lighting"}</li>
                <li>{"• कैमरा स्थिर रखें / Keep camera steady"}</li>
            </ul>
        </div>
    }
}

/// Detect and New Analysis buttons under the upload card.
pub fn render_actions(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let session = &model.session;
    let show_reset = session.candidate().is_some() || session.result().is_some();

    html! {
        <div class="button-container">
            <button
                class="btn-primary"
                disabled={!session.can_submit()}
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::Submit)
                })}
            >
                {
                    if session.is_submitting() {
                        html! { <><span class="spinner small"></span>{" जांच रहे हैं... / Analyzing..."}</> }
                    } else {
                        html! { {"🔍 रोग की जांच करें / Detect Disease"} }
                    }
                }
            </button>

            if show_reset {
                <button
                    class="btn-secondary"
                    onclick={link.callback(|_| Msg::Reset)}
                >
                    {"🔄 नया विश्लेषण / New Analysis"}
                </button>
            }
        </div>
    }
}
