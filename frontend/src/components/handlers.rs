use super::super::{Model, Msg};
use super::utils::first_file;
use gloo_file::File as GlooFile;
use shared::i18n;
use shared::upload;
use shared::{
    DecodedPreview, InferenceClient, NetworkError, PredictionResult, SelectedFile, SubmissionId,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

/// Checks the file's metadata, then reads its bytes off the event loop.
pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let media_type = file.raw_mime_type();
    let size = file.size();

    if let Err(err) = upload::validate(&media_type, size, model.session.config().max_upload_bytes) {
        log::warn!("Skipping {}: {}", file.name(), err);
        model.notice = Some(err.user_message());
        return true;
    }

    model.latest_pick += 1;
    let pick = model.latest_pick;
    let link = ctx.link().clone();

    spawn_local(async move {
        match gloo_file::futures::read_as_bytes(&file).await {
            Ok(bytes) => link.send_message(Msg::FileLoaded {
                pick,
                file: SelectedFile {
                    name: file.name(),
                    media_type,
                    size,
                    bytes,
                },
                source: file,
            }),
            Err(err) => link.send_message(Msg::FileUnreadable {
                pick,
                reason: format!("{:?}", err),
            }),
        }
    });

    false
}

pub fn handle_file_loaded(
    model: &mut Model,
    ctx: &Context<Model>,
    pick: u64,
    source: GlooFile,
    file: SelectedFile,
) -> bool {
    if pick != model.latest_pick {
        log::debug!("Dropping bytes of superseded pick {}", pick);
        return false;
    }

    match model.session.select_file(file) {
        Ok(job) => {
            model.notice = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                // the browser's reader encodes without blocking the event loop
                let decoded = match gloo_file::futures::read_as_data_url(&source).await {
                    Ok(data_url) => job.ready(data_url),
                    Err(err) => {
                        log::warn!("Reading preview of {} failed: {:?}", job.selection(), err);
                        job.decode()
                    }
                };
                link.send_message(Msg::PreviewDecoded(decoded));
            });
        }
        Err(err) => model.notice = Some(err.user_message()),
    }
    true
}

pub fn handle_file_unreadable(model: &mut Model, pick: u64, reason: &str) -> bool {
    if pick != model.latest_pick {
        return false;
    }
    log::error!("Failed to read selected file: {}", reason);
    model.notice = Some(i18n::FILE_UNREADABLE.to_string());
    true
}

pub fn handle_preview_decoded(model: &mut Model, decoded: DecodedPreview) -> bool {
    model.session.complete_preview(decoded)
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.session.begin_submit() {
        Ok(submission) => {
            model.notice = None;
            let client = model.client;
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = client.predict(&submission).await;
                link.send_message(Msg::SubmissionFinished {
                    id: submission.id,
                    outcome,
                });
            });
        }
        Err(err) => {
            log::warn!("Submit refused: {}", err);
            model.notice = Some(err.user_message());
        }
    }
    true
}

pub fn handle_submission_finished(
    model: &mut Model,
    id: SubmissionId,
    outcome: Result<PredictionResult, NetworkError>,
) -> bool {
    model.session.finish_submit(id, outcome);
    // a discarded outcome still frees the submit button
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.session.reset();
    model.notice = None;
    model.latest_pick += 1;
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    match file {
        Some(file) => {
            handle_file_chosen(model, ctx, file);
        }
        None => log::debug!("Drop carried no files"),
    }
    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    let file = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    if let Some(file) = file {
        event.prevent_default();
        return handle_file_chosen(model, ctx, file);
    }
    false
}
