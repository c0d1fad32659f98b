//! Import / Export Component
//!
//! Export downloads the backend's dump as a dated JSON file; import sends a
//! previously exported file back.

use chrono::Utc;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

use crate::context::AppContext;
use crate::error::Error;
use crate::notice::{text, NoticeKind};
use crate::tracker::ExportFile;

fn browser(err: JsValue) -> Error {
    Error::Browser(format!("{:?}", err))
}

/// Hand `file` to the browser as a download via a temporary object URL
fn download(file: &ExportFile) -> Result<(), Error> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(browser)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Browser("no document".into()))?;
    let body = document.body().ok_or_else(|| Error::Browser("no body".into()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into()
        .map_err(|_| Error::Browser("not an anchor element".into()))?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);

    body.append_child(&anchor).map_err(browser)?;
    anchor.click();
    body.remove_child(&anchor).map_err(browser)?;
    Url::revoke_object_url(&url).map_err(browser)
}

async fn read_text(file: &File) -> Result<String, Error> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| Error::MalformedFile(format!("{:?}", e)))?;
    value
        .as_string()
        .ok_or_else(|| Error::MalformedFile("file is not text".into()))
}

#[component]
pub fn DataTransfer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let file_input = NodeRef::<Input>::new();

    let export = move |_| {
        spawn_local(async move {
            let today = Utc::now().date_naive();
            let result = ctx.tracker().export(today).await;
            match result.and_then(|file| download(&file)) {
                Ok(()) => ctx.notify_success(text::EXPORTED),
                Err(e) => ctx.notify_error(&e, text::EXPORT_FAILED),
            }
        });
    };

    let import = move |_| {
        let Some(input) = file_input.get() else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            ctx.notify(NoticeKind::Error, text::IMPORT_NO_FILE);
            return;
        };

        spawn_local(async move {
            let contents = match read_text(&file).await {
                Ok(contents) => contents,
                Err(e) => {
                    log::warn!("could not read {}: {}", file.name(), e);
                    ctx.notify_error(&e, text::IMPORT_FAILED);
                    return;
                }
            };
            match ctx.tracker().import(&contents).await {
                Ok((report, refresh)) => {
                    ctx.notify_success(report.summary());
                    ctx.apply_refresh(refresh);
                    input.set_value("");
                }
                Err(e) => ctx.notify_error(&e, text::IMPORT_FAILED),
            }
        });
    };

    view! {
        <div class="settings-section">
            <h3>"Import / Export"</h3>
            <div class="button-row">
                <button class="btn-secondary" on:click=export>"Export Data"</button>
            </div>
            <div class="import-row">
                <input type="file" accept=".json,application/json" node_ref=file_input />
                <button class="btn-secondary" on:click=import>"Import Data"</button>
            </div>
        </div>
    }
}
