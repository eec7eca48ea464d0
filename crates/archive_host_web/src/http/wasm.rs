use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::*;

pub async fn get_text(url: &str) -> Result<HttpText, ArchiveError> {
    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(js_transport)?;
    exec(request).await
}

pub async fn post_json(url: &str, body: &serde_json::Value) -> Result<HttpText, ArchiveError> {
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body.to_string()));
    let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(js_transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_transport)?;
    exec(request).await
}

pub async fn post_multipart(url: &str, files: &[UploadFile]) -> Result<HttpText, ArchiveError> {
    let form = web_sys::FormData::new().map_err(js_transport)?;
    for file in files {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&bytes.buffer());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_transport)?;
        form.append_with_blob_and_filename("files", &blob, &file.name)
            .map_err(js_transport)?;
    }

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    // The browser supplies the multipart boundary; setting Content-Type here would break it.
    init.set_body(form.as_ref());
    let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(js_transport)?;
    exec(request).await
}

async fn exec(request: web_sys::Request) -> Result<HttpText, ArchiveError> {
    let window =
        web_sys::window().ok_or_else(|| ArchiveError::transport("window unavailable"))?;
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_transport)?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| ArchiveError::transport("fetch returned a non-Response value"))?;

    let status = response.status();
    let body_promise = response.text().map_err(js_transport)?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(js_transport)?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        return Err(ArchiveError::backend(
            status,
            body_snippet(&body, &response.status_text()),
        ));
    }

    Ok(HttpText { status, body })
}

fn body_snippet(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

fn js_transport(err: JsValue) -> ArchiveError {
    ArchiveError::transport(format!("{err:?}"))
}
