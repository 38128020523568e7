//! Cover image upload for the post form.
//!
//! WASM-only - drives the browser file picker and multipart fetch.

use dioxus::prelude::*;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;
const SUPPORTED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Backend answer for `/api/upload/image`.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Cover image picker + uploader. Calls `on_uploaded` with the public URL
/// the backend stored the image under.
#[component]
pub fn CoverImageUpload(
    #[props(default)] current_url: Option<String>,
    on_uploaded: EventHandler<String>,
) -> Element {
    let mut is_uploading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let pick_file = move |evt: FormEvent| {
        let files = evt.files();
        spawn(async move {
            let Some(file_engine) = files else {
                return;
            };
            let names = file_engine.files();
            let Some(name) = names.first().cloned() else {
                return;
            };
            let Some(bytes) = file_engine.read_file(&name).await else {
                error.set(Some("Could not read the selected file".to_string()));
                return;
            };

            let content_type = guess_content_type(&name);
            if !SUPPORTED_IMAGE_TYPES.contains(&content_type) {
                error.set(Some(format!(
                    "Unsupported type: {content_type}. Accepted: JPEG, PNG, WebP, GIF"
                )));
                return;
            }
            if bytes.len() > MAX_IMAGE_SIZE {
                error.set(Some(format!(
                    "File too large: {} MB (max {} MB)",
                    bytes.len() / 1024 / 1024,
                    MAX_IMAGE_SIZE / 1024 / 1024
                )));
                return;
            }

            is_uploading.set(true);
            error.set(None);

            match upload_image(&name, content_type, &bytes).await {
                Ok(url) => on_uploaded.call(url),
                Err(e) => {
                    tracing::error!("cover upload failed: {e}");
                    error.set(Some(e));
                }
            }
            is_uploading.set(false);
        });
    };

    rsx! {
        div { class: "c-image-upload",
            if let Some(url) = &current_url {
                img { class: "c-image-upload__preview", src: "{url}", alt: "Cover image" }
            }

            label { class: "c-image-upload__button",
                if is_uploading() { "Uploading..." } else { "📷 Choose cover image" }
                input {
                    r#type: "file",
                    accept: "image/jpeg,image/png,image/webp,image/gif",
                    class: "c-image-upload__input",
                    disabled: is_uploading(),
                    onchange: pick_file,
                }
            }

            if let Some(message) = error() {
                p { class: "c-image-upload__error", "{message}" }
            }
        }
    }
}

fn guess_content_type(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

/// Multipart POST to the upload endpoint. The browser sets the multipart
/// boundary itself, so no Content-Type header here.
async fn upload_image(filename: &str, content_type: &str, bytes: &[u8]) -> Result<String, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build upload blob".to_string())?;

    let form_data = web_sys::FormData::new().map_err(|_| "failed to build form data".to_string())?;
    form_data
        .append_with_blob_and_filename("file", &blob, filename)
        .map_err(|_| "failed to attach file".to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init("/api/upload/image", &opts)
        .map_err(|e| format!("failed to create request: {e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("upload failed: {e:?}"))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not yield a Response".to_string())?;

    if !response.ok() {
        return Err(format!("upload rejected: HTTP {}", response.status()));
    }

    let json = JsFuture::from(
        response
            .json()
            .map_err(|_| "response is not JSON".to_string())?,
    )
    .await
    .map_err(|e| format!("failed to read response: {e:?}"))?;

    let parsed: UploadResponse = serde_wasm_bindgen::from_value::<UploadResponse>(json)
        .map_err(|e| format!("unexpected upload response: {e}"))?;
    Ok(parsed.url)
}
