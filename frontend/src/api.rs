use gloo_file::{Blob, File as GlooFile, ObjectUrl};
use gloo_net::http::{Request, Response};
use shared::api::{UPLOAD_FIELD, download_filename};
use shared::{ClientConfig, ReportJob, ReportPreview, RequestError, UploadMode, UploadOutcome};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlAnchorElement};

fn transport(e: gloo_net::Error) -> RequestError {
    RequestError::Transport(e.to_string())
}

fn js_error(e: JsValue) -> RequestError {
    RequestError::Transport(format!("{:?}", e))
}

fn ensure_ok(response: &Response) -> Result<(), RequestError> {
    if response.ok() {
        Ok(())
    } else {
        Err(RequestError::Status(response.status()))
    }
}

/// Sends the staged file to the endpoint of `mode` and decodes the answer.
pub async fn upload(
    config: &ClientConfig,
    mode: UploadMode,
    file: &GlooFile,
) -> Result<UploadOutcome, RequestError> {
    let form_data = FormData::new().map_err(js_error)?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file.as_ref(), &file.name())
        .map_err(js_error)?;

    let url = config.endpoint_url(mode.endpoint());
    log::debug!("POST {} ({} bytes)", url, file.size());

    let response = Request::post(&url)
        .body(form_data)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&response)?;

    let body = response.text().await.map_err(transport)?;
    UploadOutcome::decode(mode, &body)
}

pub async fn report_preview(
    config: &ClientConfig,
    crack_type: &str,
) -> Result<ReportPreview, RequestError> {
    let response = Request::post(&config.report_preview_url(crack_type))
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&response)?;

    let body = response.text().await.map_err(transport)?;
    Ok(serde_json::from_str(&body)?)
}

/// Asks the server for a PDF and hands it to the browser as a download.
pub async fn generate_report(config: &ClientConfig, job: &ReportJob) -> Result<(), RequestError> {
    let kind = job.kind();
    let response = Request::post(&config.endpoint_url(kind.endpoint()))
        .header("Content-Type", "application/json")
        .body(job.body()?)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(&response)?;

    let disposition = response.headers().get("content-disposition");
    let bytes = response.binary().await.map_err(transport)?;
    let filename = download_filename(disposition.as_deref(), kind, js_sys::Date::now() as u64);

    save_download(&bytes, &filename)
}

fn save_download(bytes: &[u8], filename: &str) -> Result<(), RequestError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| RequestError::Transport("no document to attach download to".into()))?;
    let body = document
        .body()
        .ok_or_else(|| RequestError::Transport("document has no body".into()))?;

    let url = ObjectUrl::from(Blob::new_with_options(bytes, Some("application/pdf")));
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| RequestError::Transport("could not create download link".into()))?;
    link.set_href(&url);
    link.set_download(filename);

    body.append_child(&link).map_err(js_error)?;
    link.click();
    link.remove();

    log::info!("Downloaded {} ({} bytes)", filename, bytes.len());
    Ok(())
}
