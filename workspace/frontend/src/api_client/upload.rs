use common::{ApiError, UploadSummary};
use web_sys::{File, FormData};
use crate::api_client;

/// Upload a CSV bank statement as the multipart field `file`
pub async fn upload_statement(file: &File) -> Result<UploadSummary, ApiError> {
    log::info!("Uploading statement {} ({} bytes)", file.name(), file.size());

    let form = FormData::new().map_err(|_| ApiError::Network("Unable to create form data".to_string()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("Unable to attach file to form".to_string()))?;

    let result = api_client::post_form::<UploadSummary>("/upload", form).await;
    match &result {
        Ok(summary) => log::info!(
            "Upload processed {} records ({} failed, {} pending)",
            summary.total_records,
            summary.failed_records,
            summary.pending_records
        ),
        Err(e) => log::error!("Upload failed: {}", e),
    }
    result
}
