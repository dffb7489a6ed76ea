use common::{validate_statement_file, ApiError, UploadSummary};
use web_sys::File;
use yew::prelude::*;
use crate::api_client::upload::upload_statement;
use crate::common::alert::Alert;
use crate::common::toast::{ToastContext, ToastType};
use crate::components::common::Dropzone;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct UploadPanelProps {
    /// Emitted after the server accepted a statement.
    #[prop_or_default]
    pub on_uploaded: Callback<UploadSummary>,
}

fn completion_message(file_name: &str, summary: &UploadSummary) -> String {
    if summary.has_issues() {
        format!(
            "{} processed: {} of {} records succeeded, {} failed, {} pending.",
            file_name,
            summary.success_records,
            summary.total_records,
            summary.failed_records,
            summary.pending_records
        )
    } else {
        format!("{} uploaded successfully!", file_name)
    }
}

/// Dropzone that validates and uploads a CSV statement.
#[function_component(UploadPanel)]
pub fn upload_panel(props: &UploadPanelProps) -> Html {
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider is missing");
    let uploading = use_state_eq(|| false);
    let error = use_state(|| None::<ApiError>);
    // Bumped after each upload so the dropzone forgets the previous file
    let dropzone_key = use_state(|| 0u32);

    let on_file_select = {
        let toast_ctx = toast_ctx.clone();
        let uploading = uploading.clone();
        let error = error.clone();
        let dropzone_key = dropzone_key.clone();
        let on_uploaded = props.on_uploaded.clone();

        Callback::from(move |file: File| {
            error.set(None);

            let file_name = file.name();
            let max_size = settings::get_settings().max_upload_bytes;
            if let Err(err) = validate_statement_file(&file_name, file.size() as u64, max_size) {
                log::warn!("Rejected statement {}: {}", file_name, err);
                toast_ctx.show_titled(ToastType::Error, "Upload Failed", err.to_string());
                error.set(Some(err));
                return;
            }

            uploading.set(true);
            toast_ctx.show_titled(ToastType::Info, "Processing", "Uploading file...".to_string());

            let toast_ctx = toast_ctx.clone();
            let uploading = uploading.clone();
            let error = error.clone();
            let dropzone_key = dropzone_key.clone();
            let on_uploaded = on_uploaded.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match upload_statement(&file).await {
                    Ok(summary) => {
                        let toast_type = if summary.has_issues() {
                            ToastType::Warning
                        } else {
                            ToastType::Success
                        };
                        toast_ctx.show_titled(toast_type, "Upload Complete", completion_message(&file_name, &summary));
                        dropzone_key.set(*dropzone_key + 1);
                        on_uploaded.emit(summary);
                    }
                    Err(err) => {
                        toast_ctx.show_titled(ToastType::Error, "Upload Failed", err.to_string());
                        error.set(Some(err));
                    }
                }
                uploading.set(false);
            });
        })
    };

    let on_dismiss = {
        let error = error.clone();
        Callback::from(move |_: ()| error.set(None))
    };

    html! {
        <div class="flex flex-col gap-4">
            <Dropzone
                key={*dropzone_key}
                on_file_select={on_file_select}
                disabled={*uploading}
                title="Upload Bank Statement"
                subtitle="Click or drag and drop your CSV file"
            />
            if *uploading {
                <progress class="progress progress-primary w-full"></progress>
            }
            if let Some(err) = &*error {
                <Alert
                    alert_type={ToastType::Error}
                    title={err.title().to_string()}
                    message={err.to_string()}
                    on_close={on_dismiss}
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(failed: u64, pending: u64) -> UploadSummary {
        UploadSummary {
            message: String::new(),
            total_records: 10,
            success_records: 10 - failed - pending,
            failed_records: failed,
            pending_records: pending,
        }
    }

    #[test]
    fn test_completion_message_clean_upload() {
        assert_eq!(
            completion_message("jan.csv", &summary(0, 0)),
            "jan.csv uploaded successfully!"
        );
    }

    #[test]
    fn test_completion_message_reports_issues() {
        assert_eq!(
            completion_message("jan.csv", &summary(2, 1)),
            "jan.csv processed: 7 of 10 records succeeded, 2 failed, 1 pending."
        );
    }
}
