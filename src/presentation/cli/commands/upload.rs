use std::path::Path;

use crate::application::services::upload_relay::{RelayResponse, UploadRelay, UploadedFile};
use crate::domain::entities::diagnosis::HealthCheck;
use crate::presentation::cli::formatters::diagnosis_fmt::{
    format_error_banner, format_health_check, print_section_header,
};

/// Reads `path` and relays it to the analysis service.
///
/// A file that cannot be read is relayed as a missing upload so the
/// response carries the same 400 body the relay produces for that case.
///
/// # Errors
///
/// Returns an error if the relay answers with a non-success status or JSON
/// serialization fails.
pub async fn run_upload(relay: &UploadRelay, path: &Path, json: bool) -> anyhow::Result<()> {
    let file = read_upload(path).await;
    let response = relay.relay(file).await;

    if json {
        let output = serde_json::to_string_pretty(&response.body)?;
        println!("{output}");
    } else {
        print_response_human(path, &response);
    }

    if response.is_success() {
        Ok(())
    } else {
        anyhow::bail!("Upload rejected with status {}", response.status)
    }
}

async fn read_upload(path: &Path) -> Option<UploadedFile> {
    match tokio::fs::read(path).await {
        Ok(content) => Some(UploadedFile {
            name: path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
            content,
        }),
        Err(e) => {
            tracing::warn!("Cannot read {}: {e}", path.display());
            None
        }
    }
}

fn print_response_human(path: &Path, response: &RelayResponse) {
    print_section_header(&format!("📤 Upload {}", path.display()));
    if response.is_success() {
        match serde_json::from_value::<HealthCheck>(response.body.clone()) {
            Ok(check) => println!("{}", format_health_check(&check)),
            Err(_) => println!("{}", response.body),
        }
    } else {
        let error = response.body["error"].as_str().unwrap_or("Upload failed");
        let message = match response.body["details"].as_str() {
            Some(details) => format!("{error}: {details}"),
            None => error.to_owned(),
        };
        println!("{}", format_error_banner(&message));
    }
}
