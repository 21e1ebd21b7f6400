//! Multipart form reading
//!
//! All three processing endpoints take a multipart form with a `file` field
//! plus endpoint-specific text fields. The form is read completely before
//! any validation so field order on the wire does not matter.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::AppError;

/// File part of a multipart upload
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Fully read multipart form
pub struct UploadForm {
    file: Option<UploadedFile>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// Take the uploaded file, rejecting the request if it is absent.
    /// A missing file is a structural validation error, not a domain one.
    pub fn require_file(&mut self) -> Result<UploadedFile, AppError> {
        self.file.take().ok_or(AppError::MissingField("file"))
    }

    /// Look up a text field by name
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Read every field of the multipart form into memory
pub async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut file = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "upload".to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Upload(e.to_string()))?;

            tracing::debug!("Received file '{}' ({} bytes)", filename, data.len());
            file = Some(UploadedFile {
                filename,
                data: data.to_vec(),
            });
        } else if !name.is_empty() {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Upload(e.to_string()))?;
            fields.insert(name, value);
        }
    }

    Ok(UploadForm { file, fields })
}

/// Case-insensitive check of the declared filename suffix. The file content
/// is never sniffed; a mislabeled upload fails later at the rasterizer.
pub fn has_pdf_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
}
