// Upload validation: rejects non-markdown input before the pipeline runs

/// Error type for rejected uploads.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The declared content type is not a markdown type.
    #[error("invalid file type {content_type:?}: expected a markdown document")]
    InvalidFileType { content_type: String },

    /// No file name was supplied.
    #[error("upload has no file name")]
    MissingFilename,
}

/// A markdown document submitted for checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownUpload {
    filename: String,
    contents: Vec<u8>,
}

impl MarkdownUpload {
    /// Validate an upload by its declared content type.
    ///
    /// Accepts any type whose subtype is `markdown` or `x-markdown`
    /// (`text/markdown`, `text/x-markdown; charset=utf-8`, ...).
    pub fn new(filename: &str, content_type: &str, contents: Vec<u8>) -> Result<Self, UploadError> {
        if filename.trim().is_empty() {
            return Err(UploadError::MissingFilename);
        }
        if !is_markdown_type(content_type) {
            return Err(UploadError::InvalidFileType {
                content_type: content_type.to_string(),
            });
        }
        Ok(Self {
            filename: filename.to_string(),
            contents,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

fn is_markdown_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    let Some((_, subtype)) = essence.split_once('/') else {
        return false;
    };
    subtype.eq_ignore_ascii_case("markdown") || subtype.eq_ignore_ascii_case("x-markdown")
}
