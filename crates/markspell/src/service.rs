// Check service: uploads and stored documents in, annotated reports out

use std::sync::Arc;

use crate::pipeline::{CheckReport, Pipeline, PipelineError};
use crate::store::{DocumentStore, FileId, OwnerId, StoreError, StoredFile};
use crate::upload::MarkdownUpload;

/// Error type for service calls.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("processing error: {0}")]
    Processing(#[from] PipelineError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of checking an upload.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub report: CheckReport,
    /// Set when the upload was persisted for its owner.
    pub file_id: Option<FileId>,
}

/// Runs uploads through the pipeline and keeps them for their owners.
#[derive(Clone)]
pub struct CheckService {
    pipeline: Pipeline,
    store: Arc<dyn DocumentStore>,
}

impl CheckService {
    pub fn new(pipeline: Pipeline, store: Arc<dyn DocumentStore>) -> Self {
        Self { pipeline, store }
    }

    /// Check an upload. With an owner, the upload is stored after the check
    /// succeeds; a failed check stores nothing.
    pub fn check_upload(&self, upload: &MarkdownUpload, owner: Option<&OwnerId>) -> Result<CheckOutcome, ServiceError> {
        let report = self.pipeline.check(upload.contents())?;

        let file_id = match owner {
            Some(owner) => Some(self.store.save(owner, upload.filename(), upload.contents())?),
            None => None,
        };

        Ok(CheckOutcome { report, file_id })
    }

    /// Load one of `owner`'s stored documents and check it.
    pub fn check_stored(&self, owner: &OwnerId, id: FileId) -> Result<CheckReport, ServiceError> {
        let contents = self.store.load(owner, id)?;
        Ok(self.pipeline.check(&contents)?)
    }

    pub fn list_files(&self, owner: &OwnerId) -> Result<Vec<StoredFile>, ServiceError> {
        Ok(self.store.list(owner)?)
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}
