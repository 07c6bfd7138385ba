use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::ValidationError;
use crate::service::LookupService;

/// Input form in front of a [`LookupService`].
///
/// Owns the input value and its interaction flags only. Results are read
/// from the service's published state.
pub struct SearchForm {
    service: Arc<LookupService>,
    input: String,
    dirty: bool,
    touched: bool,
    submitted: bool,
}

impl SearchForm {
    pub fn new(service: Arc<LookupService>) -> Self {
        Self {
            service,
            input: String::new(),
            dirty: false,
            touched: false,
            submitted: false,
        }
    }

    pub fn service(&self) -> &Arc<LookupService> {
        &self.service
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.dirty = true;
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// Required is the only rule. Whitespace counts as input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input.is_empty() {
            return Err(ValidationError::Required);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Invalid and the user has interacted with the control or submitted
    pub fn shows_error(&self) -> bool {
        !self.is_valid() && (self.dirty || self.touched || self.submitted)
    }

    /// Validate, then forward the input verbatim and wait for the lookup
    pub async fn submit(&mut self) -> Result<(), ValidationError> {
        self.check_submission()?;
        self.service.lookup(&self.input).await;
        Ok(())
    }

    /// Validate, then start the lookup without waiting for it
    pub fn submit_detached(&mut self) -> Result<JoinHandle<()>, ValidationError> {
        self.check_submission()?;
        Ok(self.service.spawn_lookup(self.input.clone()))
    }

    fn check_submission(&mut self) -> Result<(), ValidationError> {
        self.submitted = true;
        self.validate().inspect_err(|e| {
            tracing::debug!("Submission rejected: {e}");
        })
    }
}
