pub mod api;
pub mod error;
pub mod form;
pub mod service;
pub mod state;

pub use api::{HttpLookupApi, LookupApi};
pub use error::{LookupError, ValidationError};
pub use form::SearchForm;
pub use service::{LOOKUP_FAILED_MESSAGE, LookupService};
pub use state::StateStore;

#[cfg(test)]
mod tests;
