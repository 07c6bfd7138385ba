mod types;

pub use types::{Entry, ImagePayload, SearchState, Thumbnail, ThumbnailError};
