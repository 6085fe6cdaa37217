//! Helper functions for rendering head markup and building URLs

mod html;
mod url;

pub use html::*;
pub use url::*;
