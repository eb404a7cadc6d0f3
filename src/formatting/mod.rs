//! Renders registered captions into display strings and listings.

mod anchor;
mod listing;
mod render;

pub use self::anchor::anchor_token;
pub use self::listing::render_listing;
pub use self::render::render;
