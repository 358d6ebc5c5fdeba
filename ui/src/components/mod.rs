//! Collection Centre Block Components
//!
//! The block's two render paths:
//! - [`CentreBlockEdit`]: the authoring phase, with network fetches
//! - [`CentreView`]: the display phase, static over the persisted
//!   configuration

mod editor;
mod view;

pub use editor::CentreBlockEdit;
pub use view::{CentreDetailCard, CentreView};
