//! `deepauth-session`
//!
//! **Responsibility:** the presentation-layer state machine, without a UI.
//!
//! A [`Workbench`] is what the screen binds to: the active tab, the image and
//! text input slots, the "analyzing" overlay flag and the last result per
//! slot. It owns the rules the engine deliberately does not enforce:
//! - blank inputs are never submitted (`can_analyze`)
//! - at most one analysis runs at a time
//! - failures are logged and swallowed; the user just gets no result

pub mod display;
pub mod error;
pub mod fetch;
pub mod overlay;
pub mod workbench;

pub use display::{ScoreTone, TextStats};
pub use error::SessionError;
pub use fetch::{HttpSampleFetcher, SampleImageFetcher};
pub use overlay::{Hsla, OverlayCell, RENDER_THRESHOLD, cell_color, overlay_cells};
pub use workbench::Workbench;
