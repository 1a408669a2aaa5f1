//! Console rendering and file export of normalized records.

pub mod export;
pub mod present;
pub mod progress;

pub use export::{export, OutputTarget, DEFAULT_FILE_NAME};
pub use present::{Presenter, Records};
pub use progress::fetching;
