//! Interactive behaviour of the reference page, modelled without a DOM.
//!
//! Each type here holds the state a browser would keep in the page and is
//! driven by explicit calls (and explicit clock readings) from the host.

pub mod analytics;
pub mod clipboard;
pub mod debounce;
pub mod scroll;
pub mod search;
pub mod shortcuts;
pub mod trigger;

pub use analytics::{page_loaded_properties, track_event, track_page_loaded};
pub use clipboard::{Clipboard, ClipboardError, CopyTarget, MemoryClipboard};
pub use debounce::Debouncer;
pub use scroll::{AnchorMap, Rect};
pub use search::{filter, SearchBox, SearchResults};
pub use shortcuts::{resolve, Action, KeyPress};
pub use trigger::{ExportTrigger, TriggerEvent};
