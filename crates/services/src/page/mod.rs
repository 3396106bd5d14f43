//! Page-wide affordances. None of them shares state with the checklist.

pub mod clipboard;
pub mod forms;
pub mod reveal;
pub mod scroll;
pub mod shortcuts;
pub mod toast;
pub mod tooltip;

pub use clipboard::{ClipboardBackend, CopyOutcome, CopyPath, copy_to_clipboard};
pub use forms::{FORM_INCOMPLETE_MESSAGE, FormValidator, Revalidate};
pub use reveal::RevealTracker;
pub use scroll::{BackToTop, HeaderAutoHide, HeaderSettle};
pub use shortcuts::{KeyPress, Overlays, Shortcut, ShortcutOutcome};
pub use toast::{Severity, Toast, ToastCenter, ToastEvent, ToastId};
pub use tooltip::{Rect, Size, Tooltips, place_above};
