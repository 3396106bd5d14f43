mod item_vm;
mod progress_vm;

pub use item_vm::{ItemVm, OptionVm, filter_items};
pub use progress_vm::ProgressVm;
