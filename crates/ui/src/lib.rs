pub mod app;
pub mod context;
pub mod routes;
pub mod scheduler;
pub mod scripts;
pub mod utils;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, OperatorSession, UiApp, build_app_context};
pub use utils::AppUtils;
