pub mod app;
pub mod events;
pub mod layout;
pub mod runner;
pub mod terminal;

pub use app::App;
pub use events::handle_key_event;
pub use runner::run_app;
pub use terminal::{TerminalGuard, init_terminal};
