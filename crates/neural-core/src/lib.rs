pub mod actions;
pub mod commands;
pub mod config;
pub mod portfolio;
pub mod reducer;
pub mod scheduler;
pub mod script;
pub mod session;
pub mod state;

pub use actions::*;
pub use commands::*;
pub use config::*;
pub use portfolio::*;
pub use reducer::*;
pub use scheduler::*;
pub use session::*;
pub use state::*;
