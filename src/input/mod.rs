pub mod command;
pub mod handler;

pub use handler::run_session;
