//! Handlers for menu input and the share screen.

mod input_handler;
mod share_handler;

pub use input_handler::InputHandler;
pub use share_handler::ShareHandler;
