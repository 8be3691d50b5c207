mod app_events;
mod app_render;
mod app_state;
mod input_state;
mod mouse_click;

// Re-export public types
pub use app_state::{App, IDLE_POLL_TIMEOUT};
pub use input_state::InputState;
