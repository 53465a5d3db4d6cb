mod app_events;
mod app_render;
mod app_state;
mod mouse_capture;
mod mouse_events;

pub use app_state::App;
pub use mouse_capture::MouseCaptureGuard;
