use log::Level;

/// Number the order messages are sent to, without the leading `+`.
pub fn whatsapp_number() -> &'static str {
    option_env!("STOREFRONT_WHATSAPP").unwrap_or("221779411495")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Vertical offset (px) past which the header switches to its compact look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

pub const COUNTER_THRESHOLD: f64 = 0.5;
/// Milliseconds.
pub const COUNTER_DURATION: f64 = 2000.0;

/// Maximum rotation in degrees on either axis.
pub const TILT_MAX_DEG: f64 = 6.0;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_LIFT_PX: i32 = -6;

/// Delay before the streaming shortcut preselects its platform, so the
/// modal has rendered.
pub const PRESELECT_DELAY_MS: u32 = 100;

pub const STREAMING_MODAL: &str = "streaming-service";
