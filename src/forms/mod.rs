pub mod dynamic;
pub mod message;

pub use dynamic::{ControlValue, ControlValues, Visibility};
pub use message::{deep_link, FieldEntry, OrderMessage};
