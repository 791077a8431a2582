//! 可复用 UI 组件

mod input_field;
mod popup;

pub use input_field::InputField;
pub use popup::{Popup, centered_rect};
