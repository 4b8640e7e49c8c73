pub mod notification_render;
pub mod notification_state;

pub use notification_state::NotificationState;
