pub mod notification_service;

pub use notification_service::{Notice, NoticeLevel, NotificationHost, NotificationService};
