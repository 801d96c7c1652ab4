pub mod history;
pub mod http;
pub mod logs;
pub mod notifications;
