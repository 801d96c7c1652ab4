pub mod dashboard;
pub mod notification_emitter;
pub mod scheduler;
pub mod upload_relay;
