pub mod check;
pub mod daemon;
pub mod history;
pub mod upload;
