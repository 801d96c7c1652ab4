pub mod history_filter;

pub use history_filter::{count_by_tag, empty_state_message, filter_history, EMPTY_STATE_MESSAGE};
