pub mod diagnosis_fmt;
pub mod history_fmt;
