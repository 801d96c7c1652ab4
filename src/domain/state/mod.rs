pub mod cycle;

pub use cycle::{reduce, CycleEvent, CycleId, CycleState, DashboardSnapshot, Phase, Transition};
