pub mod exit_point;
pub mod parameters;
