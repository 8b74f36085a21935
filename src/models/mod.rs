pub mod attendance;
pub mod dashboard;
pub mod day_grid;
pub mod observation;
pub mod wire;
