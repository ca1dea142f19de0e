mod step_counter;

pub use step_counter::*;
