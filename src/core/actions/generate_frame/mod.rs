#[allow(clippy::module_inception)]
pub mod generate_frame;
pub mod generate_frame_parallel_rayon;
pub mod ports;
