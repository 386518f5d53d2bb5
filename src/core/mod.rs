pub mod lambda_space;
pub mod phase;
pub mod potential;
pub mod radial;
