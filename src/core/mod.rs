//! Core building blocks: the pipeline configuration and the argument
//! construction for each nbconvert stage. Consumed by the high-level `api`
//! module.
pub mod invocation;
pub mod params;
