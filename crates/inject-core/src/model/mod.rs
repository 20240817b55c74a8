//! Modelos neutrales (Arguments, ParamType, ParamDescriptors).

pub mod args;
pub mod descriptor;

pub use args::Arguments;
pub use descriptor::{ParamDescriptors, ParamType};
