//! Configuration
//!
//! `compile_time` limits are generated by build.rs from the selected
//! `config/<profile>.toml`; `constants` holds the default charsets and
//! `runtime` the environment-backed preferences.

include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod constants;
pub mod runtime;
