#![warn(
    clippy::perf,
    clippy::semicolon_if_nothing_returned,
    clippy::missing_const_for_fn,
    clippy::use_self
)]

pub mod error;
pub mod scalar;
pub mod vec2;
pub mod vec3;

mod parse;

pub use error::Error;
pub use vec2::Vec2;
pub use vec3::Vec3;
