pub mod appointment;
pub mod people;

pub use appointment::*;
pub use people::*;
