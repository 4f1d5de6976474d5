pub mod outcome;
pub mod requests;

pub use outcome::*;
pub use requests::*;
