pub mod errors;
pub mod models;
pub mod translations;

pub use errors::*;
pub use models::*;
pub use translations::*;
