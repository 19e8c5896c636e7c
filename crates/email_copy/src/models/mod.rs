pub mod category;
pub mod lookup;
pub mod render;

pub use category::*;
pub use lookup::*;
pub use render::*;
