pub mod celebration;
pub mod constants;
pub mod drag;
pub mod notes;
pub mod starfield;
pub mod store;
pub mod wall;

pub use celebration::*;
pub use constants::*;
pub use drag::*;
pub use notes::*;
pub use starfield::*;
pub use store::*;
pub use wall::*;
