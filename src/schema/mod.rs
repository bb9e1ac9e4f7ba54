pub mod codec;
pub mod layout;
pub mod sample;

pub use codec::*;
pub use layout::*;
pub use sample::*;
