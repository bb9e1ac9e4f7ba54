pub mod allocator;
pub mod edge;
pub mod field;
pub mod index;
pub mod model;
pub mod node;

pub use allocator::*;
pub use edge::*;
pub use field::*;
pub use index::*;
pub use model::*;
pub use node::*;
