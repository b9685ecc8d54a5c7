pub mod handler;
pub mod records;

pub use handler::{ChainEnd, MeshServiceHandler};
