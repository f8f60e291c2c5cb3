mod error;
mod result;
mod vertex;

pub use error::GraphError;
pub use result::GraphResult;
pub use vertex::Vertex;
