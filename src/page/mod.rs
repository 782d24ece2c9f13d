//! Page trees: node types, structured data, and page builders.

pub mod home;
pub mod node;
pub mod schema;

pub use home::render_home;
pub use node::Node;
