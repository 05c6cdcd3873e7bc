mod arc;
pub mod closure;
mod digraph;
mod error;
pub mod format;
mod list_graph;
mod matrix_graph;
mod prerequisites;
mod reduction;
mod smallset;

pub use arc::*;
pub use digraph::*;
pub use error::*;
pub use list_graph::*;
pub use matrix_graph::*;
pub use prerequisites::*;
pub use reduction::*;

pub(crate) use smallset::*;
