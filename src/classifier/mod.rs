//! The loaded classifier artifact.
//!
//! [`GbTreeModel`] is the in-memory form of the trained model. Everything
//! outside this module treats it as an opaque capability: encoded feature
//! vector in, class index out.

mod gbtree;

pub use gbtree::GbTreeModel;
