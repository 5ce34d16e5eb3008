//! fsh operations: path resolution, filesystem verbs, and command dispatch.
//!
//! Everything here is synchronous and single-threaded. The only mutable
//! state is the [`Session`] working directory, threaded explicitly through
//! the [`Dispatcher`] into each operation.

pub mod dispatch;
pub mod error;
pub mod ops;
pub mod resolve;
pub mod session;
pub mod verb;

pub use dispatch::{Command, Dispatcher, Reply};
pub use error::FsError;
pub use ops::{DirChange, Listing};
pub use resolve::{resolve, Resolved};
pub use session::Session;
pub use verb::Verb;
