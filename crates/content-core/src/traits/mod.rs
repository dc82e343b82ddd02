//! Repository traits (ports)

mod repositories;

pub use repositories::{ContentRepository, RepoResult};
