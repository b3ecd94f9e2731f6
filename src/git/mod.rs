//! Git operations.
//!
//! The [`RepositoryPort`] trait is everything page-URL building needs from a
//! repository. [`GitRepository`] implements it with git2; tests use
//! [`FakeRepository`](crate::testing::FakeRepository).

mod branch;
mod port;
mod repository;

pub use branch::{DEFAULT_BRANCH, LocalBranch, choose_local_branch};
pub use port::RepositoryPort;
pub use repository::{GitRepository, choose_url};
