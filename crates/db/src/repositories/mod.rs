//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod page_repo;
pub mod publication_repo;
pub mod session_repo;
pub mod user_repo;
pub mod work_repo;

pub use page_repo::PageRepo;
pub use publication_repo::PublicationRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use work_repo::WorkRepo;
