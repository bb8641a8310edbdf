//! Endpoint sets, one per API namespace

pub mod full_access;
pub mod public;
pub mod read_only;

pub use full_access::FullAccessEndpoints;
pub use public::PublicEndpoints;
pub use read_only::ReadOnlyEndpoints;
