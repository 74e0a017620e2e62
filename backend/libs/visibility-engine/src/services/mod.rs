//! Business logic layer: fact loading and the decision service family.

pub mod accounts;
pub mod facts;
pub mod listings;
pub mod share_links;
pub mod visibility;

pub use facts::load_visibility_facts;
pub use listings::VisibleListing;
pub use visibility::VisibilityService;
