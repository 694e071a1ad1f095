//! Content registry: four fixed catalogs of addressable entries.
//!
//! Each catalog (projects, education, work, volunteer) is a table of
//! records fixed at compile time, addressed by a canonical slug plus
//! optional aliases. Resolution is a pure read over the tables:
//!
//! - [`resolve_slug`] canonicalizes an identifier (identity fallback when
//!   nothing matches),
//! - [`get_entry`] returns the record or `None` for NotFound,
//! - [`list_entries`] returns the table in declaration order.
//!
//! Aliases may collide across sibling entries; the first entry in
//! declaration order wins, deterministically.

pub mod catalog;
pub mod education;
pub mod entry;
pub mod projects;
pub mod volunteer;
pub mod work;

pub use catalog::{get_entry, list_entries, list_slugs, resolve_slug, Catalog, EntryRef};
pub use education::EducationItem;
pub use entry::{Addressable, Links};
pub use projects::{Kpi, Project, Visual, VisualIcon};
pub use volunteer::VolunteerItem;
pub use work::WorkItem;
