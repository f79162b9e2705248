//! Post-extraction processing.
//!
//! - [`reconcile()`]: merge extracted districts with the registry
//! - [`assemble()`]: sort and wrap everything into a [`crate::types::Payload`]
//! - [`query`]: read helpers used by API handlers (`Payload::schools_in_district`, ...)
//!
//! ## Example
//!
//! ```rust
//! use schools_map_ingest::processing::{assemble, reconcile};
//! use schools_map_ingest::registry::{DistrictRegistry, RegistryEntry};
//! use schools_map_ingest::types::District;
//!
//! let registry = DistrictRegistry::from_entries(vec![
//!     RegistryEntry { name: "North".into(), id: 2 },
//!     RegistryEntry { name: "South".into(), id: 1 },
//! ])
//! .unwrap();
//!
//! let observed = vec![District {
//!     id: None,
//!     name: "North".into(),
//!     students: Some(120),
//!     teachers: Some(9),
//!     workers: Some(14),
//! }];
//!
//! let payload = assemble(Vec::new(), reconcile(observed, &registry), Vec::new());
//! let names: Vec<_> = payload.districts.iter().map(|d| d.name.as_str()).collect();
//! assert_eq!(names, vec!["South", "North"]);
//! assert_eq!(payload.districts[1].id, Some(2));
//! ```

pub mod assemble;
pub mod query;
pub mod reconcile;

pub use assemble::{assemble, sort_districts};
pub use reconcile::reconcile;
