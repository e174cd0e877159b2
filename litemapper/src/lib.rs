//! A small object-to-object property mapper.
//!
//! Given a source value and a destination type, `litemapper` builds a fresh
//! destination instance whose fields are populated from the source's fields
//! by exact name and type matching, with optional per-field transforms,
//! per-field exclusion, and recursive mapping of nested object graphs.
//! Unmatched destination fields keep their default values; mismatched leaf
//! types are never coerced.
//!
//! Types opt in with [`derive@Mappable`], which records the struct's field
//! descriptors once per process; the per-pair field correspondences are
//! likewise computed once and cached. The actual copying happens in the
//! [`serde_json::Value`] layer, so the only requirements on a mapped type
//! are `Serialize`, `DeserializeOwned` and `Default`.
//!
//! ```
//! use litemapper::{Mappable, MapperConfig, map_with};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize, Mappable)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! #[derive(Debug, Default, Serialize, Deserialize, Mappable)]
//! struct PersonDto {
//!     full_name: String,
//!     age: u32,
//! }
//!
//! let mut config = MapperConfig::new();
//! config
//!     .create_map::<Person, PersonDto>()
//!     .for_member("full_name", |person: &Person| person.name.clone())?;
//!
//! let person = Person {
//!     name: "Ada".to_owned(),
//!     age: 36,
//! };
//! let dto: PersonDto = map_with(&person, &config)?;
//! assert_eq!(dto.full_name, "Ada");
//! assert_eq!(dto.age, 36);
//! # Ok::<(), litemapper::MapError>(())
//! ```

pub use litemapper_macros::Mappable;

mod cache;
mod classify;
mod config;
mod descriptor;
mod engine;
mod error;

pub use cache::{Binding, Correspondence, resolve};
pub use classify::{FieldClass, FieldKind};
pub use config::{MapperConfig, RuleBuilder};
pub use descriptor::{DescriptorThunk, FieldDescriptor, TypeDescriptor};
pub use engine::{map, map_value, map_with};
pub use error::{MapError, MapResult};

/// Trait implemented (via [`derive@Mappable`]) by structs that take part in
/// mapping, as source, destination or both.
///
/// The supertraits carry the mapper's requirements: `Serialize` and
/// `DeserializeOwned` let values cross the dynamic layer, and `Default` is
/// what makes the type default-constructible as a destination.
pub trait Mappable:
    serde::Serialize + serde::de::DeserializeOwned + Default + 'static
{
    /// The memoised descriptor of this type's mappable fields.
    ///
    /// Building the descriptor happens once per process; every later call
    /// returns the same reference.
    fn descriptor() -> &'static TypeDescriptor;
}
