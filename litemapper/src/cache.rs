//! Field-correspondence resolution and the process-wide pair cache.
//!
//! For every ordered `(source, destination)` type pair the resolver walks
//! the two descriptors once and records, per writable destination field,
//! whether the same-named source field is copied verbatim or mapped
//! recursively. The result is immutable and cached for the lifetime of the
//! process; keys are never removed.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::descriptor::TypeDescriptor;

type PairKey = (TypeId, TypeId);
type PairMap = HashMap<PairKey, Arc<[Correspondence]>>;

static PAIR_CACHE: LazyLock<RwLock<PairMap>> = LazyLock::new(|| RwLock::new(HashMap::new()));

/// How one destination field relates to its same-named source field.
#[derive(Clone, Copy, Debug)]
pub enum Binding {
    /// The two field types are identical; the value is copied verbatim.
    Direct,
    /// Both field types are complex; the value is mapped recursively.
    Nested {
        /// Descriptor of the source field's type.
        source: &'static TypeDescriptor,
        /// Descriptor of the destination field's type.
        dest: &'static TypeDescriptor,
    },
}

/// One resolved destination-field/source-field relationship.
#[derive(Clone, Copy, Debug)]
pub struct Correspondence {
    field: &'static str,
    binding: Binding,
}

impl Correspondence {
    /// Name shared by the destination and source fields.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Whether the field is copied or mapped recursively.
    #[must_use]
    pub const fn binding(&self) -> Binding {
        self.binding
    }
}

/// Resolve the correspondence list for an ordered type pair.
///
/// The list depends only on the two descriptors, never on instance data or
/// on any registered configuration, and `(A, B)` and `(B, A)` are distinct
/// cache entries. Concurrent first calls for the same pair may compute
/// redundantly, but exactly one result is stored and every caller observes
/// that complete entry.
#[must_use]
pub fn resolve(
    source: &'static TypeDescriptor,
    dest: &'static TypeDescriptor,
) -> Arc<[Correspondence]> {
    let key = (source.type_id(), dest.type_id());
    {
        let cache = PAIR_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(found) = cache.get(&key) {
            return Arc::clone(found);
        }
    }

    // Computed outside the write lock; the first insert wins the race.
    let computed: Arc<[Correspondence]> = compute(source, dest).into();
    tracing::debug!(
        source = source.type_name(),
        dest = dest.type_name(),
        count = computed.len(),
        "resolved field correspondences"
    );
    let mut cache = PAIR_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(cache.entry(key).or_insert(computed))
}

pub(crate) fn compute(source: &TypeDescriptor, dest: &TypeDescriptor) -> Vec<Correspondence> {
    let mut correspondences = Vec::new();
    for dest_field in dest.fields().iter().filter(|field| field.writable()) {
        let Some(source_field) = source
            .field(dest_field.name())
            .filter(|field| field.readable())
        else {
            continue;
        };
        if source_field.type_id() == dest_field.type_id() {
            correspondences.push(Correspondence {
                field: dest_field.name(),
                binding: Binding::Direct,
            });
        } else if source_field.kind().is_complex() && dest_field.kind().is_complex() {
            // Recursing needs descriptors on both sides; the destination
            // one doubles as the default-constructibility witness. A pair
            // without them is skipped, never an error.
            if let (Some(nested_source), Some(nested_dest)) = (
                source_field.nested_descriptor(),
                dest_field.nested_descriptor(),
            ) {
                correspondences.push(Correspondence {
                    field: dest_field.name(),
                    binding: Binding::Nested {
                        source: nested_source,
                        dest: nested_dest,
                    },
                });
            }
        }
        // Mismatched leaf types are never coerced: no correspondence.
    }
    correspondences
}
