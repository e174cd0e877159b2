//! Type descriptors: the introspection layer behind the mapper.
//!
//! A [`TypeDescriptor`] is the ordered list of a struct's mappable fields
//! plus the type's identity and a thunk producing its default value in the
//! serialised layer. Descriptors are built once per type inside a
//! `LazyLock` static emitted by the `Mappable` derive, so repeated lookups
//! cost a pointer read.

use std::any::TypeId;

use serde_json::Value;

use crate::Mappable;
use crate::classify::{FieldClass, FieldKind};
use crate::error::{MapError, MapResult};

/// Thunk yielding the memoised descriptor of a mappable type.
///
/// Stored as a function pointer rather than a resolved reference so that a
/// type may (transitively) contain fields of its own type without the
/// descriptor initialiser re-entering itself.
pub type DescriptorThunk = fn() -> &'static TypeDescriptor;

/// Immutable description of one mappable type.
#[derive(Debug)]
pub struct TypeDescriptor {
    type_name: &'static str,
    type_id: TypeId,
    default_value: fn() -> MapResult<Value>,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Build the descriptor for `T` from its field list.
    ///
    /// Called by derive-generated code; the field order is the declaration
    /// order of the struct.
    #[must_use]
    pub fn of<T: Mappable>(type_name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            type_name,
            type_id: TypeId::of::<T>(),
            default_value: serialize_default::<T>,
            fields,
        }
    }

    /// Short name of the described type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Identity of the described type.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The described fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by exact name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Serialised form of the type's default value.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Serialize`] when the default value cannot be
    /// represented in the value layer.
    pub fn default_value(&self) -> MapResult<Value> {
        (self.default_value)()
    }
}

fn serialize_default<T: Mappable>() -> MapResult<Value> {
    serde_json::to_value(T::default()).map_err(MapError::serialize)
}

/// Immutable description of one field of a mappable type.
#[derive(Debug)]
pub struct FieldDescriptor {
    name: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    kind: FieldKind,
    readable: bool,
    writable: bool,
    nested: Option<DescriptorThunk>,
}

impl FieldDescriptor {
    /// Describe a readable, writable field of type `T`.
    #[must_use]
    pub fn of<T: FieldClass>(name: &'static str) -> Self {
        Self {
            name,
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            kind: T::KIND,
            readable: true,
            writable: true,
            nested: T::nested(),
        }
    }

    /// Mark the field as not writable; it is never a mapping destination.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Mark the field as not readable; it is never a mapping source.
    #[must_use]
    pub const fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    /// The field's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Full path name of the field's declared type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Identity of the field's declared type.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Leaf or complex classification of the field's type.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether the field may act as a mapping source.
    #[must_use]
    pub const fn readable(&self) -> bool {
        self.readable
    }

    /// Whether the field may act as a mapping destination.
    #[must_use]
    pub const fn writable(&self) -> bool {
        self.writable
    }

    /// Descriptor of the field's type when it is itself mappable.
    #[must_use]
    pub fn nested_descriptor(&self) -> Option<&'static TypeDescriptor> {
        self.nested.map(|thunk| thunk())
    }
}
