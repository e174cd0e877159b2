//! The recursive mapping engine.
//!
//! The typed entry points serialise the source once, run the whole mapping
//! in the value layer guided by cached correspondences, and deserialise the
//! finished object into the destination type. Per destination field the
//! priority order is: ignore, member transform, cached correspondence
//! (direct copy or recursive map), default value.

use serde_json::{Map, Value};

use crate::Mappable;
use crate::cache::{self, Binding, Correspondence};
use crate::config::{MapperConfig, MappingRule};
use crate::descriptor::TypeDescriptor;
use crate::error::{MapError, MapResult};

/// Map `source` into a freshly constructed `D` with no configuration.
///
/// Fields of `D` with no same-named, same-typed (or recursively mappable)
/// counterpart in `S` are left at `D`'s default values.
///
/// # Errors
///
/// Returns [`MapError`] when the source cannot cross the value layer or the
/// mapped object cannot be deserialised into `D`.
pub fn map<S: Mappable, D: Mappable>(source: &S) -> MapResult<D> {
    map_inner(source, None)
}

/// Map `source` into a freshly constructed `D`, honouring the rules
/// registered in `config` at every recursion depth.
///
/// # Errors
///
/// Returns [`MapError`] when the source cannot cross the value layer, a
/// member transform fails, or the mapped object cannot be deserialised
/// into `D`. Transform failures propagate unwrapped.
pub fn map_with<S: Mappable, D: Mappable>(source: &S, config: &MapperConfig) -> MapResult<D> {
    map_inner(source, Some(config))
}

fn map_inner<S: Mappable, D: Mappable>(source: &S, config: Option<&MapperConfig>) -> MapResult<D> {
    let value = serde_json::to_value(source).map_err(MapError::serialize)?;
    let mapped = map_value(&value, S::descriptor(), D::descriptor(), config)?;
    serde_json::from_value(mapped).map_err(MapError::deserialize)
}

/// Map an already-serialised `source` value between two described types.
///
/// This is the dynamic layer beneath [`map`] and [`map_with`]; the
/// destination is returned as an object value ready to be deserialised.
///
/// # Errors
///
/// Returns [`MapError::NullSource`] for a null source — nothing is
/// constructed — and [`MapError::NotAnObject`] for any other non-object
/// source. Transform failures propagate unwrapped.
pub fn map_value(
    source: &Value,
    source_desc: &'static TypeDescriptor,
    dest_desc: &'static TypeDescriptor,
    config: Option<&MapperConfig>,
) -> MapResult<Value> {
    if source.is_null() {
        return Err(MapError::NullSource);
    }
    let Value::Object(source_fields) = source else {
        return Err(MapError::not_an_object(source_desc.type_name()));
    };
    tracing::trace!(
        source = source_desc.type_name(),
        dest = dest_desc.type_name(),
        "mapping value"
    );

    let mut dest = default_object(dest_desc)?;
    let correspondences = cache::resolve(source_desc, dest_desc);
    let rule = config.and_then(|c| c.rule_for(source_desc.type_id(), dest_desc.type_id()));

    apply_correspondences(&mut dest, source, source_fields, &correspondences, rule, config)?;
    if let Some(active) = rule {
        apply_uncovered_transforms(&mut dest, source, dest_desc, &correspondences, active)?;
    }
    Ok(Value::Object(dest))
}

/// First pass: walk the cached correspondence list in order.
fn apply_correspondences(
    dest: &mut Map<String, Value>,
    source: &Value,
    source_fields: &Map<String, Value>,
    correspondences: &[Correspondence],
    rule: Option<&MappingRule>,
    config: Option<&MapperConfig>,
) -> MapResult<()> {
    for correspondence in correspondences {
        let name = correspondence.field();
        if rule.is_some_and(|active| active.ignores(name)) {
            continue;
        }
        if let Some(transform) = rule.and_then(|active| active.transform(name)) {
            dest.insert(name.to_owned(), transform(source)?);
            continue;
        }
        let Some(field_value) = source_fields.get(name) else {
            continue;
        };
        match correspondence.binding() {
            Binding::Direct => {
                dest.insert(name.to_owned(), field_value.clone());
            }
            Binding::Nested {
                source: nested_source,
                dest: nested_dest,
            } => {
                // An absent nested source leaves the destination field at
                // its default, not a default-constructed empty object.
                if !field_value.is_null() {
                    let mapped = map_value(field_value, nested_source, nested_dest, config)?;
                    dest.insert(name.to_owned(), mapped);
                }
            }
        }
    }
    Ok(())
}

/// Second pass: transforms may populate writable destination fields that
/// have no same-named source counterpart. Fields covered by a
/// correspondence were handled once in the first pass and are never
/// revisited; ignoring still wins here.
fn apply_uncovered_transforms(
    dest: &mut Map<String, Value>,
    source: &Value,
    dest_desc: &TypeDescriptor,
    correspondences: &[Correspondence],
    rule: &MappingRule,
) -> MapResult<()> {
    for field in dest_desc.fields().iter().filter(|field| field.writable()) {
        let name = field.name();
        if correspondences.iter().any(|c| c.field() == name) {
            continue;
        }
        if rule.ignores(name) {
            continue;
        }
        if let Some(transform) = rule.transform(name) {
            dest.insert(name.to_owned(), transform(source)?);
        }
    }
    Ok(())
}

fn default_object(descriptor: &TypeDescriptor) -> MapResult<Map<String, Value>> {
    match descriptor.default_value()? {
        Value::Object(map) => Ok(map),
        _ => Err(MapError::not_an_object(descriptor.type_name())),
    }
}

#[cfg(test)]
mod tests {
    //! Engine edge cases exercised at the value layer; the typed surface is
    //! covered by the integration tests.

    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::{map, map_value};
    use crate::Mappable;
    use crate::error::MapError;

    #[derive(Debug, Default, Serialize, Deserialize, Mappable)]
    #[mappable(crate = "crate")]
    struct Reading {
        celsius: f64,
        sensor: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize, Mappable)]
    #[mappable(crate = "crate")]
    struct ReadingDto {
        celsius: f64,
        label: String,
    }

    #[test]
    fn null_source_is_a_precondition_violation() {
        let err = map_value(
            &serde_json::Value::Null,
            Reading::descriptor(),
            ReadingDto::descriptor(),
            None,
        )
        .expect_err("null source must be rejected");
        assert!(matches!(err, MapError::NullSource));
    }

    #[test]
    fn non_object_source_is_rejected() {
        let err = map_value(
            &json!([1, 2, 3]),
            Reading::descriptor(),
            ReadingDto::descriptor(),
            None,
        )
        .expect_err("array source must be rejected");
        assert!(matches!(err, MapError::NotAnObject { .. }));
    }

    #[test]
    fn unmatched_fields_keep_destination_defaults() {
        let reading = Reading {
            celsius: 21.5,
            sensor: "attic".to_owned(),
        };
        let dto: ReadingDto = map(&reading).expect("maps");
        assert!((dto.celsius - 21.5).abs() < f64::EPSILON);
        assert_eq!(dto.label, "");
    }

    #[test]
    fn value_layer_output_is_a_complete_object() {
        let value = json!({"celsius": 3.25, "sensor": "cellar"});
        let mapped = map_value(
            &value,
            Reading::descriptor(),
            ReadingDto::descriptor(),
            None,
        )
        .expect("maps");
        assert_eq!(mapped, json!({"celsius": 3.25, "label": ""}));
    }

    #[test]
    fn source_value_is_not_mutated() {
        let value = json!({"celsius": 9.0, "sensor": "roof"});
        let before = value.clone();
        let _ = map_value(
            &value,
            Reading::descriptor(),
            ReadingDto::descriptor(),
            None,
        )
        .expect("maps");
        assert_eq!(value, before);
    }
}
