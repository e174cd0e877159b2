//! Caller-owned mapping configuration.
//!
//! A [`MapperConfig`] holds, per ordered source/destination type pair, the
//! user-declared overrides: destination fields to ignore and per-member
//! transform functions. The registry is consulted at every recursion depth
//! of a mapping call, so rules registered for nested pairs apply inside
//! nested maps. It is safe to share for concurrent lookup once populated;
//! mutating it while other threads map is the caller's race to avoid.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::Mappable;
use crate::error::{MapError, MapResult};

pub(crate) type Transform = Box<dyn Fn(&Value) -> MapResult<Value> + Send + Sync>;

/// Registry of per-pair mapping rules.
#[derive(Default)]
pub struct MapperConfig {
    rules: HashMap<(TypeId, TypeId), MappingRule>,
}

impl MapperConfig {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mapping for the `S` to `D` pair and return its rule
    /// handle.
    ///
    /// Registering the same pair again discards the earlier rule: last
    /// write wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use litemapper::{Mappable, MapperConfig};
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Debug, Default, Serialize, Deserialize, Mappable)]
    /// struct Person {
    ///     name: String,
    /// }
    ///
    /// #[derive(Debug, Default, Serialize, Deserialize, Mappable)]
    /// struct PersonDto {
    ///     name: String,
    ///     initials: String,
    /// }
    ///
    /// let mut config = MapperConfig::new();
    /// config
    ///     .create_map::<Person, PersonDto>()
    ///     .for_member("initials", |person: &Person| {
    ///         person.name.chars().take(1).collect::<String>()
    ///     })?;
    /// # Ok::<(), litemapper::MapError>(())
    /// ```
    pub fn create_map<S: Mappable, D: Mappable>(&mut self) -> RuleBuilder<'_, S, D> {
        let key = (TypeId::of::<S>(), TypeId::of::<D>());
        let rule = self
            .rules
            .entry(key)
            .and_modify(|existing| *existing = MappingRule::default())
            .or_default();
        RuleBuilder {
            rule,
            types: PhantomData,
        }
    }

    pub(crate) fn rule_for(&self, source: TypeId, dest: TypeId) -> Option<&MappingRule> {
        self.rules.get(&(source, dest))
    }
}

impl fmt::Debug for MapperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperConfig")
            .field("pairs", &self.rules.len())
            .finish()
    }
}

/// Overrides registered for one source/destination pair.
#[derive(Default)]
pub(crate) struct MappingRule {
    ignored: HashSet<String>,
    transforms: HashMap<String, Transform>,
}

impl MappingRule {
    pub(crate) fn ignores(&self, field: &str) -> bool {
        self.ignored.contains(field)
    }

    pub(crate) fn transform(&self, field: &str) -> Option<&Transform> {
        self.transforms.get(field)
    }
}

impl fmt::Debug for MappingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut transforms: Vec<_> = self.transforms.keys().collect();
        transforms.sort();
        f.debug_struct("MappingRule")
            .field("ignored", &self.ignored)
            .field("transforms", &transforms)
            .finish()
    }
}

/// Typed handle onto one pair's mapping rule, returned by
/// [`MapperConfig::create_map`].
///
/// Every method validates the named destination field against `D`'s
/// descriptor and fails fast at configuration time; a selector that does
/// not denote a writable field of `D` is never a silent no-op.
#[derive(Debug)]
pub struct RuleBuilder<'config, S, D> {
    rule: &'config mut MappingRule,
    types: PhantomData<fn(&S) -> D>,
}

impl<S: Mappable, D: Mappable> RuleBuilder<'_, S, D> {
    /// Leave `field` at its default value, whatever the source holds.
    ///
    /// Ignoring wins over any transform registered for the same field.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnknownField`] when `field` is not a writable
    /// field of `D`.
    pub fn ignore(self, field: &str) -> MapResult<Self> {
        checked_field::<D>(field)?;
        self.rule.ignored.insert(field.to_owned());
        Ok(self)
    }

    /// Populate `field` from the whole source value via `transform`.
    ///
    /// The transform replaces any previously registered one for the same
    /// field. Its result is assigned without a type check; a mismatch
    /// surfaces only if the final destination cannot absorb the value.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnknownField`] when `field` is not a writable
    /// field of `D`.
    pub fn for_member<F, V>(self, field: &str, transform: F) -> MapResult<Self>
    where
        F: Fn(&S) -> V + Send + Sync + 'static,
        V: Serialize,
    {
        checked_field::<D>(field)?;
        let member = field.to_owned();
        let erased: Transform = Box::new(move |source: &Value| {
            let typed: S = serde_json::from_value(source.clone())
                .map_err(|err| MapError::transform(&member, err))?;
            serde_json::to_value(transform(&typed)).map_err(|err| MapError::transform(&member, err))
        });
        self.rule.transforms.insert(field.to_owned(), erased);
        Ok(self)
    }
}

fn checked_field<D: Mappable>(field: &str) -> MapResult<()> {
    let descriptor = D::descriptor();
    descriptor
        .field(field)
        .filter(|found| found.writable())
        .map(|_| ())
        .ok_or_else(|| MapError::unknown_field(field, descriptor.type_name()))
}

#[cfg(test)]
mod tests {
    //! Registry and rule-builder behaviour.

    use serde::{Deserialize, Serialize};

    use super::MapperConfig;
    use crate::error::MapError;

    #[derive(Debug, Default, Serialize, Deserialize, crate::Mappable)]
    #[mappable(crate = "crate")]
    struct Order {
        reference: String,
        total: u64,
    }

    #[derive(Debug, Default, Serialize, Deserialize, crate::Mappable)]
    #[mappable(crate = "crate")]
    struct OrderDto {
        reference: String,
        total: u64,
    }

    #[test]
    fn unknown_selector_fails_at_configuration_time() {
        let mut config = MapperConfig::new();
        let err = config
            .create_map::<Order, OrderDto>()
            .ignore("grand_total")
            .expect_err("selector must be rejected");
        assert!(matches!(err, MapError::UnknownField { field, .. } if field == "grand_total"));
    }

    #[test]
    fn unknown_transform_selector_fails_at_configuration_time() {
        let mut config = MapperConfig::new();
        let err = config
            .create_map::<Order, OrderDto>()
            .for_member("grand_total", |order: &Order| order.total)
            .expect_err("selector must be rejected");
        assert!(matches!(err, MapError::UnknownField { .. }));
    }

    #[test]
    fn create_map_replaces_the_earlier_rule() {
        let mut config = MapperConfig::new();
        config
            .create_map::<Order, OrderDto>()
            .ignore("total")
            .expect("valid selector");
        config.create_map::<Order, OrderDto>();

        let rule = config
            .rule_for(
                std::any::TypeId::of::<Order>(),
                std::any::TypeId::of::<OrderDto>(),
            )
            .expect("registered rule");
        assert!(!rule.ignores("total"));
    }

    #[test]
    fn rules_are_keyed_by_the_ordered_pair() {
        let mut config = MapperConfig::new();
        config.create_map::<Order, OrderDto>();
        assert!(
            config
                .rule_for(
                    std::any::TypeId::of::<OrderDto>(),
                    std::any::TypeId::of::<Order>(),
                )
                .is_none()
        );
    }

    #[test]
    fn builder_calls_chain() {
        let mut config = MapperConfig::new();
        let chained = config
            .create_map::<Order, OrderDto>()
            .for_member("reference", |order: &Order| order.reference.clone())
            .and_then(|rule| rule.ignore("total"));
        assert!(chained.is_ok());
    }
}
