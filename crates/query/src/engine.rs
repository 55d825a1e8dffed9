//! Query execution against a [`RecordStore`].
//!
//! Evaluation order:
//! 1. scan the base entity and keep records matching every base condition
//! 2. join each link entity; one row per linked match, inner joins drop
//!    unmatched rows, outer joins keep them without linked columns
//! 3. apply conditions that target a link alias, against the matched
//!    linked record
//! 4. order, truncate to `top_count`, project

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crmsim_core::{AliasedValue, ColumnSet, Entity, Error, Result, Value};
use crmsim_storage::RecordStore;
use tracing::debug;

use crate::compare::{compare, evaluate, keys_match};
use crate::expression::{
    ConditionExpression, JoinOperator, LinkEntity, OrderType, QueryExpression,
};

/// Linked columns of one result row, keyed `<alias>.<attribute>`.
type LinkedColumns = BTreeMap<String, Value>;

/// One combination of linked matches for a base record.
#[derive(Clone, Default)]
struct Joined<'a> {
    columns: LinkedColumns,
    /// Matched linked record per alias
    records: BTreeMap<String, &'a Entity>,
}

impl<'a> Joined<'a> {
    fn absorb(&mut self, other: &Joined<'a>) {
        self.columns
            .extend(other.columns.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.records
            .extend(other.records.iter().map(|(k, v)| (k.clone(), *v)));
    }

    /// Value of `condition`'s attribute on the record matched under its alias.
    fn aliased_value(&self, condition: &ConditionExpression) -> Option<Value> {
        let alias = condition.entity_name.as_deref()?;
        self.records
            .get(alias)
            .and_then(|record| record.attribute(&condition.attribute_name))
            .map(|v| v.into_owned())
    }
}

struct Row<'a> {
    base: &'a Entity,
    linked: Joined<'a>,
}

impl Row<'_> {
    fn value(&self, name: &str) -> Option<Value> {
        if let Some(v) = self.linked.columns.get(name) {
            return Some(v.clone());
        }
        self.base.attribute(name).map(|v| v.into_owned())
    }
}

/// Run a query and return the matching records.
pub fn execute(store: &RecordStore, query: &QueryExpression) -> Result<Vec<Entity>> {
    validate(query)?;

    let (base_criteria, aliased_criteria): (Vec<_>, Vec<_>) = query
        .criteria
        .iter()
        .partition(|c| c.entity_name.is_none());

    let mut rows = Vec::new();
    for base in store.scan(&query.entity_name) {
        if !matches_all(base, base_criteria.iter().copied()) {
            continue;
        }
        for linked in join_links(store, base, &query.link_entities, Joined::default()) {
            if aliased_criteria
                .iter()
                .all(|c| evaluate(linked.aliased_value(c).as_ref(), c))
            {
                rows.push(Row { base, linked });
            }
        }
    }

    if !query.orders.is_empty() {
        rows.sort_by(|a, b| {
            for order in &query.orders {
                let ordering = order_values(
                    a.value(&order.attribute_name).as_ref(),
                    b.value(&order.attribute_name).as_ref(),
                );
                let ordering = match order.order_type {
                    OrderType::Ascending => ordering,
                    OrderType::Descending => ordering.reverse(),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });
    }

    if let Some(top) = query.top_count {
        rows.truncate(top);
    }

    debug!(entity = %query.entity_name, rows = rows.len(), "query executed");

    Ok(rows
        .into_iter()
        .map(|row| {
            let mut entity = row.base.project(&query.column_set);
            entity.attributes.extend(row.linked.columns);
            entity
        })
        .collect())
}

/// Check operand counts and names before touching the store.
pub fn validate(query: &QueryExpression) -> Result<()> {
    if query.entity_name.trim().is_empty() {
        return Err(Error::invalid_input("query entity name must not be empty"));
    }
    let aliases = collect_aliases(&query.link_entities);
    for condition in &query.criteria {
        validate_condition(condition)?;
        if let Some(alias) = &condition.entity_name {
            if !aliases.contains(&alias.as_str()) {
                return Err(Error::invalid_input(format!(
                    "condition on '{}' refers to unknown link alias '{}'",
                    condition.attribute_name, alias
                )));
            }
        }
    }
    validate_links(&query.link_entities)
}

fn validate_links(links: &[LinkEntity]) -> Result<()> {
    for link in links {
        if link.link_to_entity_name.trim().is_empty()
            || link.link_from_attribute_name.is_empty()
            || link.link_to_attribute_name.is_empty()
        {
            return Err(Error::invalid_input(format!(
                "link from '{}' is missing its entity or join attributes",
                link.link_from_entity_name
            )));
        }
        for condition in &link.link_criteria {
            validate_condition(condition)?;
        }
        validate_links(&link.link_entities)?;
    }
    Ok(())
}

fn validate_condition(condition: &ConditionExpression) -> Result<()> {
    let count = condition.values.len();
    let ok = match condition.operator.arity() {
        Some(expected) => count == expected,
        None => count > 0,
    };
    if !ok {
        return Err(Error::invalid_input(format!(
            "operator {:?} on '{}' cannot take {} value(s)",
            condition.operator, condition.attribute_name, count
        )));
    }
    Ok(())
}

fn collect_aliases(links: &[LinkEntity]) -> Vec<&str> {
    let mut aliases = Vec::new();
    for link in links {
        aliases.push(link.effective_alias());
        aliases.extend(collect_aliases(&link.link_entities));
    }
    aliases
}

fn matches_all<'c>(
    entity: &Entity,
    mut criteria: impl Iterator<Item = &'c ConditionExpression>,
) -> bool {
    criteria.all(|c| evaluate(entity.attribute(&c.attribute_name).as_deref(), c))
}

/// Join `links` from `outer`, starting from `seed`.
///
/// Returns one entry per combination of matches. An inner link without
/// matches yields no rows; an outer one passes rows through.
fn join_links<'a>(
    store: &'a RecordStore,
    outer: &Entity,
    links: &[LinkEntity],
    seed: Joined<'a>,
) -> Vec<Joined<'a>> {
    let mut partials = vec![seed];
    for link in links {
        let matches = link_matches(store, outer, link);
        let mut next = Vec::new();
        for partial in partials {
            if matches.is_empty() {
                if link.join_operator == JoinOperator::LeftOuter {
                    next.push(partial);
                }
                continue;
            }
            for m in &matches {
                let mut combined = partial.clone();
                combined.absorb(m);
                next.push(combined);
            }
        }
        partials = next;
    }
    partials
}

fn link_matches<'a>(store: &'a RecordStore, outer: &Entity, link: &LinkEntity) -> Vec<Joined<'a>> {
    let Some(from) = outer.attribute(&link.link_from_attribute_name) else {
        return Vec::new();
    };

    let mut matches = Vec::new();
    for candidate in store.scan(&link.link_to_entity_name) {
        let joined = candidate
            .attribute(&link.link_to_attribute_name)
            .is_some_and(|to| keys_match(link.key_match, &from, &to));
        if !joined || !matches_all(candidate, link.link_criteria.iter()) {
            continue;
        }
        let mut own = Joined {
            columns: project_linked(candidate, link),
            records: BTreeMap::new(),
        };
        own.records.insert(link.effective_alias().to_string(), candidate);
        matches.extend(join_links(store, candidate, &link.link_entities, own));
    }
    matches
}

fn project_linked(linked: &Entity, link: &LinkEntity) -> LinkedColumns {
    let alias = link.effective_alias();
    let aliased = |name: &str, value: Value| {
        (
            format!("{}.{}", alias, name),
            Value::from(AliasedValue::new(linked.logical_name.clone(), name, value)),
        )
    };

    match &link.columns {
        ColumnSet::All => linked
            .attributes
            .iter()
            .map(|(name, value)| aliased(name.as_str(), value.clone()))
            .collect(),
        ColumnSet::Columns(names) => names
            .iter()
            .filter_map(|name| {
                linked
                    .attribute(name)
                    .map(|value| aliased(name.as_str(), value.into_owned()))
            })
            .collect(),
    }
}

/// Absent values sort before present ones; incomparable values are equal.
fn order_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare(a, b).unwrap_or(Ordering::Equal),
    }
}
