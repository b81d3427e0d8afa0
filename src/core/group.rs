//! Module grouping
//!
//! Buckets variables by declaring module and splits each module's variables
//! into required and optional lists. Order is always the order of the input;
//! nothing is sorted or de-duplicated.

use crate::domain::{ConfigVariable, ModuleGroup, ModuleKey};

/// A module's variables split by requirement, each bucket in input order
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedGroup<'a> {
    /// Declaring module
    pub key: &'a ModuleKey,
    /// Variables that must be supplied
    pub required: Vec<&'a ConfigVariable>,
    /// Variables with a default in source
    pub optional: Vec<&'a ConfigVariable>,
}

/// Splits a group into required and optional buckets
pub fn partition(group: &ModuleGroup) -> PartitionedGroup<'_> {
    let (required, optional): (Vec<_>, Vec<_>) =
        group.variables.iter().partition(|v| v.required);
    PartitionedGroup {
        key: &group.key,
        required,
        optional,
    }
}

/// Builds module groups from `(module, variable)` pairs
///
/// Modules appear in the order they are first seen; variables keep their
/// relative order within each module.
///
/// # Examples
///
/// ```
/// use cfgtemplate::core::group_by_module;
/// use cfgtemplate::domain::{ConfigVariable, ModuleKey, SimpleKind};
///
/// let a = ModuleKey::new("org", "a").unwrap();
/// let b = ModuleKey::new("org", "b").unwrap();
/// let groups = group_by_module(vec![
///     (b.clone(), ConfigVariable::required("x", SimpleKind::Int)),
///     (a.clone(), ConfigVariable::required("y", SimpleKind::Int)),
///     (b.clone(), ConfigVariable::required("z", SimpleKind::Int)),
/// ]);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].key, b);
/// assert_eq!(groups[0].variables.len(), 2);
/// ```
pub fn group_by_module<I>(pairs: I) -> Vec<ModuleGroup>
where
    I: IntoIterator<Item = (ModuleKey, ConfigVariable)>,
{
    let mut groups: Vec<ModuleGroup> = Vec::new();
    for (key, variable) in pairs {
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.variables.push(variable),
            None => groups.push(ModuleGroup::new(key).with_variable(variable)),
        }
    }
    groups
}
