//! Presentation grouping of template parameters
//
// Groups exist purely to organize the CloudFormation console's input form;
// they have no effect on resource semantics.

use indexmap::IndexMap;

use crate::Parameter;

/// Ordered mapping from a presentation heading to parameter logical ids
///
/// One registry per stack instantiation. Sharing a registry across stacks
/// would mix their group membership, so the stack owns its registry and
/// threads it through the declaration sequence by `&mut` - never as
/// ambient static state.
#[derive(Debug, Default)]
pub struct ParameterGroupRegistry {
    groups: IndexMap<String, Vec<String>>,
}

impl ParameterGroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `parameters` under `label`.
    ///
    /// Ids from this call are placed before ids from earlier calls on the
    /// same label; downstream presentation order depends on that.
    /// Parameters with an empty logical id are dropped silently.
    pub fn register(&mut self, label: &str, parameters: &[&Parameter]) {
        let mut ids: Vec<String> = parameters
            .iter()
            .map(|p| p.logical_id().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        let entry = self.groups.entry(label.to_string()).or_default();
        // New ids first, previously registered ids after.
        ids.append(entry);
        *entry = ids;
    }

    /// Rebuild the exported group list, labels in first-registration order.
    ///
    /// Recomputed from scratch on every call; registration is infrequent
    /// and the data set is bounded by the declared parameter count.
    pub fn export_groups(&self) -> Vec<(String, Vec<String>)> {
        self.groups
            .iter()
            .map(|(label, ids)| (label.clone(), ids.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
