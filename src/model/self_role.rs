//! Results of reconciling a member's self-assigned roles.

/// A single change to a member's roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    Grant(u64),
    Revoke(u64),
}

/// Outcome of a self-role selection.
///
/// When a Discord call fails the reconciler stops; `pending` then holds the change that
/// failed followed by the ones that were never attempted. A stop before the category
/// role was checked sets `category_skipped`, since that change is not known yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfRoleUpdate {
    pub applied: Vec<RoleChange>,
    pub pending: Vec<RoleChange>,
    pub failure: Option<String>,
    pub category_skipped: bool,
}

impl SelfRoleUpdate {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Role ids from `changes` that are grants.
    pub fn granted(changes: &[RoleChange]) -> Vec<u64> {
        changes
            .iter()
            .filter_map(|c| match c {
                RoleChange::Grant(id) => Some(*id),
                RoleChange::Revoke(_) => None,
            })
            .collect()
    }

    /// Role ids from `changes` that are revocations.
    pub fn revoked(changes: &[RoleChange]) -> Vec<u64> {
        changes
            .iter()
            .filter_map(|c| match c {
                RoleChange::Revoke(id) => Some(*id),
                RoleChange::Grant(_) => None,
            })
            .collect()
    }
}
