//! Planned role positions produced by the ordering reconciler.

/// Where one role was when planned and where it should end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePlacement {
    pub role_id: u64,
    pub current: u16,
    pub target: u16,
}

/// Target positions for every role below the reserved top of the hierarchy.
///
/// Placements are listed highest target first. Applying them in that order means a
/// move only ever shifts roles that have not been placed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleOrderPlan {
    pub placements: Vec<RolePlacement>,
}

impl RoleOrderPlan {
    /// Whether every role already sits at its target.
    pub fn is_settled(&self) -> bool {
        self.placements.iter().all(|p| p.current == p.target)
    }

    /// Target position of `role_id`, if the role is part of the plan.
    pub fn target_of(&self, role_id: u64) -> Option<u16> {
        self.placements
            .iter()
            .find(|p| p.role_id == role_id)
            .map(|p| p.target)
    }
}
