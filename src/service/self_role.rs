//! Self-role reconciler.
//!
//! Applies a member's selection from a category's picker: unselected self roles are
//! revoked, selected ones granted, and the category's separator role is then granted or
//! revoked so the member holds it exactly when they hold any role of the category.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    data::{role_category::RoleCategoryRepository, self_role_message::SelfRoleMessageRepository},
    discord::DiscordGateway,
    error::AppError,
    model::self_role::{RoleChange, SelfRoleUpdate},
    util::parse::parse_u64_from_string,
};

/// A member's selection from one category's picker.
#[derive(Debug, Clone)]
pub struct SelfRoleSelection {
    /// Separator role of the category.
    pub category_id: u64,
    /// Roles offered by the picker.
    pub self_roles: Vec<u64>,
    /// Every stored role of the category, self-assignable or not.
    pub category_roles: Vec<u64>,
    /// Roles the member picked.
    pub selected: HashSet<u64>,
}

pub struct SelfRoleService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn DiscordGateway,
}

impl<'a> SelfRoleService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn DiscordGateway) -> Self {
        Self { db, gateway }
    }

    /// Applies the values chosen in a self-role select menu.
    ///
    /// Callers must hold the member's self-role lock for the whole call.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the picker was used in
    /// - `user_id` - Member who used the picker
    /// - `custom_id` - Custom id of the select menu
    /// - `values` - Selected option values, which are role ids
    ///
    /// # Returns
    /// - `Ok(SelfRoleUpdate)` - Applied changes, and pending ones if a Discord call failed
    /// - `Err(AppError::NotFound)` - The picker or its category is no longer stored
    /// - `Err(AppError)` - Database failure or the member's roles could not be read
    pub async fn apply_selection(
        &self,
        guild_id: u64,
        user_id: u64,
        custom_id: &str,
        values: &[String],
    ) -> Result<SelfRoleUpdate, AppError> {
        let message = SelfRoleMessageRepository::new(self.db)
            .find_by_custom_id(custom_id)
            .await?
            .ok_or_else(|| AppError::NotFound("This role menu is no longer active".to_string()))?;

        let category = RoleCategoryRepository::new(self.db)
            .get_with_roles(message.role_category_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("This role menu is no longer active".to_string())
            })?;

        let self_roles: Vec<u64> = category.self_roles().map(|role| role.id).collect();

        let mut selected = HashSet::new();
        for value in values {
            let role_id = parse_u64_from_string(value)?;
            if self_roles.contains(&role_id) {
                selected.insert(role_id);
            } else {
                tracing::warn!(
                    "Ignoring selection of role {} which is not a self role of category {}",
                    role_id,
                    category.category.id
                );
            }
        }

        let selection = SelfRoleSelection {
            category_id: category.category.id,
            self_roles,
            category_roles: category.roles.iter().map(|role| role.id).collect(),
            selected,
        };

        reconcile_self_roles(self.gateway, guild_id, user_id, &selection).await
    }
}

/// Brings a member's roles in line with their selection.
///
/// Revokes happen before grants and the category step runs last, each change awaited in
/// turn. Running it twice with the same selection changes nothing the second time.
///
/// # Returns
/// - `Ok(SelfRoleUpdate)` - Applied changes; on a failed Discord call the remaining
///   changes are listed as pending and the failure is recorded
/// - `Err(AppError)` - The member's roles could not be read before any change was made
pub async fn reconcile_self_roles(
    gateway: &dyn DiscordGateway,
    guild_id: u64,
    user_id: u64,
    selection: &SelfRoleSelection,
) -> Result<SelfRoleUpdate, AppError> {
    let held = gateway.member_roles(guild_id, user_id).await?;

    let revokes = selection
        .self_roles
        .iter()
        .filter(|id| !selection.selected.contains(id) && held.contains(id))
        .map(|id| RoleChange::Revoke(*id));
    let grants = selection
        .self_roles
        .iter()
        .filter(|id| selection.selected.contains(id) && !held.contains(id))
        .map(|id| RoleChange::Grant(*id));
    let changes: Vec<RoleChange> = revokes.chain(grants).collect();

    let mut update = SelfRoleUpdate::default();
    if !apply_changes(gateway, guild_id, user_id, &changes, &mut update).await {
        update.category_skipped = true;
        return Ok(update);
    }

    let held = match gateway.member_roles(guild_id, user_id).await {
        Ok(held) => held,
        Err(e) => {
            tracing::warn!("Failed to re-read roles of member {}: {}", user_id, e);
            update.failure = Some(e.to_string());
            update.category_skipped = true;
            return Ok(update);
        }
    };

    let holds_any = selection
        .category_roles
        .iter()
        .any(|id| held.contains(id));
    let holds_category = held.contains(&selection.category_id);

    let category_change = match (holds_any, holds_category) {
        (true, false) => Some(RoleChange::Grant(selection.category_id)),
        (false, true) => Some(RoleChange::Revoke(selection.category_id)),
        _ => None,
    };

    if let Some(change) = category_change {
        apply_changes(gateway, guild_id, user_id, &[change], &mut update).await;
    }

    Ok(update)
}

/// Applies `changes` in order, stopping at the first failure.
///
/// Returns whether every change was applied.
async fn apply_changes(
    gateway: &dyn DiscordGateway,
    guild_id: u64,
    user_id: u64,
    changes: &[RoleChange],
    update: &mut SelfRoleUpdate,
) -> bool {
    for (index, change) in changes.iter().enumerate() {
        let result = match change {
            RoleChange::Grant(role_id) => {
                gateway.add_member_role(guild_id, user_id, *role_id).await
            }
            RoleChange::Revoke(role_id) => {
                gateway.remove_member_role(guild_id, user_id, *role_id).await
            }
        };

        match result {
            Ok(()) => update.applied.push(*change),
            Err(e) => {
                tracing::warn!(
                    "Failed to apply {:?} for member {} in guild {}: {}",
                    change,
                    user_id,
                    guild_id,
                    e
                );
                update.pending.extend_from_slice(&changes[index..]);
                update.failure = Some(e.to_string());
                return false;
            }
        }
    }

    true
}
