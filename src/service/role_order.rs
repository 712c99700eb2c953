//! Role ordering reconciler.
//!
//! Places every stored category's separator role followed by that category's roles at
//! the top of the sortable part of the hierarchy, with all unmanaged roles below them
//! in their existing relative order. The top `reserved_top` roles of the guild are
//! never moved.
//!
//! Sorting is two-phase: `plan_role_order` validates every stored record against the
//! live role list and computes all target positions before `apply_role_order` touches
//! anything in Discord.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::role_category::RoleCategoryRepository,
    discord::DiscordGateway,
    error::AppError,
    model::{
        discord::LiveRole,
        role_category::RoleCategoryWithRoles,
        role_order::{RoleOrderPlan, RolePlacement},
    },
};

pub struct RoleOrderService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn DiscordGateway,
}

impl<'a> RoleOrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn DiscordGateway) -> Self {
        Self { db, gateway }
    }

    /// Sorts the guild's roles to match the stored category and role order.
    ///
    /// Callers must hold the guild's ordering lock for the whole call.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to sort
    /// - `reserved_top` - Number of roles at the top of the hierarchy to leave alone
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of roles that were moved
    /// - `Err(AppError::MissingExternalResource)` - A stored category or role no longer
    ///   exists in Discord; nothing was moved
    /// - `Err(AppError)` - Database or Discord failure
    pub async fn sort(&self, guild_id: u64, reserved_top: usize) -> Result<usize, AppError> {
        let categories = RoleCategoryRepository::new(self.db)
            .get_all_with_roles()
            .await?;
        let live = self.gateway.guild_roles(guild_id).await?;

        let plan = plan_role_order(&categories, &live, reserved_top)?;
        if plan.is_settled() {
            tracing::info!("Roles in guild {} are already in order", guild_id);
            return Ok(0);
        }

        let moved = apply_role_order(self.gateway, guild_id, &plan).await?;

        tracing::info!("Moved {} roles while sorting guild {}", moved, guild_id);

        Ok(moved)
    }
}

/// Computes the target position of every role below the reserved top.
///
/// # Arguments
/// - `categories` - Stored categories with their roles
/// - `live` - The guild's current role list
/// - `reserved_top` - Number of roles at the top of the hierarchy to leave alone
///
/// # Returns
/// - `Ok(RoleOrderPlan)` - Placements ordered highest target first; empty when the
///   reserved range covers every role
/// - `Err(AppError::MissingExternalResource)` - A stored category or role is not among
///   the sortable live roles
pub fn plan_role_order(
    categories: &[RoleCategoryWithRoles],
    live: &[LiveRole],
    reserved_top: usize,
) -> Result<RoleOrderPlan, AppError> {
    let mut pool: Vec<&LiveRole> = live.iter().collect();
    pool.sort_by(|a, b| b.position.cmp(&a.position).then(a.id.cmp(&b.id)));

    if reserved_top >= pool.len() {
        return Ok(RoleOrderPlan::default());
    }
    let mut pool = pool.split_off(reserved_top);
    let slots: Vec<u16> = pool.iter().map(|role| role.position).collect();

    let mut categories: Vec<&RoleCategoryWithRoles> = categories.iter().collect();
    categories.sort_by_key(|entry| entry.category.order);

    let mut sequence: Vec<&LiveRole> = Vec::with_capacity(pool.len());
    for entry in categories {
        sequence.push(take_from_pool(&mut pool, entry.category.id, "role category")?);

        let mut roles: Vec<_> = entry.roles.iter().collect();
        roles.sort_by_key(|role| (role.order, role.id));

        for role in roles {
            sequence.push(take_from_pool(&mut pool, role.id, "role")?);
        }
    }
    sequence.extend(pool);

    let placements = sequence
        .into_iter()
        .zip(slots)
        .map(|(role, target)| RolePlacement {
            role_id: role.id,
            current: role.position,
            target,
        })
        .collect();

    Ok(RoleOrderPlan { placements })
}

fn take_from_pool<'r>(
    pool: &mut Vec<&'r LiveRole>,
    id: u64,
    kind: &'static str,
) -> Result<&'r LiveRole, AppError> {
    let index = pool
        .iter()
        .position(|role| role.id == id)
        .ok_or(AppError::MissingExternalResource { kind, id })?;

    Ok(pool.remove(index))
}

/// Moves roles to their planned positions, highest target first.
///
/// A role is only moved when it is not already at its target. Positions are refreshed
/// from Discord's response after every move, since moving one role shifts others.
///
/// # Returns
/// - `Ok(usize)` - Number of roles that were moved
/// - `Err(AppError)` - A Discord call failed; roles moved before it stay moved
pub async fn apply_role_order(
    gateway: &dyn DiscordGateway,
    guild_id: u64,
    plan: &RoleOrderPlan,
) -> Result<usize, AppError> {
    let mut current: HashMap<u64, u16> = plan
        .placements
        .iter()
        .map(|p| (p.role_id, p.current))
        .collect();
    let mut moved = 0;

    for placement in &plan.placements {
        if current.get(&placement.role_id) == Some(&placement.target) {
            continue;
        }

        let roles = gateway
            .set_role_position(guild_id, placement.role_id, placement.target)
            .await?;
        current = roles.iter().map(|r| (r.id, r.position)).collect();
        moved += 1;

        tracing::debug!(
            "Moved role {} to position {} in guild {}",
            placement.role_id,
            placement.target,
            guild_id
        );
    }

    Ok(moved)
}
