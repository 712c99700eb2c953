//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Starts at 1 so every generated id is a valid (non-zero) Discord snowflake.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and `count` roles inside it.
///
/// Roles are created with ascending `order` values (1, 2, ...) and are not
/// self-assignable.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of roles to create in the category
///
/// # Returns
/// - `Ok((category, roles))` - The created category and its roles in order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_category_with_roles(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::role_category::Model, Vec<entity::role::Model>), DbErr> {
    let category = crate::factory::role_category::create_category(db).await?;

    let mut roles = Vec::with_capacity(count);
    for order in 1..=count {
        let role = crate::factory::role::RoleFactory::new(db, &category.id)
            .order(order as i32)
            .build()
            .await?;
        roles.push(role);
    }

    Ok((category, roles))
}
