use std::sync::LazyLock;

use regex::Regex;
use sea_orm::DatabaseConnection;

use crate::{
    data::{role::RoleRepository, role_category::RoleCategoryRepository},
    discord::DiscordGateway,
    error::AppError,
    model::{
        discord::{RoleRef, RoleSpec},
        role::{CreateRoleParams, Role, UpdateRoleParams},
        role_category::RoleCategoryWithRoles,
    },
};

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

const DEFAULT_DESCRIPTION: &str = "No Description";

/// Options of `roles create`.
#[derive(Debug, Clone)]
pub struct CreateRoleInput {
    pub category: RoleRef,
    pub name: String,
    pub color: Option<String>,
    pub order: Option<i32>,
    pub self_role: Option<bool>,
    /// Existing unmanaged role to adopt.
    pub existing: Option<RoleRef>,
    pub description: Option<String>,
}

/// Options of `roles edit`.
#[derive(Debug, Clone)]
pub struct EditRoleInput {
    pub role: RoleRef,
    pub name: Option<String>,
    pub order: Option<i32>,
    pub color: Option<String>,
    pub category: Option<RoleRef>,
    pub self_role: Option<bool>,
    pub description: Option<String>,
}

/// Parses a `#rrggbb` colour.
///
/// # Returns
/// - `Ok(u32)` - The RGB value
/// - `Err(AppError::Validation)` - The text is not a six digit hex colour
pub fn parse_hex_color(color: &str) -> Result<u32, AppError> {
    if !HEX_COLOR.is_match(color) {
        return Err(AppError::Validation("Invalid color".to_string()));
    }

    u32::from_str_radix(&color[1..], 16).map_err(|_| AppError::Validation("Invalid color".to_string()))
}

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn DiscordGateway,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn DiscordGateway) -> Self {
        Self { db, gateway }
    }

    /// Creates a managed role, creating or adopting the Discord role
    ///
    /// An adopted role keeps its colour unless a new one is given.
    ///
    /// # Returns
    /// - `Ok(Role)` - The stored role
    /// - `Err(AppError::Validation)` - Duplicate name or role, or an invalid colour
    /// - `Err(AppError::NotFound)` - The category is not stored
    /// - `Err(AppError)` - Database or Discord failure
    pub async fn create(&self, guild_id: u64, input: CreateRoleInput) -> Result<Role, AppError> {
        let role_repo = RoleRepository::new(self.db);
        let category_repo = RoleCategoryRepository::new(self.db);

        let existing_id = input.existing.as_ref().map(|role| role.id);
        if role_repo.exists_by_name_or_id(&input.name, existing_id).await? {
            return Err(AppError::Validation(
                "A role with the same name or role already exists".to_string(),
            ));
        }

        let category = category_repo
            .get_by_id(input.category.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Couldn't find a matching role category".to_string()))?;

        let colour = input.color.as_deref().map(parse_hex_color).transpose()?;

        let order = match input.order {
            Some(order) => order,
            None => role_repo.count().await? as i32 + 1,
        };
        let spec = RoleSpec {
            name: input.name.clone(),
            colour,
        };

        let id = match existing_id {
            Some(id) => {
                self.gateway.edit_role(guild_id, id, spec).await?;
                id
            }
            None => self.gateway.create_role(guild_id, spec).await?,
        };

        let role = role_repo
            .create(CreateRoleParams {
                id,
                name: input.name,
                order,
                description: input
                    .description
                    .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
                self_role: input.self_role.unwrap_or(false),
                category_id: category.id,
            })
            .await?;

        tracing::info!(
            "Created role {} ({}) in category {}",
            role.name,
            role.id,
            category.name
        );

        Ok(role)
    }

    /// Edits a managed role in Discord and in the store
    ///
    /// # Returns
    /// - `Ok((Role, Role))` - The role before and after the edit
    /// - `Err(AppError::NotFound)` - The role or the new category is not stored
    /// - `Err(AppError::Validation)` - Invalid colour
    /// - `Err(AppError)` - Database or Discord failure
    pub async fn edit(&self, guild_id: u64, input: EditRoleInput) -> Result<(Role, Role), AppError> {
        let role_repo = RoleRepository::new(self.db);
        let category_repo = RoleCategoryRepository::new(self.db);

        let old = role_repo.get_by_id(input.role.id).await?.ok_or_else(|| {
            AppError::NotFound(format!("{} is not a stored role", input.role.name))
        })?;

        let category_id = match &input.category {
            Some(category) => {
                let stored = category_repo.get_by_id(category.id).await?.ok_or_else(|| {
                    AppError::NotFound(format!("{} is not a valid role category", category.name))
                })?;
                Some(stored.id)
            }
            None => None,
        };

        let colour = input.color.as_deref().map(parse_hex_color).transpose()?;

        self.gateway
            .edit_role(
                guild_id,
                old.id,
                RoleSpec {
                    name: input.name.clone().unwrap_or_else(|| old.name.clone()),
                    colour,
                },
            )
            .await?;

        let updated = role_repo
            .update(UpdateRoleParams {
                id: old.id,
                name: input.name,
                order: input.order,
                description: input.description,
                self_role: input.self_role,
                category_id,
            })
            .await?;

        tracing::info!("Edited role {} ({})", old.name, old.id);

        Ok((old, updated))
    }

    /// Gets a stored role, failing when it is not stored
    ///
    /// # Returns
    /// - `Ok(Role)` - The stored role
    /// - `Err(AppError::NotFound)` - The role is not stored
    pub async fn require(&self, role: &RoleRef) -> Result<Role, AppError> {
        RoleRepository::new(self.db)
            .get_by_id(role.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Couldn't find the role".to_string()))
    }

    /// Deletes a managed role in Discord, then in the store
    pub async fn delete(&self, guild_id: u64, role: &Role) -> Result<(), AppError> {
        self.gateway.delete_role(guild_id, role.id).await?;

        RoleRepository::new(self.db).delete(role.id).await?;

        tracing::info!("Deleted role {} ({}) from guild {}", role.name, role.id, guild_id);

        Ok(())
    }

    /// Lists roles grouped by category
    ///
    /// # Arguments
    /// - `category` - Only list this category when given
    ///
    /// # Returns
    /// - `Ok(Vec<RoleCategoryWithRoles>)` - Categories in ascending order with their roles
    /// - `Err(AppError::NotFound)` - The given category is not stored
    pub async fn list(
        &self,
        category: Option<&RoleRef>,
    ) -> Result<Vec<RoleCategoryWithRoles>, AppError> {
        let repo = RoleCategoryRepository::new(self.db);

        match category {
            Some(category) => {
                let entry = repo.get_with_roles(category.id).await?.ok_or_else(|| {
                    AppError::NotFound(format!("{} is not a valid role category", category.name))
                })?;
                Ok(vec![entry])
            }
            None => Ok(repo.get_all_with_roles().await?),
        }
    }
}
