use sea_orm::DatabaseConnection;

use crate::{
    data::role_category::RoleCategoryRepository,
    discord::DiscordGateway,
    error::AppError,
    model::{
        discord::{RoleRef, RoleSpec},
        role_category::{
            CreateRoleCategoryParams, RoleCategory, RoleCategoryWithRoles,
            UpdateRoleCategoryParams,
        },
    },
    util::format::{category_display_name, category_display_name_length, MAX_ROLE_NAME_LENGTH},
};

/// Builds the separator role name, rejecting names Discord would refuse.
///
/// The length is checked before the name is built so an oversized padding never
/// allocates.
fn separator_name(name: &str, padding: i32) -> Result<String, AppError> {
    if category_display_name_length(name, padding) > MAX_ROLE_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "The padded category name can be at most {} characters long",
            MAX_ROLE_NAME_LENGTH
        )));
    }

    Ok(category_display_name(name, padding))
}

/// Options of `roles categories create`.
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub order: Option<i32>,
    /// Existing unmanaged role to adopt as the separator.
    pub existing: Option<RoleRef>,
    pub padding: Option<i32>,
}

/// Options of `roles categories edit`.
#[derive(Debug, Clone)]
pub struct EditCategoryInput {
    pub category: RoleRef,
    pub name: Option<String>,
    pub order: Option<i32>,
    pub padding: Option<i32>,
}

pub struct RoleCategoryService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn DiscordGateway,
}

impl<'a> RoleCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn DiscordGateway) -> Self {
        Self { db, gateway }
    }

    /// Creates a category, creating or adopting its separator role
    ///
    /// The separator role is named with the padded display name. A newly created role
    /// has no permissions.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to create the separator role in
    /// - `input` - Command options
    ///
    /// # Returns
    /// - `Ok(RoleCategory)` - The stored category
    /// - `Err(AppError::Validation)` - A category with the same name or separator role
    ///   exists, or the padded name is longer than Discord allows
    /// - `Err(AppError)` - Database or Discord failure
    pub async fn create(
        &self,
        guild_id: u64,
        input: CreateCategoryInput,
    ) -> Result<RoleCategory, AppError> {
        let repo = RoleCategoryRepository::new(self.db);

        let existing_id = input.existing.as_ref().map(|role| role.id);
        if repo.exists_by_name_or_id(&input.name, existing_id).await? {
            return Err(AppError::Validation(
                "A role category with the same name or existing role already exists".to_string(),
            ));
        }

        let padding = input.padding.unwrap_or(0);
        let spec = RoleSpec {
            name: separator_name(&input.name, padding)?,
            colour: None,
        };
        let order = match input.order {
            Some(order) => order,
            None => repo.count().await? as i32 + 1,
        };

        let id = match existing_id {
            Some(id) => {
                self.gateway.edit_role(guild_id, id, spec).await?;
                id
            }
            None => self.gateway.create_role(guild_id, spec).await?,
        };

        let category = repo
            .create(CreateRoleCategoryParams {
                id,
                name: input.name,
                order,
                padding,
            })
            .await?;

        tracing::info!(
            "Created role category {} ({}) in guild {}",
            category.name,
            category.id,
            guild_id
        );

        Ok(category)
    }

    /// Edits a category and renames its separator role
    ///
    /// # Returns
    /// - `Ok((RoleCategory, RoleCategory))` - The category before and after the edit
    /// - `Err(AppError::NotFound)` - The role is not a stored category
    /// - `Err(AppError::Validation)` - The padded name is longer than Discord allows
    /// - `Err(AppError)` - Database or Discord failure
    pub async fn edit(
        &self,
        guild_id: u64,
        input: EditCategoryInput,
    ) -> Result<(RoleCategory, RoleCategory), AppError> {
        let repo = RoleCategoryRepository::new(self.db);

        let old = repo.get_by_id(input.category.id).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "{} is not a valid role category",
                input.category.name
            ))
        })?;

        let name = input.name.clone().unwrap_or_else(|| old.name.clone());
        let padding = input.padding.unwrap_or(old.padding);
        let spec = RoleSpec {
            name: separator_name(&name, padding)?,
            colour: None,
        };

        self.gateway.edit_role(guild_id, old.id, spec).await?;

        let updated = repo
            .update(UpdateRoleCategoryParams {
                id: old.id,
                name: input.name,
                order: input.order,
                padding: input.padding,
            })
            .await?;

        tracing::info!("Edited role category {} ({})", old.name, old.id);

        Ok((old, updated))
    }

    /// Gets a category with its roles, failing when it is not stored
    ///
    /// # Returns
    /// - `Ok(RoleCategoryWithRoles)` - The stored category
    /// - `Err(AppError::NotFound)` - The role is not a stored category
    pub async fn require(&self, category: &RoleRef) -> Result<RoleCategoryWithRoles, AppError> {
        RoleCategoryRepository::new(self.db)
            .get_with_roles(category.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Couldn't find a matching role category".to_string()))
    }

    /// Deletes the Discord roles belonging to a category
    ///
    /// Roles that no longer exist in Discord are skipped.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of roles deleted in Discord
    /// - `Err(AppError)` - Discord failure
    pub async fn delete_member_roles(
        &self,
        guild_id: u64,
        category: &RoleCategoryWithRoles,
    ) -> Result<usize, AppError> {
        let live = self.gateway.guild_roles(guild_id).await?;
        let mut deleted = 0;

        for role in &category.roles {
            if !live.iter().any(|live_role| live_role.id == role.id) {
                tracing::debug!("Role {} is already gone from guild {}", role.id, guild_id);
                continue;
            }

            self.gateway.delete_role(guild_id, role.id).await?;
            deleted += 1;
        }

        Ok(deleted)
    }

    /// Deletes the separator role in Discord, then the category and its records
    pub async fn delete(&self, guild_id: u64, category: &RoleCategory) -> Result<(), AppError> {
        self.gateway.delete_role(guild_id, category.id).await?;

        RoleCategoryRepository::new(self.db)
            .delete(category.id)
            .await?;

        tracing::info!(
            "Deleted role category {} ({}) from guild {}",
            category.name,
            category.id,
            guild_id
        );

        Ok(())
    }

    /// Gets every category in ascending order
    pub async fn list(&self) -> Result<Vec<RoleCategory>, AppError> {
        Ok(RoleCategoryRepository::new(self.db).get_all().await?)
    }
}

/// Formats the category list reply, one `"{order}: {name}"` line per category.
pub fn format_category_list(categories: &[RoleCategory]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    categories
        .iter()
        .map(|c| format!("{}: {}", c.order, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}
