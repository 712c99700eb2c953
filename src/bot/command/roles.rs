//! `/roles`, manages the role catalog.
//!
//! Subcommands:
//! - `categories create|edit|delete|list` manage categories and their separator roles
//! - `create|edit|delete|list` manage catalog roles
//! - `update` sorts the guild's roles and republishes the self-role pickers

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, Permissions,
};

use crate::{
    bot::{command::options::Options, reply},
    discord::DiscordGateway,
    error::AppError,
    model::{
        discord::RoleRef,
        role_category::{RoleCategory, RoleCategoryWithRoles},
    },
    service::{
        role::{CreateRoleInput, EditRoleInput, RoleService},
        role_category::{
            format_category_list, CreateCategoryInput, EditCategoryInput, RoleCategoryService,
        },
        role_order::RoleOrderService,
        self_role_message::SelfRoleMessageService,
    },
    state::BotState,
    util::format::MAX_CATEGORY_PADDING,
};

pub const NAME: &str = "roles";

/// Discord allows at most 25 fields in one embed.
const MAX_EMBED_FIELDS: usize = 25;

/// A parsed `/roles` invocation.
#[derive(Debug, Clone)]
pub enum RolesCommand {
    CreateCategory(CreateCategoryInput),
    EditCategory(EditCategoryInput),
    DeleteCategory { category: RoleRef, delete_roles: bool },
    ListCategories,
    Create(CreateRoleInput),
    Edit(EditRoleInput),
    Delete { role: RoleRef },
    List { category: Option<RoleRef> },
    Update { order: bool, self_roles: bool },
}

fn option(kind: CommandOptionType, name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(kind, name, description)
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    option(CommandOptionType::SubCommand, name, description)
}

fn categories_group() -> CreateCommandOption {
    option(
        CommandOptionType::SubCommandGroup,
        "categories",
        "Manage server role categories",
    )
    .add_sub_option(
        subcommand("create", "Creates a role category")
            .add_sub_option(
                option(
                    CommandOptionType::String,
                    "name",
                    "The name of the role category",
                )
                .required(true),
            )
            .add_sub_option(option(
                CommandOptionType::Integer,
                "order",
                "Ordering of the category. If omitted, the category will be appended",
            ))
            .add_sub_option(option(
                CommandOptionType::Role,
                "existing",
                "Convert an existing, unmanaged role category to a managed one",
            ))
            .add_sub_option(
                option(
                    CommandOptionType::Integer,
                    "padding",
                    "Amount of padding on sides of the category name",
                )
                .min_int_value(0)
                .max_int_value(MAX_CATEGORY_PADDING as u64),
            ),
    )
    .add_sub_option(
        subcommand("edit", "Edit a role category")
            .add_sub_option(
                option(
                    CommandOptionType::Role,
                    "category",
                    "The role category to edit",
                )
                .required(true),
            )
            .add_sub_option(option(
                CommandOptionType::String,
                "name",
                "New name for the role category",
            ))
            .add_sub_option(option(
                CommandOptionType::Integer,
                "order",
                "Ordering of the category in list",
            ))
            .add_sub_option(
                option(
                    CommandOptionType::Integer,
                    "padding",
                    "Amount of padding on sides of the category name",
                )
                .min_int_value(0)
                .max_int_value(MAX_CATEGORY_PADDING as u64),
            ),
    )
    .add_sub_option(
        subcommand("delete", "Delete a role category")
            .add_sub_option(
                option(
                    CommandOptionType::Role,
                    "category",
                    "The role category to delete",
                )
                .required(true),
            )
            .add_sub_option(
                option(
                    CommandOptionType::Boolean,
                    "deleteroles",
                    "Should we also delete the roles that belong to this role category",
                )
                .required(true),
            ),
    )
    .add_sub_option(subcommand("list", "Lists all the role categories"))
}

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Manage server roles")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(categories_group())
        .add_option(
            subcommand("create", "Create a new role")
                .add_sub_option(
                    option(
                        CommandOptionType::Role,
                        "category",
                        "The category to assign the role to",
                    )
                    .required(true),
                )
                .add_sub_option(
                    option(CommandOptionType::String, "name", "The name of the role")
                        .required(true),
                )
                .add_sub_option(option(
                    CommandOptionType::String,
                    "color",
                    "The color of the role. No color by default",
                ))
                .add_sub_option(option(
                    CommandOptionType::Integer,
                    "order",
                    "Ordering of the role. If omitted, the role will be appended",
                ))
                .add_sub_option(option(
                    CommandOptionType::Boolean,
                    "selfrole",
                    "If the role should be assignable by users. Disabled by default",
                ))
                .add_sub_option(option(
                    CommandOptionType::Role,
                    "existing",
                    "Convert an existing, unmanaged role to a managed one",
                ))
                .add_sub_option(option(
                    CommandOptionType::String,
                    "description",
                    "Description for the role",
                )),
        )
        .add_option(
            subcommand("edit", "Edit a role")
                .add_sub_option(
                    option(CommandOptionType::Role, "role", "The role to edit").required(true),
                )
                .add_sub_option(option(
                    CommandOptionType::String,
                    "name",
                    "New name for the role",
                ))
                .add_sub_option(option(
                    CommandOptionType::Integer,
                    "order",
                    "Ordering of the role in list",
                ))
                .add_sub_option(option(
                    CommandOptionType::String,
                    "color",
                    "The color of the role",
                ))
                .add_sub_option(option(
                    CommandOptionType::Role,
                    "category",
                    "The category of the role",
                ))
                .add_sub_option(option(
                    CommandOptionType::Boolean,
                    "selfrole",
                    "If the role should be assignable by users",
                ))
                .add_sub_option(option(
                    CommandOptionType::String,
                    "description",
                    "Description for the role",
                )),
        )
        .add_option(
            subcommand("delete", "Delete a role").add_sub_option(
                option(CommandOptionType::Role, "role", "The role to delete").required(true),
            ),
        )
        .add_option(subcommand("list", "Lists roles").add_sub_option(option(
            CommandOptionType::Role,
            "category",
            "Category to list roles of. If omitted, lists all roles along with categories",
        )))
        .add_option(
            subcommand("update", "Update roles from the database")
                .add_sub_option(option(
                    CommandOptionType::Boolean,
                    "order",
                    "Should update role order",
                ))
                .add_sub_option(option(
                    CommandOptionType::Boolean,
                    "selfrole",
                    "Should update selfroles",
                )),
        )
}

fn unknown_subcommand() -> AppError {
    AppError::Validation("Unknown subcommand".to_string())
}

/// Parses the subcommand and its options.
///
/// # Returns
/// - `Ok(RolesCommand)` - The invoked subcommand
/// - `Err(AppError::Validation)` - Unknown subcommand or an out of range number
/// - `Err(AppError::InternalErr)` - A required option is missing or has the wrong type
pub fn parse(options: Options<'_>) -> Result<RolesCommand, AppError> {
    let (name, options) = options.subcommand()?;

    let command = match name {
        "categories" => return parse_categories(options),
        "create" => RolesCommand::Create(CreateRoleInput {
            category: options.required_role("category")?,
            name: options.required_string("name")?,
            color: options.string("color")?,
            order: options.small_integer("order")?,
            self_role: options.boolean("selfrole")?,
            existing: options.role("existing")?,
            description: options.string("description")?,
        }),
        "edit" => RolesCommand::Edit(EditRoleInput {
            role: options.required_role("role")?,
            name: options.string("name")?,
            order: options.small_integer("order")?,
            color: options.string("color")?,
            category: options.role("category")?,
            self_role: options.boolean("selfrole")?,
            description: options.string("description")?,
        }),
        "delete" => RolesCommand::Delete {
            role: options.required_role("role")?,
        },
        "list" => RolesCommand::List {
            category: options.role("category")?,
        },
        "update" => RolesCommand::Update {
            order: options.boolean("order")?.unwrap_or(true),
            self_roles: options.boolean("selfrole")?.unwrap_or(true),
        },
        _ => return Err(unknown_subcommand()),
    };

    Ok(command)
}

fn parse_categories(options: Options<'_>) -> Result<RolesCommand, AppError> {
    let (name, options) = options.subcommand()?;

    let command = match name {
        "create" => RolesCommand::CreateCategory(CreateCategoryInput {
            name: options.required_string("name")?,
            order: options.small_integer("order")?,
            existing: options.role("existing")?,
            padding: options.small_integer("padding")?,
        }),
        "edit" => RolesCommand::EditCategory(EditCategoryInput {
            category: options.required_role("category")?,
            name: options.string("name")?,
            order: options.small_integer("order")?,
            padding: options.small_integer("padding")?,
        }),
        "delete" => RolesCommand::DeleteCategory {
            category: options.required_role("category")?,
            delete_roles: options.required_boolean("deleteroles")?,
        },
        "list" => RolesCommand::ListCategories,
        _ => return Err(unknown_subcommand()),
    };

    Ok(command)
}

fn role_names(entry: &RoleCategoryWithRoles) -> String {
    if entry.roles.is_empty() {
        return "None found".to_string();
    }

    entry
        .roles
        .iter()
        .map(|role| role.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Embed listing every category with the names of its roles.
pub fn roles_embed(entries: &[RoleCategoryWithRoles]) -> CreateEmbed {
    entries
        .iter()
        .take(MAX_EMBED_FIELDS)
        .fold(CreateEmbed::new().title("Roles"), |embed, entry| {
            embed.field(entry.category.name.clone(), role_names(entry), false)
        })
}

/// Embed listing the roles of one category.
pub fn category_roles_embed(entry: &RoleCategoryWithRoles) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{} Roles", entry.category.name))
        .description(role_names(entry))
}

pub fn categories_embed(categories: &[RoleCategory]) -> CreateEmbed {
    CreateEmbed::new()
        .title("Role Categories")
        .description(format_category_list(categories))
}

/// Runs a parsed `/roles` subcommand in `guild_id`.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
    gateway: &dyn DiscordGateway,
    guild_id: u64,
    roles_command: RolesCommand,
) -> Result<(), AppError> {
    let categories = RoleCategoryService::new(&state.db, gateway);
    let roles = RoleService::new(&state.db, gateway);

    match roles_command {
        RolesCommand::CreateCategory(input) => {
            let category = categories.create(guild_id, input).await?;

            reply::content(
                ctx,
                command,
                format!("Created a new role category '{}'", category.name),
                false,
            )
            .await
        }
        RolesCommand::EditCategory(input) => {
            let (old, _) = categories.edit(guild_id, input).await?;

            reply::content(ctx, command, format!("Edited role category {}", old.name), false)
                .await
        }
        RolesCommand::DeleteCategory {
            category,
            delete_roles,
        } => {
            let entry = categories.require(&category).await?;

            reply::content(ctx, command, "Deleting role category...", false).await?;

            if delete_roles {
                let deleted = categories.delete_member_roles(guild_id, &entry).await?;
                tracing::debug!(
                    "Deleted {} roles of category {}",
                    deleted,
                    entry.category.name
                );
                reply::edit(ctx, command, "Deleted the roles belonging to the category...")
                    .await?;
            }

            categories.delete(guild_id, &entry.category).await?;

            reply::edit(
                ctx,
                command,
                format!("Deleted the role category '{}'", entry.category.name),
            )
            .await
        }
        RolesCommand::ListCategories => {
            let list = categories.list().await?;

            reply::embed(ctx, command, categories_embed(&list), true).await
        }
        RolesCommand::Create(input) => {
            let role = roles.create(guild_id, input).await?;

            reply::content(ctx, command, format!("Created a new role '{}'", role.name), false)
                .await
        }
        RolesCommand::Edit(input) => {
            let (old, _) = roles.edit(guild_id, input).await?;

            reply::content(ctx, command, format!("Edited role {}", old.name), false).await
        }
        RolesCommand::Delete { role } => {
            let stored = roles.require(&role).await?;

            reply::content(ctx, command, "Deleting role...", false).await?;

            roles.delete(guild_id, &stored).await?;

            reply::edit(ctx, command, format!("Deleted the role '{}'", stored.name)).await
        }
        RolesCommand::List { category } => {
            let entries = roles.list(category.as_ref()).await?;

            let embed = match (&category, entries.first()) {
                (Some(_), Some(entry)) => category_roles_embed(entry),
                _ => roles_embed(&entries),
            };

            reply::embed(ctx, command, embed, true).await
        }
        RolesCommand::Update { order, self_roles } => {
            reply::content(ctx, command, "Updating roles...", false).await?;

            let _guard = state.order_locks.lock(guild_id).await;

            if order {
                RoleOrderService::new(&state.db, gateway)
                    .sort(guild_id, state.no_sort_role_count)
                    .await?;
                reply::edit(ctx, command, "Sorted roles").await?;
            }

            if self_roles {
                SelfRoleMessageService::new(&state.db, gateway)
                    .publish(guild_id, state.self_role_channel)
                    .await?;
                reply::edit(ctx, command, "Updated self roles").await?;
            }

            Ok(())
        }
    }
}
