use super::*;

/// Tests renaming a category.
///
/// Expected: Ok with the old and new category, and the separator role renamed
#[tokio::test]
async fn renames_separator_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role_category::RoleCategoryFactory::new(db)
        .id("50")
        .name("Games")
        .padding(2)
        .build()
        .await?;
    let gateway = FakeGateway::with_roles(&[(GUILD_ID, "@everyone"), (50, "Games")]);

    let (old, updated) = RoleCategoryService::new(db, &gateway)
        .edit(
            GUILD_ID,
            EditCategoryInput {
                category: role_ref(50, "Games"),
                name: Some("Hobbies".to_string()),
                order: Some(4),
                padding: None,
            },
        )
        .await?;

    assert_eq!(old.name, "Games");
    assert_eq!(updated.name, "Hobbies");
    assert_eq!(updated.order, 4);
    assert_eq!(updated.padding, 2);
    assert_eq!(gateway.role(50).unwrap().name, category_display_name("Hobbies", 2));

    Ok(())
}

/// Tests editing a role that is not a stored category.
///
/// Expected: Err(NotFound) naming the role
#[tokio::test]
async fn unknown_category_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = FakeGateway::with_roles(&[(GUILD_ID, "@everyone"), (50, "Games")]);

    let result = RoleCategoryService::new(db, &gateway)
        .edit(
            GUILD_ID,
            EditCategoryInput {
                category: role_ref(50, "Games"),
                name: None,
                order: None,
                padding: None,
            },
        )
        .await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "Games is not a valid role category")
        }
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}

/// Tests editing a category with a padding too large for a role name.
///
/// Expected: Err(Validation) with the separator role and record unchanged
#[tokio::test]
async fn rejects_oversized_padding() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role_category::RoleCategoryFactory::new(db)
        .id("50")
        .name("Games")
        .padding(2)
        .build()
        .await?;
    let gateway = FakeGateway::with_roles(&[(GUILD_ID, "@everyone"), (50, "Games")]);

    let result = RoleCategoryService::new(db, &gateway)
        .edit(
            GUILD_ID,
            EditCategoryInput {
                category: role_ref(50, "Games"),
                name: None,
                order: None,
                padding: Some(i32::MAX),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(gateway.role(50).unwrap().name, "Games");
    let stored = RoleCategoryRepository::new(db).get_by_id(50).await?.unwrap();
    assert_eq!(stored.padding, 2);

    Ok(())
}
