use super::*;

/// Tests partially updating a category.
///
/// Verifies that only the fields given in the params change.
///
/// Expected: Ok with the new name and padding, order unchanged
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::role_category::RoleCategoryFactory::new(db)
        .name("Old")
        .order(4)
        .build()
        .await?;

    let repo = RoleCategoryRepository::new(db);
    let updated = repo
        .update(UpdateRoleCategoryParams {
            id: category.id.parse().unwrap(),
            name: Some("New".to_string()),
            order: None,
            padding: Some(3),
        })
        .await?;

    assert_eq!(updated.name, "New");
    assert_eq!(updated.order, 4);
    assert_eq!(updated.padding, 3);

    Ok(())
}

/// Tests updating an unknown category.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleCategoryRepository::new(db);
    let result = repo
        .update(UpdateRoleCategoryParams {
            id: 31337,
            name: None,
            order: Some(1),
            padding: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
