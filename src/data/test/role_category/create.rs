use super::*;

/// Tests storing a new category.
///
/// Verifies that the repository inserts the category with the given separator role id
/// and returns it with the id parsed back to u64.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleCategoryRepository::new(db);
    let category = repo
        .create(CreateRoleCategoryParams {
            id: 1012345678901234567,
            name: "Games".to_string(),
            order: 3,
            padding: 2,
        })
        .await?;

    assert_eq!(category.id, 1012345678901234567);
    assert_eq!(category.name, "Games");
    assert_eq!(category.order, 3);
    assert_eq!(category.padding, 2);

    let stored = entity::prelude::RoleCategory::find_by_id("1012345678901234567")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Games");

    Ok(())
}

/// Tests that category names are unique.
///
/// Expected: Err when inserting a second category with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role_category::RoleCategoryFactory::new(db)
        .name("Games")
        .build()
        .await?;

    let repo = RoleCategoryRepository::new(db);
    let result = repo
        .create(CreateRoleCategoryParams {
            id: 77,
            name: "Games".to_string(),
            order: 1,
            padding: 0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
