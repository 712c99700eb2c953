use super::*;

/// Tests storing a new role.
///
/// Expected: Ok with the role linked to its category
#[tokio::test]
async fn creates_role_in_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = RoleRepository::new(db);
    let role = repo
        .create(CreateRoleParams {
            id: 5550001,
            name: "Minecraft".to_string(),
            order: 1,
            description: "Block game".to_string(),
            self_role: true,
            category_id: category.id.parse().unwrap(),
        })
        .await?;

    assert_eq!(role.id, 5550001);
    assert_eq!(role.category_id.to_string(), category.id);
    assert!(role.self_role);

    let stored = entity::prelude::Role::find_by_id("5550001")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.description, "Block game");

    Ok(())
}
