use super::*;

/// Tests deleting a role.
///
/// Expected: Ok with the role gone and its category untouched
#[tokio::test]
async fn deletes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let role = factory::create_role(db, &category.id).await?;

    let repo = RoleRepository::new(db);
    repo.delete(role.id.parse().unwrap()).await?;

    assert!(entity::prelude::Role::find_by_id(role.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::RoleCategory::find_by_id(category.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
