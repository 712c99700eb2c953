use super::*;

/// Tests clearing picker records before republishing.
///
/// Expected: Ok with the number of removed rows and no rows left
#[tokio::test]
async fn deletes_every_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_self_role_message(db, &category.id).await?;
    factory::create_self_role_message(db, &category.id).await?;

    let repo = SelfRoleMessageRepository::new(db);

    assert_eq!(repo.delete_all().await?, 2);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
