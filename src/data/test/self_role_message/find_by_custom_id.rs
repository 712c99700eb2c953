use super::*;

/// Tests routing a selection back to its picker.
///
/// Expected: Ok(Some) for a recorded custom id, Ok(None) for an unknown one
#[tokio::test]
async fn finds_message_by_custom_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::self_role_message::SelfRoleMessageFactory::new(db, &category.id)
        .custom_id("1-pronouns")
        .build()
        .await?;

    let repo = SelfRoleMessageRepository::new(db);

    let found = repo.find_by_custom_id("1-pronouns").await?.unwrap();
    assert_eq!(found.role_category_id.to_string(), category.id);
    assert!(repo.find_by_custom_id("1-colours").await?.is_none());

    Ok(())
}
