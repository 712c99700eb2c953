use super::*;

/// Tests recording a published picker.
///
/// Expected: Ok with the message linked to its category
#[tokio::test]
async fn records_picker_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = SelfRoleMessageRepository::new(db);
    let message = repo
        .create(CreateSelfRoleMessageParams {
            id: 700,
            role_category_id: category.id.parse().unwrap(),
            custom_id: "1-games".to_string(),
        })
        .await?;

    assert_eq!(message.id, 700);
    assert_eq!(message.custom_id, "1-games");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that select menu custom ids are unique.
///
/// Expected: Err when recording a second message with the same custom id
#[tokio::test]
async fn rejects_duplicate_custom_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::self_role_message::SelfRoleMessageFactory::new(db, &category.id)
        .custom_id("1-games")
        .build()
        .await?;

    let repo = SelfRoleMessageRepository::new(db);
    let result = repo
        .create(CreateSelfRoleMessageParams {
            id: 701,
            role_category_id: category.id.parse().unwrap(),
            custom_id: "1-games".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
