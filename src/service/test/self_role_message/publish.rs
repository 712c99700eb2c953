use super::*;

/// Tests publishing pickers into an empty channel.
///
/// Expected: Ok(1) with one picker for the category with self roles, recorded in the store
#[tokio::test]
async fn publishes_one_picker_per_category_with_self_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::role_category::RoleCategoryFactory::new(db)
        .name("Games")
        .order(1)
        .build()
        .await?;
    factory::create_self_role(db, &games.id).await?;
    let staff = factory::role_category::RoleCategoryFactory::new(db)
        .name("Staff")
        .order(2)
        .build()
        .await?;
    factory::create_role(db, &staff.id).await?;

    let gateway = FakeGateway::default();

    let published = SelfRoleMessageService::new(db, &gateway)
        .publish(GUILD_ID, CHANNEL_ID)
        .await?;

    assert_eq!(published, 1);
    let pickers = gateway.state().pickers.clone();
    assert_eq!(pickers.len(), 1);
    assert_eq!(pickers[0].0, CHANNEL_ID);
    assert_eq!(pickers[0].2.custom_id, "1-games");

    let records = SelfRoleMessageRepository::new(db).get_all().await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, pickers[0].1);
    assert_eq!(records[0].role_category_id.to_string(), games.id);

    Ok(())
}

/// Tests publishing again after pickers were already published.
///
/// Expected: the old messages and records are replaced by new ones
#[tokio::test]
async fn republishing_replaces_old_pickers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::create_category(db).await?;
    factory::create_self_role(db, &games.id).await?;

    let gateway = FakeGateway::default();
    let service = SelfRoleMessageService::new(db, &gateway);
    service.publish(GUILD_ID, CHANNEL_ID).await?;
    let first_message = gateway.state().pickers[0].1;

    service.publish(GUILD_ID, CHANNEL_ID).await?;

    let messages = gateway.state().messages.get(&CHANNEL_ID).cloned().unwrap();
    assert_eq!(messages.len(), 1);
    assert_ne!(messages[0], first_message);

    let records = SelfRoleMessageRepository::new(db).get_all().await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, messages[0]);

    Ok(())
}

/// Tests a stored picker whose message was already deleted by hand.
///
/// Expected: Ok, the stale record is dropped and a new picker is published
#[tokio::test]
async fn tolerates_missing_old_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::create_category(db).await?;
    factory::create_self_role(db, &games.id).await?;
    factory::create_self_role_message(db, &games.id).await?;

    let gateway = FakeGateway::default();

    let published = SelfRoleMessageService::new(db, &gateway)
        .publish(GUILD_ID, CHANNEL_ID)
        .await?;

    assert_eq!(published, 1);
    assert_eq!(SelfRoleMessageRepository::new(db).get_all().await?.len(), 1);

    Ok(())
}

/// Tests a category with too many self roles.
///
/// Expected: Err(Validation) with the existing pickers left in place
#[tokio::test]
async fn oversized_category_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let games = factory::create_category(db).await?;
    for _ in 0..=MAX_PICKER_OPTIONS {
        factory::create_self_role(db, &games.id).await?;
    }
    let old = factory::self_role_message::SelfRoleMessageFactory::new(db, &games.id)
        .id("4242")
        .build()
        .await?;

    let gateway = FakeGateway::default();
    gateway.add_messages(CHANNEL_ID, &[4242]);

    let result = SelfRoleMessageService::new(db, &gateway)
        .publish(GUILD_ID, CHANNEL_ID)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(gateway.state().messages.get(&CHANNEL_ID), Some(&vec![4242]));
    let records = SelfRoleMessageRepository::new(db).get_all().await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id.to_string(), old.id);

    Ok(())
}

/// Tests publishing two categories whose names map to the same custom id.
///
/// Expected: Err(Validation) with the old picker and its record left in place
#[tokio::test]
async fn colliding_custom_ids_change_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::role_category::RoleCategoryFactory::new(db)
        .name("My Games")
        .order(1)
        .build()
        .await?;
    factory::create_self_role(db, &first.id).await?;
    let second = factory::role_category::RoleCategoryFactory::new(db)
        .name("my_games")
        .order(2)
        .build()
        .await?;
    factory::create_self_role(db, &second.id).await?;
    factory::self_role_message::SelfRoleMessageFactory::new(db, &first.id)
        .id("4242")
        .build()
        .await?;

    let gateway = FakeGateway::default();
    gateway.add_messages(CHANNEL_ID, &[4242]);

    let result = SelfRoleMessageService::new(db, &gateway)
        .publish(GUILD_ID, CHANNEL_ID)
        .await;

    match result {
        Err(AppError::Validation(message)) => assert!(message.contains("my_games")),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(gateway.state().pickers.is_empty());
    assert_eq!(gateway.state().messages.get(&CHANNEL_ID), Some(&vec![4242]));
    assert_eq!(SelfRoleMessageRepository::new(db).get_all().await?.len(), 1);

    Ok(())
}
