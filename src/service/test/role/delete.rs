use super::*;

/// Tests deleting a stored role.
///
/// Expected: Ok with the role gone from Discord and the store
#[tokio::test]
async fn deletes_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    store_games(db).await?;
    factory::role::RoleFactory::new(db, CATEGORY.to_string())
        .id("60")
        .build()
        .await?;
    let gateway = FakeGateway::with_roles(&[(GUILD_ID, "@everyone"), (60, "Chess")]);
    gateway.set_member_roles(7, &[60]);

    let service = RoleService::new(db, &gateway);
    let role = service.require(&role_ref(60, "Chess")).await?;
    service.delete(GUILD_ID, &role).await?;

    assert!(gateway.role(60).is_none());
    assert!(gateway.member(7).is_empty());
    assert!(RoleRepository::new(db).get_by_id(60).await?.is_none());

    Ok(())
}

/// Tests looking up a role that is not stored.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn require_fails_for_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = guild();

    let result = RoleService::new(db, &gateway)
        .require(&role_ref(60, "Chess"))
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Couldn't find the role"),
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}
