use super::*;

async fn store_scattered_category(db: &sea_orm::DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    factory::role_category::RoleCategoryFactory::new(db)
        .id("20")
        .order(1)
        .build()
        .await?;
    factory::role::RoleFactory::new(db, "20")
        .id("22")
        .order(1)
        .build()
        .await?;
    factory::role::RoleFactory::new(db, "20")
        .id("21")
        .order(2)
        .build()
        .await?;
    Ok(())
}

/// Tests sorting a guild end to end.
///
/// Verifies that applying the plan highest target first yields the planned hierarchy
/// even though every move shifts the roles in between.
///
/// Expected: Ok with hierarchy Admin, category, its roles, then unmanaged roles
#[tokio::test]
async fn sorts_guild_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    store_scattered_category(db).await?;

    let gateway = FakeGateway::with_roles(&GUILD_BOTTOM_UP);

    let moved = RoleOrderService::new(db, &gateway).sort(GUILD_ID, 1).await?;

    assert_eq!(moved, 2);
    assert_eq!(gateway.role_ids_top_down(), vec![99, 20, 22, 21, 11, 10, 1]);

    Ok(())
}

/// Tests sorting a guild that is already in order.
///
/// Expected: Ok(0) and no position changes sent to Discord
#[tokio::test]
async fn second_sort_moves_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    store_scattered_category(db).await?;

    let gateway = FakeGateway::with_roles(&GUILD_BOTTOM_UP);
    let service = RoleOrderService::new(db, &gateway);
    service.sort(GUILD_ID, 1).await?;
    let calls = gateway.state().position_calls.len();

    let moved = service.sort(GUILD_ID, 1).await?;

    assert_eq!(moved, 0);
    assert_eq!(gateway.state().position_calls.len(), calls);

    Ok(())
}

/// Tests that a missing stored role aborts before any move.
///
/// Expected: Err(MissingExternalResource) and no position changes sent to Discord
#[tokio::test]
async fn missing_role_moves_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    store_scattered_category(db).await?;
    factory::role::RoleFactory::new(db, "20")
        .id("4040")
        .order(3)
        .build()
        .await?;

    let gateway = FakeGateway::with_roles(&GUILD_BOTTOM_UP);

    let result = RoleOrderService::new(db, &gateway).sort(GUILD_ID, 1).await;

    assert!(matches!(
        result,
        Err(AppError::MissingExternalResource { kind: "role", id: 4040 })
    ));
    assert!(gateway.state().position_calls.is_empty());
    assert_eq!(gateway.role_ids_top_down(), vec![99, 22, 11, 20, 21, 10, 1]);

    Ok(())
}

/// Tests that the reserved top is never moved.
///
/// Expected: the top two roles keep their positions
#[tokio::test]
async fn leaves_reserved_roles_in_place() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role_category::RoleCategoryFactory::new(db)
        .id("10")
        .build()
        .await?;

    let gateway = FakeGateway::with_roles(&GUILD_BOTTOM_UP);

    RoleOrderService::new(db, &gateway).sort(GUILD_ID, 2).await?;

    let top_down = gateway.role_ids_top_down();
    assert_eq!(&top_down[..3], &[99, 22, 10]);
    assert!(gateway
        .state()
        .position_calls
        .iter()
        .all(|(id, _)| *id != 99 && *id != 22));

    Ok(())
}
