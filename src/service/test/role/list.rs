use super::*;

/// Tests listing every category with its roles.
///
/// Expected: categories in order, each with its roles
#[tokio::test]
async fn lists_all_categories() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (first, roles) = factory::helpers::create_category_with_roles(db, 2).await?;
    let (second, _) = factory::helpers::create_category_with_roles(db, 0).await?;
    let gateway = guild();

    let list = RoleService::new(db, &gateway).list(None).await?;

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].category.id.to_string(), first.id);
    assert_eq!(list[0].roles.len(), roles.len());
    assert_eq!(list[1].category.id.to_string(), second.id);
    assert!(list[1].roles.is_empty());

    Ok(())
}

/// Tests listing a single category.
///
/// Expected: only that category, or NotFound when it is not stored
#[tokio::test]
async fn lists_one_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    store_games(db).await?;
    factory::create_role(db, &CATEGORY.to_string()).await?;
    factory::create_category(db).await?;
    let gateway = guild();
    let service = RoleService::new(db, &gateway);

    let list = service.list(Some(&role_ref(CATEGORY, "Games"))).await?;

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].roles.len(), 1);

    let missing = service.list(Some(&role_ref(999, "Nope"))).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
