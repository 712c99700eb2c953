use super::*;

/// Tests building a picker for a category with self roles.
///
/// Verifies that only self-assignable roles are offered, with their ids as option values,
/// and that the custom id combines the guild and the snake cased category name.
///
/// Expected: Ok(Some) with two options
#[test]
fn offers_only_self_roles() {
    let mut entry = category_with_roles(10, 1, &[(11, 1, true), (12, 2, false), (13, 3, true)]);
    entry.category.name = "Video Games".to_string();

    let picker = build_picker(GUILD_ID, &entry).unwrap().unwrap();

    assert_eq!(picker.title, "Assign Video Games");
    assert_eq!(picker.custom_id, "1-video_games");
    let values: Vec<&str> = picker.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["11", "13"]);
    assert_eq!(picker.description, "<@&11> - Description 11\n<@&13> - Description 13");
}

/// Tests a category without self roles.
///
/// Expected: Ok(None)
#[test]
fn skips_category_without_self_roles() {
    let entry = category_with_roles(10, 1, &[(11, 1, false)]);

    assert!(build_picker(GUILD_ID, &entry).unwrap().is_none());
}

/// Tests a category with more self roles than one menu can hold.
///
/// Expected: Err(Validation)
#[test]
fn rejects_too_many_self_roles() {
    let roles: Vec<(u64, i32, bool)> = (0..=MAX_PICKER_OPTIONS as u64)
        .map(|i| (100 + i, i as i32, true))
        .collect();
    let entry = category_with_roles(10, 1, &roles);

    assert!(matches!(
        build_picker(GUILD_ID, &entry),
        Err(AppError::Validation(_))
    ));
}

/// Tests a category with exactly as many self roles as one menu can hold.
///
/// Expected: Ok(Some) with every role offered
#[test]
fn accepts_full_menu() {
    let roles: Vec<(u64, i32, bool)> = (0..MAX_PICKER_OPTIONS as u64)
        .map(|i| (100 + i, i as i32, true))
        .collect();
    let entry = category_with_roles(10, 1, &roles);

    let picker = build_picker(GUILD_ID, &entry).unwrap().unwrap();

    assert_eq!(picker.options.len(), MAX_PICKER_OPTIONS);
}
