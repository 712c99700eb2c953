//! Text formatting helpers shared by command replies and published messages.

/// Blank braille pattern used to pad category separator names.
///
/// Discord trims regular whitespace from role names but keeps U+2800.
const PAD_CHAR: char = '\u{2800}';

/// Longest role name Discord accepts, in characters.
pub const MAX_ROLE_NAME_LENGTH: usize = 100;

/// Largest padding that leaves room for the separator around an empty name.
pub const MAX_CATEGORY_PADDING: i32 = ((MAX_ROLE_NAME_LENGTH - 6) / 2) as i32;

/// Character count of `category_display_name(name, padding)` without building it.
pub fn category_display_name_length(name: &str, padding: i32) -> usize {
    let name_length = name.chars().count();

    name_length % 2 + 2 * padding.max(0) as usize + name_length + 6
}

/// Builds the display name of a category separator role.
///
/// The result is `"{extra}{pad}-- {name} --{pad}"` where `pad` is `padding` blank
/// characters and `extra` is one more blank character when the name has an odd length,
/// which keeps separators of different names visually centered.
///
/// # Arguments
/// - `name` - Category name
/// - `padding` - Number of blank characters on each side; negative values count as zero
pub fn category_display_name(name: &str, padding: i32) -> String {
    let pad: String = std::iter::repeat_n(PAD_CHAR, padding.max(0) as usize).collect();
    let extra = if name.chars().count() % 2 == 1 {
        PAD_CHAR.to_string()
    } else {
        String::new()
    };

    format!("{}{}-- {} --{}", extra, pad, name, pad)
}

/// Lowercases a name and replaces spaces with underscores.
pub fn snake_case(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Joins items as `"a, b & c"`.
pub fn pretty_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} & {}", rest.join(", "), last),
    }
}

/// Formats a role mention.
pub fn role_mention(role_id: u64) -> String {
    format!("<@&{}>", role_id)
}
