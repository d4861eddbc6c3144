//! String conversion utilities.

/// Converts an empty `String` to `None`, otherwise returns `Some(value)`.
///
/// # Examples
///
/// ```
/// use charbldr_domain::common::some_if_not_empty;
///
/// assert_eq!(some_if_not_empty("hello".to_string()), Some("hello".to_string()));
/// assert_eq!(some_if_not_empty(String::new()), None);
/// ```
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Converts a display name into the kebab-case identifier style used by the
/// reference dataset.
///
/// Runs of non-alphanumeric characters collapse into a single `-`;
/// apostrophes are dropped so that "Tiefling's Flame" does not split a word.
///
/// # Examples
///
/// ```
/// use charbldr_domain::common::kebab_case;
///
/// assert_eq!(kebab_case("Hill Dwarf"), "hill-dwarf");
/// assert_eq!(kebab_case("  Skill: Sleight of Hand "), "skill-sleight-of-hand");
/// assert_eq!(kebab_case("hill-dwarf"), "hill-dwarf");
/// ```
pub fn kebab_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars() {
        if ch == '\'' || ch == '\u{2019}' {
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_handles_camel_free_names() {
        assert_eq!(kebab_case("Magic Items"), "magic-items");
        assert_eq!(kebab_case("Half-Orc"), "half-orc");
        assert_eq!(kebab_case("Dragon's Breath"), "dragons-breath");
        assert_eq!(kebab_case(""), "");
        assert_eq!(kebab_case("--"), "");
    }

    #[test]
    fn kebab_case_is_idempotent() {
        let once = kebab_case("Path of the Berserker");
        assert_eq!(kebab_case(&once), once);
    }
}
