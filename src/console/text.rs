use std::fmt::Display;

/// Join items into an English list with a final conjunction.
///
/// `[1]` → `"1"`, `[1, 2]` → `"1 or 2"`, `[1, 2, 3]` → `"1, 2, or 3"`.
pub fn join_or<T>(items: &[T], delimiter: &str, word: &str) -> String
where
    T: Display,
{
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [a, b] => format!("{} {} {}", a, word, b),
        [init @ .., last] => init
            .iter()
            .map(|i| i.to_string())
            .chain(std::iter::once(format!("{} {}", word, last)))
            .collect::<Vec<String>>()
            .join(delimiter),
    }
}

/// `join_or` with the usual `", "` and `"or"`.
pub fn list_or<T>(items: &[T]) -> String
where
    T: Display,
{
    join_or(items, ", ", "or")
}

pub fn pluralize(word: &str, n: usize) -> String {
    match n {
        1 => word.to_string(),
        _ => format!("{}s", word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_or_by_length() {
        assert_eq!(list_or::<u8>(&[]), "");
        assert_eq!(list_or(&[1]), "1");
        assert_eq!(list_or(&[1, 2]), "1 or 2");
        assert_eq!(list_or(&[1, 2, 3]), "1, 2, or 3");
    }

    #[test]
    fn join_or_custom_words() {
        assert_eq!(join_or(&[1, 2, 3], "; ", "and"), "1; 2; and 3");
        assert_eq!(join_or(&["X", "O"], ", ", "and"), "X and O");
    }

    #[test]
    fn pluralize_zero_and_many() {
        assert_eq!(pluralize("game", 0), "games");
        assert_eq!(pluralize("game", 1), "game");
        assert_eq!(pluralize("round", 4), "rounds");
    }
}
