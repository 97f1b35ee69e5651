//! Boxed text in the `+----+` / `|    |` style.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A title centred in a bordered box with a blank line above and below.
/// The box grows to fit the title.
pub fn title(width: usize, text: &str) -> String {
    let width = width.max(text.chars().count() + 2);
    let mut lines = vec![footer(width)];
    lines.extend(body(width, &["", text, ""], Align::Center));
    lines.push(footer(width));
    lines.join("\n")
}

/// A box with side borders on every body line.
pub fn bordered(width: usize, lines: &[&str], align: Align, title: Option<&str>) -> String {
    let mut out = vec![header(width, title)];
    out.extend(body(width, lines, align));
    out.push(footer(width));
    out.join("\n")
}

/// Top and bottom rules only; body lines are printed as given.
pub fn unbordered(width: usize, lines: &[&str], title: Option<&str>) -> String {
    let mut out = vec![header(width, title)];
    out.extend(lines.iter().map(|l| l.to_string()));
    out.push(footer(width));
    out.join("\n")
}

pub fn header(width: usize, title: Option<&str>) -> String {
    match title {
        None => footer(width),
        Some(title) => format!(
            "+{:-^w$}+",
            format!(" {} ", title),
            w = width.saturating_sub(2)
        ),
    }
}

pub fn footer(width: usize) -> String {
    format!("+{}+", "-".repeat(width.saturating_sub(2)))
}

fn body(width: usize, lines: &[&str], align: Align) -> Vec<String> {
    let w = width.saturating_sub(2);
    lines
        .iter()
        .map(|line| match align {
            Align::Left => format!("|{:<w$}|", line),
            Align::Right => format!("|{:>w$}|", line),
            Align::Center => format!("|{:^w$}|", line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_spans_width() {
        assert_eq!(footer(6), "+----+");
    }

    #[test]
    fn header_centres_title() {
        assert_eq!(header(12, Some("AB")), "+--- AB ---+");
        assert_eq!(header(6, None), "+----+");
    }

    #[test]
    fn title_grows_to_fit() {
        let banner = title(4, "TWENTY-ONE");
        let lines = banner.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "+----------+");
        assert_eq!(lines[2], "|TWENTY-ONE|");
        assert!(lines.iter().all(|l| l.chars().count() == 12));
    }

    #[test]
    fn bordered_aligns() {
        let left = bordered(8, &["ab"], Align::Left, None);
        let right = bordered(8, &["ab"], Align::Right, None);
        assert!(left.contains("|ab    |"));
        assert!(right.contains("|    ab|"));
    }

    #[test]
    fn unbordered_keeps_lines() {
        let board = unbordered(10, &["a: 1", "b: 2"], Some("R1"));
        assert_eq!(board, "+-- R1 --+\na: 1\nb: 2\n+--------+");
    }
}
