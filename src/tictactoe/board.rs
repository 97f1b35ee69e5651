use super::marker::Marker;

/// Keys of every row, column and diagonal.
pub const LINES: [[usize; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Nine squares keyed 1 through 9, left to right, top to bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board([Option<Marker>; 9]);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn keys() -> std::ops::RangeInclusive<usize> {
        1..=9
    }
    pub fn get(&self, key: usize) -> Option<Marker> {
        match Self::keys().contains(&key) {
            true => self.0[key - 1],
            false => None,
        }
    }

    /// Place `marker` on an empty square.
    pub fn mark(&mut self, key: usize, marker: Marker) -> Result<(), String> {
        if !Self::keys().contains(&key) {
            return Err(format!("no square {}", key));
        }
        match self.0[key - 1] {
            Some(taken) => Err(format!("square {} is taken by {}", key, taken)),
            None => {
                self.0[key - 1] = Some(marker);
                Ok(())
            }
        }
    }

    pub fn unmarked(&self) -> Vec<usize> {
        Self::keys().filter(|k| self.get(*k).is_none()).collect()
    }
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
    /// The marker that fills a whole line, if any.
    pub fn winner(&self) -> Option<Marker> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|k| self.get(k));
            match a.is_some() && a == b && b == c {
                true => a,
                false => None,
            }
        })
    }
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let square = |k: usize| match self.get(k) {
            Some(m) => m.to_string(),
            None => String::from(" "),
        };
        for (i, row) in [[1, 2, 3], [4, 5, 6], [7, 8, 9]].iter().enumerate() {
            if i > 0 {
                writeln!(f, "-----+-----+-----")?;
            }
            writeln!(f, "     |     |")?;
            writeln!(
                f,
                "  {}  |  {}  |  {}",
                square(row[0]),
                square(row[1]),
                square(row[2])
            )?;
            writeln!(f, "     |     |")?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn board(xs: &[usize], os: &[usize]) -> Board {
        let mut board = Board::new();
        xs.iter().for_each(|k| board.mark(*k, Marker::X).unwrap());
        os.iter().for_each(|k| board.mark(*k, Marker::O).unwrap());
        board
    }

    #[test]
    fn fresh_board_is_open() {
        let board = Board::new();
        assert_eq!(board.unmarked(), (1..=9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn mark_rejects_taken_and_out_of_range() {
        let mut board = Board::new();
        assert!(board.mark(5, Marker::X).is_ok());
        assert!(board.mark(5, Marker::O).is_err());
        assert!(board.mark(0, Marker::O).is_err());
        assert!(board.mark(10, Marker::O).is_err());
        assert_eq!(board.get(5), Some(Marker::X));
        assert_eq!(board.unmarked(), vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn every_line_wins() {
        for line in LINES {
            assert_eq!(board(&line, &[]).winner(), Some(Marker::X));
            assert_eq!(board(&[], &line).winner(), Some(Marker::O));
        }
    }

    #[test]
    fn mixed_line_does_not_win() {
        assert_eq!(board(&[1, 2], &[3]).winner(), None);
    }

    #[test]
    fn full_board_without_winner_is_a_tie() {
        // X O X
        // X O O
        // O X X
        let board = board(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert!(board.is_over());
    }

    #[test]
    fn grid_layout() {
        let text = board(&[1], &[9]).to_string();
        let rows = text.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[1], "  X  |     |   ");
        assert_eq!(rows[3], "-----+-----+-----");
        assert_eq!(rows[9], "     |     |  O");
    }
}
