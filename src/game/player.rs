use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Player to move on the given zero-based turn. Player one takes the
    /// even turns.
    pub fn for_turn(turn: u32) -> Player {
        if turn % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }

    /// 1 or 2, matching the exported cell value
    pub fn number(self) -> u8 {
        self.to_cell().value()
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        for turn in [0, 2, 4, 40] {
            assert_eq!(Player::for_turn(turn), Player::One);
        }
        for turn in [1, 3, 5, 41] {
            assert_eq!(Player::for_turn(turn), Player::Two);
        }
    }

    #[test]
    fn test_player_number_and_name() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::One.name(), "Player 1");
        assert_eq!(Player::Two.name(), "Player 2");
    }
}
