//! Text frames for the Twenty-One table.
use super::hand::Hand;
use super::seat::Seat;
use super::table::Table;
use crate::cards::Card;
use crate::console::banner;
use colored::Colorize;

pub const GAME_TITLE: &str = "TWENTY-ONE";
pub const WELCOME_WIDTH: usize = 30;
pub const TITLE_WIDTH: usize = 20;
pub const SCOREBOARD_WIDTH: usize = 19;
/// Characters between a card's side borders.
pub const CARD_WIDTH: usize = 5;

/// Five text rows per card, cards side by side.
///
/// ```text
/// +-----++-----+
/// |10   ||*****|
/// |  ♠  ||*****|
/// |   10||*****|
/// +-----++-----+
/// ```
pub fn cards(hand: &Hand) -> String {
    let edge = format!("+{}+", "-".repeat(CARD_WIDTH));
    let rows = hand
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| face(card, hand.is_face_down(i)))
        .collect::<Vec<[String; 3]>>();
    let middle = (0..3).map(|r| rows.iter().map(|rows| rows[r].as_str()).collect::<String>());
    std::iter::once(edge.repeat(rows.len()))
        .chain(middle)
        .chain(std::iter::once(edge.repeat(rows.len())))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Upper rank, suit and lower rank rows of one card.
fn face(card: &Card, down: bool) -> [String; 3] {
    if down {
        let back = format!("|{}|", "*".repeat(CARD_WIDTH));
        return [back.clone(), back.clone(), back];
    }
    let paint = |s: String| match card.suit().is_red() {
        true => s.red().to_string(),
        false => s,
    };
    [
        format!("|{}|", paint(format!("{:<w$}", card.rank(), w = CARD_WIDTH))),
        format!("|{}|", paint(format!("{:^w$}", card.suit(), w = CARD_WIDTH))),
        format!("|{}|", paint(format!("{:>w$}", card.rank(), w = CARD_WIDTH))),
    ]
}

/// `NAME'S TOTAL: t`, or `???` while the hole card is down.
pub fn total(seat: &Seat) -> String {
    let total = match seat.hand().visible_total() {
        Some(t) => t.to_string(),
        None => String::from("???"),
    };
    format!("{}'S TOTAL: {}", seat.name().to_uppercase(), total)
}

pub fn scoreboard(table: &Table) -> String {
    let lines = [
        format!("{}: {}", table.player(), table.player().score()),
        format!("{}: {}", table.dealer(), table.dealer().score()),
    ];
    let lines = lines.iter().map(String::as_str).collect::<Vec<_>>();
    banner::unbordered(
        SCOREBOARD_WIDTH,
        &lines,
        Some(format!("ROUND {}", table.round()).as_str()),
    )
}

/// The whole table: title, scoreboard, target, then dealer and player.
pub fn frame(table: &Table) -> String {
    [
        banner::title(TITLE_WIDTH, GAME_TITLE),
        String::new(),
        scoreboard(table),
        format!("First to {} wins!", table.target()),
        String::new(),
        total(table.dealer()),
        cards(table.dealer().hand()),
        String::new(),
        total(table.player()),
        cards(table.player().hand()),
        String::new(),
    ]
    .join("\n")
}

pub const RULES_OBJECTIVE: &str = "\
---------- RULES ----------
=> OBJECTIVE:
=> The goal of Twenty-One is to try to get as close to 21 as possible,
=> without going over. If you go over 21, it's a \"bust\" and an
=> immediate loss.

=> SETUP:
=> The game consists of a \"dealer\" and a \"player\". Both participants
=> are initially dealt 2 cards. The player can see both their cards,
=> but can initially see only the first of the dealer's cards,
=> with the second card (the \"hole\" card) hidden from the player.

=> CARD VALUES:
=> Card numbers 2-10 are worth their face value. Jacks, queens,
=> and kings are each worth 10. Aces are worth either 1 or 11,
=> depending on the player's hand: an ace is counted as 11 if
=> it does not cause the hand's value to exceed 21; otherwise,
=> it is counted as 1.
";

pub const RULES_GAMEPLAY: &str = "\
---------- RULES ----------
=> GAMEPLAY:
=> The player goes first and can choose to \"hit\" to add more cards
=> to their hand, or \"stay\" to keep their current hand. If their
=> hand's total exceeds 21, the player busts and loses.

=> If the player stays without busting, the dealer's turn begins.
=> The dealer must hit until their total hand is at least 17, at which
=> point they must stay. If the dealer busts, the player wins.

=> If both the player and dealer stay without busting, then the total value
=> of each hand is compared and the winner is the one with the highest
=> value. If the values are the same, it's a tie, resulting in a \"push\".
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn card_art_rows() {
        plain();
        let hand = Hand::from(vec![Card::from((Rank::Ten, Suit::Spade))]);
        let art = cards(&hand);
        let rows = art.lines().collect::<Vec<_>>();
        assert_eq!(rows, vec!["+-----+", "|10   |", "|  ♠  |", "|   10|", "+-----+"]);
    }

    #[test]
    fn hole_card_is_starred() {
        plain();
        let mut hand = Hand::from(vec![
            Card::from((Rank::Ace, Suit::Club)),
            Card::from((Rank::King, Suit::Club)),
        ]);
        hand.hide();
        let art = cards(&hand);
        let rows = art.lines().collect::<Vec<_>>();
        assert_eq!(rows[0], "+-----++-----+");
        assert_eq!(rows[1], "|A    ||*****|");
        assert_eq!(rows[2], "|  ♣  ||*****|");
        assert_eq!(rows[3], "|    A||*****|");
    }

    #[test]
    fn hidden_total_is_unknown() {
        let mut seat = Seat::new("Hal");
        seat.hand_mut().add(Card::from((Rank::Nine, Suit::Club)));
        seat.hand_mut().add(Card::from((Rank::Nine, Suit::Heart)));
        seat.hand_mut().hide();
        assert_eq!(total(&seat), "HAL'S TOTAL: ???");
        seat.hand_mut().reveal();
        assert_eq!(total(&seat), "HAL'S TOTAL: 18");
    }
}
