//! Builder for simple-game sessions.

use super::cards::SimpleCard;
use super::player::SimplePlayer;
use super::rules::{ExhaustAttackers, LastStanding};
use crate::core::{GameFormat, PlayerId, PLAYER_COUNT};
use crate::error::Result;
use crate::session::Session;

/// Builder for a `Session<SimplePlayer>`.
///
/// ```
/// use ccg_session::core::PlayerId;
/// use ccg_session::games::simple::SimpleGameBuilder;
///
/// let mut session = SimpleGameBuilder::new().starting_life(10).build().unwrap();
/// session.start_game().unwrap();
///
/// assert!(session.is_player_turn(PlayerId::new(0)));
/// assert_eq!(session.player(PlayerId::new(1)).unwrap().hand().len(), 5);
/// ```
pub struct SimpleGameBuilder {
    format: GameFormat,
    decks: Vec<Vec<SimpleCard>>,
}

impl Default for SimpleGameBuilder {
    fn default() -> Self {
        Self {
            format: GameFormat::default(),
            decks: vec![default_deck(); PLAYER_COUNT],
        }
    }
}

impl SimpleGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole format.
    pub fn format(mut self, format: GameFormat) -> Self {
        self.format = format;
        self
    }

    pub fn starting_life(mut self, life: i64) -> Self {
        self.format.initial_life = vec![life; self.format.player_count];
        self
    }

    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.format.initial_draw = vec![size; self.format.player_count];
        self
    }

    /// Give `seat` this deck, top card first.
    pub fn deck(mut self, seat: PlayerId, cards: Vec<SimpleCard>) -> Self {
        if let Some(deck) = self.decks.get_mut(seat.index()) {
            *deck = cards;
        }
        self
    }

    /// Build the session, not yet started.
    pub fn build(self) -> Result<Session<SimplePlayer>> {
        self.format.validate()?;

        let players: Vec<SimplePlayer> = PlayerId::all(self.format.player_count)
            .zip(self.decks)
            .map(|(seat, deck)| SimplePlayer::from_format(seat, &self.format, deck))
            .collect();

        Ok(Session::new(self.format, players)?
            .with_combat_resolver(ExhaustAttackers)
            .with_win_condition(LastStanding))
    }
}

/// Ten cards, powers 1 through 5 twice over.
fn default_deck() -> Vec<SimpleCard> {
    const NAMES: [&str; 5] = ["Goblin", "Bear", "Wolf", "Ogre", "Giant"];

    NAMES
        .iter()
        .cycle()
        .take(NAMES.len() * 2)
        .zip((1..=5i64).cycle())
        .map(|(name, power)| SimpleCard::new(*name, power))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Player;
    use crate::session::Phase;

    #[test]
    fn test_default_deck() {
        let deck = default_deck();

        assert_eq!(deck.len(), 10);
        assert_eq!(deck[0], SimpleCard::new("Goblin", 1));
        assert_eq!(deck[4], SimpleCard::new("Giant", 5));
        assert_eq!(deck[5], SimpleCard::new("Goblin", 1));
    }

    #[test]
    fn test_build_applies_format() {
        let session = SimpleGameBuilder::new()
            .starting_life(7)
            .starting_hand_size(2)
            .build()
            .unwrap();

        assert!(!session.is_started());
        assert_eq!(session.phase(), Phase::FirstMain);
        for seat in PlayerId::all(2) {
            assert_eq!(session.player(seat).unwrap().life(), 7);
        }
        assert_eq!(session.format().initial_draw(PlayerId::new(1)), 2);
    }

    #[test]
    fn test_start_draws_opening_hands() {
        let mut session = SimpleGameBuilder::new()
            .starting_hand_size(3)
            .deck(PlayerId::new(1), vec![SimpleCard::new("Wall", 0)])
            .build()
            .unwrap();
        session.start_game().unwrap();

        let first = session.player(PlayerId::new(0)).unwrap();
        assert_eq!(first.hand().len(), 3);
        assert_eq!(first.deck_size(), 7);

        let second = session.player(PlayerId::new(1)).unwrap();
        assert_eq!(second.hand(), &[SimpleCard::new("Wall", 0)]);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = SimpleGameBuilder::new()
            .format(GameFormat::new().with_initial_life([20]))
            .build();

        assert!(result.is_err());
    }
}
