//! Player for the simple game.

use serde_json::json;

use super::cards::{SimpleCard, SimpleUnit};
use crate::core::{EntityId, GameFormat, PlayerId, Resource};
use crate::events::GameEvent;
use crate::rules::Player;
use crate::session::Table;
use crate::zones::ZoneView;

/// A seated player with a deck, a hand and a resource pool.
///
/// The deck is drawn from the front. One resource may be played per turn.
#[derive(Clone, Debug)]
pub struct SimplePlayer {
    seat: PlayerId,
    life: i64,
    deck: Vec<SimpleCard>,
    hand: Vec<SimpleCard>,
    resources: u32,
    resource_played: bool,
}

impl SimplePlayer {
    pub fn new(seat: PlayerId, life: i64, deck: Vec<SimpleCard>) -> Self {
        Self {
            seat,
            life,
            deck,
            hand: Vec::new(),
            resources: 0,
            resource_played: false,
        }
    }

    /// Create a player with the life and resources `format` gives `seat`.
    pub fn from_format(seat: PlayerId, format: &GameFormat, deck: Vec<SimpleCard>) -> Self {
        Self {
            resources: format.initial_resource(seat),
            ..Self::new(seat, format.initial_life(seat), deck)
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[SimpleCard] {
        &self.hand
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn resources(&self) -> u32 {
        self.resources
    }

    /// Lose `amount` life. Life may go below zero.
    pub fn take_damage(&mut self, amount: i64) {
        self.life -= amount;
    }

    fn hand_position(&self, query: &str) -> Option<usize> {
        self.hand
            .iter()
            .position(|card| card.name.eq_ignore_ascii_case(query))
    }
}

impl Player for SimplePlayer {
    type Card = SimpleCard;
    type Entity = SimpleUnit;

    fn player_number(&self) -> PlayerId {
        self.seat
    }

    fn life(&self) -> i64 {
        self.life
    }

    fn can_play_resource(&self) -> bool {
        !self.resource_played
    }

    fn play_resource(&mut self, resource: Resource) {
        self.resources += resource.amount;
        self.resource_played = true;
    }

    fn query_hand(&self, query: &str) -> Option<SimpleCard> {
        self.hand_position(query).map(|i| self.hand[i].clone())
    }

    fn play_card(&mut self, card: SimpleCard, table: &mut Table<'_, SimpleUnit>) {
        if let Some(i) = self.hand.iter().position(|c| *c == card) {
            self.hand.remove(i);
        }

        if let Some(id) = table.add_entity(card.summon(self.seat)) {
            table.emit(GameEvent::custom(
                "summon",
                json!({ "unit": id.raw(), "name": card.name }),
            ));
        }
    }

    /// Exhausted units never match, so they can neither attack nor block.
    fn query_cards(&self, query: &str, candidates: ZoneView<'_, SimpleUnit>) -> Option<EntityId> {
        let mut ready = candidates.iter().filter(|(_, unit)| !unit.exhausted);

        if let Some(raw) = query.strip_prefix('#') {
            let wanted = EntityId::from(raw.parse::<u32>().ok()?);
            return ready.find(|&(id, _)| id == wanted).map(|(id, _)| id);
        }

        ready
            .find(|(_, unit)| unit.name.eq_ignore_ascii_case(query))
            .map(|(id, _)| id)
    }

    fn draw_cards(&mut self, count: usize) {
        let count = count.min(self.deck.len());
        self.hand.extend(self.deck.drain(..count));
    }

    fn start_turn(&mut self) {
        self.resource_played = false;
    }

    fn summarize(&self) -> String {
        let hand: Vec<&str> = self.hand.iter().map(|card| card.name.as_str()).collect();
        format!(
            "Hand: {}\nResources: {}\nDeck: {} cards",
            hand.join(", "),
            self.resources,
            self.deck.len()
        )
    }
}
