//! Cards and units for the simple game.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::{EntityId, PlayerId};
use crate::rules::{Card, Entity};

/// A card in hand. Playing it summons a [`SimpleUnit`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCard {
    pub name: String,
    pub power: i64,
}

impl SimpleCard {
    pub fn new(name: impl Into<String>, power: i64) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }

    /// The unit this card puts on the board.
    #[must_use]
    pub fn summon(&self, owner: PlayerId) -> SimpleUnit {
        SimpleUnit::new(self.name.clone(), owner, self.power)
    }
}

impl Card for SimpleCard {
    fn to_json(&self) -> Value {
        json!({ "name": self.name, "power": self.power })
    }
}

/// A unit on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleUnit {
    pub name: String,
    pub owner: PlayerId,
    pub power: i64,

    /// Set after attacking, cleared by `refresh`.
    pub exhausted: bool,

    /// Board handle, once placed.
    pub parent: Option<EntityId>,

    /// Number of times `refresh` has run.
    pub refreshes: u32,
}

impl SimpleUnit {
    pub fn new(name: impl Into<String>, owner: PlayerId, power: i64) -> Self {
        Self {
            name: name.into(),
            owner,
            power,
            exhausted: false,
            parent: None,
            refreshes: 0,
        }
    }
}

impl Entity for SimpleUnit {
    fn owner(&self) -> PlayerId {
        self.owner
    }

    fn refresh(&mut self) {
        self.exhausted = false;
        self.refreshes += 1;
    }

    fn set_parent(&mut self, id: EntityId) {
        self.parent = Some(id);
    }

    fn to_json(&self) -> Value {
        json!({
            "id": self.parent.map(EntityId::raw),
            "name": self.name,
            "owner": self.owner.index(),
            "power": self.power,
            "exhausted": self.exhausted,
        })
    }
}

impl std::fmt::Display for SimpleUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.power)?;
        if self.exhausted {
            f.write_str(" [exhausted]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summon_copies_card() {
        let card = SimpleCard::new("Bear", 2);
        let unit = card.summon(PlayerId::new(1));

        assert_eq!(unit.name, "Bear");
        assert_eq!(unit.power, 2);
        assert_eq!(unit.owner(), PlayerId::new(1));
        assert!(unit.parent.is_none());
    }

    #[test]
    fn test_unit_display() {
        let mut unit = SimpleUnit::new("Wolf", PlayerId::new(0), 3);
        assert_eq!(unit.to_string(), "Wolf (3)");

        unit.exhausted = true;
        assert_eq!(unit.to_string(), "Wolf (3) [exhausted]");

        unit.refresh();
        assert_eq!(unit.to_string(), "Wolf (3)");
        assert_eq!(unit.refreshes, 1);
    }

    #[test]
    fn test_unit_json_includes_handle() {
        let mut unit = SimpleUnit::new("Bear", PlayerId::new(0), 2);
        assert_eq!(unit.to_json()["id"], Value::Null);

        unit.set_parent(EntityId(7));
        assert_eq!(unit.to_json()["id"], json!(7));
        assert_eq!(unit.to_json()["name"], json!("Bear"));
    }
}
