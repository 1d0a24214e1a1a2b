//! Combat and victory strategy integration tests.
//!
//! These plug custom `CombatResolver` and `WinCondition` implementations into
//! a session and verify when they are called, what they see and where their
//! events land.

use std::cell::RefCell;
use std::rc::Rc;

use ccg_session::combat::CombatState;
use ccg_session::core::{GameAction, GameFormat, PlayerId, PlayerMap};
use ccg_session::events::GameEvent;
use ccg_session::games::simple::{SimpleGameBuilder, SimplePlayer, SimpleUnit};
use ccg_session::rules::{CombatContext, CombatResolver, Player, WinCondition};
use ccg_session::session::{Outcome, Phase, Session};
use ccg_session::zones::Board;
use serde_json::json;

fn p(n: u8) -> PlayerId {
    PlayerId::new(n)
}

fn events(session: &mut Session<SimplePlayer>, action: GameAction) -> Vec<GameEvent> {
    match session.handle_action(&action) {
        Outcome::Applied(events) => events,
        Outcome::Rejected(reason) => panic!("{:?} rejected: {}", action, reason),
    }
}

/// Unblocked attackers hit the defender; a blocked attacker destroys its
/// blocker if it is at least as strong.
struct Trample;

impl CombatResolver<SimplePlayer> for Trample {
    fn resolve_combat(
        &mut self,
        combat: &CombatState,
        context: &mut CombatContext<'_, SimplePlayer>,
    ) -> Vec<GameEvent> {
        let mut emitted = Vec::new();

        for &(attacker, blocker) in combat.blockers() {
            let attack = context.board.get(attacker).map_or(0, |u| u.power);
            let defense = context.board.get(blocker).map_or(0, |u| u.power);
            if attack >= defense {
                if let Some(unit) = context.board.remove_entity(blocker) {
                    emitted.push(GameEvent::custom("destroyed", json!({ "name": unit.name })));
                }
            }
        }

        let damage: i64 = combat
            .unblocked()
            .filter_map(|id| context.board.get(id))
            .map(|unit| unit.power)
            .sum();
        if damage > 0 {
            let defender = context.defending_player();
            context.players[defender].take_damage(damage);
            emitted.push(GameEvent::custom(
                "damage",
                json!({ "player": defender.index(), "amount": damage }),
            ));
        }

        emitted
    }
}

/// Records every combat it is asked to resolve.
#[derive(Clone, Default)]
struct Recorder {
    seen: Rc<RefCell<Vec<(CombatState, PlayerId)>>>,
}

impl CombatResolver<SimplePlayer> for Recorder {
    fn resolve_combat(
        &mut self,
        combat: &CombatState,
        context: &mut CombatContext<'_, SimplePlayer>,
    ) -> Vec<GameEvent> {
        self.seen
            .borrow_mut()
            .push((combat.clone(), context.attacking_player));
        Vec::new()
    }
}

/// Whoever controls five units wins.
struct Swarm;

impl WinCondition<SimplePlayer> for Swarm {
    fn winner(
        &self,
        players: &PlayerMap<SimplePlayer>,
        board: &Board<SimpleUnit>,
    ) -> Option<PlayerId> {
        players
            .iter()
            .map(|(seat, _)| seat)
            .find(|&seat| board.player_entities(seat).len() >= 5)
    }
}

/// Resolver events follow the block event and can change life and board.
#[test]
fn test_resolver_events_follow_block() {
    let mut session = SimpleGameBuilder::new()
        .build()
        .unwrap()
        .with_combat_resolver(Trample);
    session.start_game().unwrap();
    let bear = session.add_entity(SimpleUnit::new("Bear", p(0), 2)).unwrap();
    session.add_entity(SimpleUnit::new("Wolf", p(0), 3)).unwrap();
    session.add_entity(SimpleUnit::new("Wall", p(1), 1)).unwrap();

    events(&mut session, GameAction::declare_attackers(p(0), ["Bear", "Wolf"]));
    let emitted = events(
        &mut session,
        GameAction::declare_blockers(p(1), [("Bear", "Wall")]),
    );

    assert_eq!(emitted.len(), 3);
    assert!(matches!(emitted[0], GameEvent::Block { .. }));
    assert_eq!(emitted[1], GameEvent::custom("destroyed", json!({ "name": "Wall" })));
    assert_eq!(
        emitted[2],
        GameEvent::custom("damage", json!({ "player": 1, "amount": 3 }))
    );

    assert_eq!(session.player(p(1)).unwrap().life(), 17);
    assert!(session.board().player_entities(p(1)).is_empty());
    assert!(session.board().contains(bear));
    assert_eq!(session.phase(), Phase::SecondMain);
}

/// A defender pass resolves combat with no blocks.
#[test]
fn test_resolver_on_defender_pass() {
    let mut session = SimpleGameBuilder::new()
        .build()
        .unwrap()
        .with_combat_resolver(Trample);
    session.start_game().unwrap();
    session.add_entity(SimpleUnit::new("Giant", p(0), 5)).unwrap();

    events(&mut session, GameAction::declare_attackers(p(0), ["Giant"]));
    let emitted = events(&mut session, GameAction::pass(p(1)));

    assert_eq!(
        emitted,
        vec![GameEvent::custom("damage", json!({ "player": 1, "amount": 5 }))]
    );
    assert_eq!(session.player(p(1)).unwrap().life(), 15);
}

/// The resolver runs once per combat and sees the declaration and attacker.
#[test]
fn test_resolver_sees_declaration() {
    let recorder = Recorder::default();
    let mut session = SimpleGameBuilder::new()
        .build()
        .unwrap()
        .with_combat_resolver(recorder.clone());
    session.start_game().unwrap();
    let bear = session.add_entity(SimpleUnit::new("Bear", p(0), 2)).unwrap();
    let wall = session.add_entity(SimpleUnit::new("Wall", p(1), 0)).unwrap();
    let wolf = session.add_entity(SimpleUnit::new("Wolf", p(1), 3)).unwrap();

    events(&mut session, GameAction::declare_attackers(p(0), ["Bear"]));
    events(&mut session, GameAction::declare_blockers(p(1), [("Bear", "Wall")]));
    events(&mut session, GameAction::pass(p(0)));

    events(&mut session, GameAction::declare_attackers(p(1), ["Wolf"]));
    events(&mut session, GameAction::pass(p(0)));

    let seen = recorder.seen.borrow();
    assert_eq!(seen.len(), 2);

    assert_eq!(seen[0].0.attackers(), &[bear]);
    assert_eq!(seen[0].0.blockers(), &[(bear, wall)]);
    assert_eq!(seen[0].1, p(0));

    assert_eq!(seen[1].0.attackers(), &[wolf]);
    assert!(seen[1].0.blockers().is_empty());
    assert_eq!(seen[1].1, p(1));
}

/// Without strategies, combat changes nothing and no one wins.
#[test]
fn test_default_strategies() {
    let format = GameFormat::default();
    let players: Vec<SimplePlayer> = PlayerId::all(2)
        .map(|seat| SimplePlayer::from_format(seat, &format, Vec::new()))
        .collect();
    let mut session = Session::new(format, players).unwrap();
    session.start_game().unwrap();
    let bear = session.add_entity(SimpleUnit::new("Bear", p(0), 2)).unwrap();

    events(&mut session, GameAction::declare_attackers(p(0), ["Bear"]));
    let emitted = events(&mut session, GameAction::pass(p(1)));

    assert!(emitted.is_empty());
    assert!(!session.board().get(bear).unwrap().exhausted);
    assert_eq!(session.player(p(1)).unwrap().life(), 20);
    assert_eq!(session.winner(), None);
}

/// The win condition is consulted on demand.
#[test]
fn test_custom_win_condition() {
    let mut session = SimpleGameBuilder::new()
        .build()
        .unwrap()
        .with_win_condition(Swarm);
    session.start_game().unwrap();

    for name in ["Goblin", "Bear", "Wolf", "Ogre"] {
        events(&mut session, GameAction::play_card(p(0), name));
    }
    assert_eq!(session.winner(), None);

    events(&mut session, GameAction::play_card(p(0), "Giant"));
    assert_eq!(session.winner(), Some(p(0)));
}

/// Trading damage until someone falls, using the simple game's victory rule.
#[test]
fn test_game_to_completion() {
    let mut session = SimpleGameBuilder::new()
        .starting_life(6)
        .build()
        .unwrap()
        .with_combat_resolver(Trample);
    session.start_game().unwrap();

    const MAX_TURNS: u32 = 50;
    while session.winner().is_none() && session.turn_number() < MAX_TURNS {
        let active = session.active_player();
        let defender = active.opponent();

        if let Some(card) = session.player(active).unwrap().hand().first().cloned() {
            events(&mut session, GameAction::play_card(active, card.name));
        }

        let attackers: Vec<String> = session
            .board()
            .player_entities(active)
            .ids()
            .iter()
            .map(|id| format!("#{}", id.raw()))
            .collect();
        events(&mut session, GameAction::declare_attackers(active, attackers));
        events(&mut session, GameAction::pass(defender));
        events(&mut session, GameAction::pass(active));
    }

    let winner = session.winner().expect("game should have ended");
    assert!(session.player(winner).unwrap().life() > 0);
    assert!(session.player(winner.opponent()).unwrap().life() <= 0);
}
