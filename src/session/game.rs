//! The session: single entry point for mutating a game.

use serde_json::Value;
use tracing::{debug, info};

use super::outcome::{Outcome, Rejection};
use super::phase::{Phase, PhaseController};
use super::table::Table;
use crate::combat::CombatState;
use crate::core::{ActionKind, ActionType, EntityId, GameAction, GameFormat, PlayerId, PlayerMap, Resource};
use crate::error::{Result, SessionError};
use crate::events::{EventLog, GameEvent};
use crate::rules::{
    Card, CombatContext, CombatResolver, Entity, NoCombatDamage, Player, Undecided, WinCondition,
};
use crate::zones::{Board, ZoneView};

/// One two-player game.
///
/// Owns the phase controller, board, combat declaration and event log for
/// the lifetime of the game, plus one [`Player`] per seat. Every mutation
/// goes through [`Session::handle_action`], which processes one action to
/// completion and returns the events it appended.
///
/// The session does no locking; the host must submit actions one at a time.
pub struct Session<P: Player> {
    format: GameFormat,
    players: PlayerMap<P>,
    board: Board<P::Entity>,
    phases: PhaseController,
    combat: CombatState,
    log: EventLog,
    combat_resolver: Box<dyn CombatResolver<P>>,
    win_condition: Box<dyn WinCondition<P>>,
}

impl<P: Player> Session<P> {
    /// Create a session for `players`, given in seat order.
    ///
    /// Each player must report the seat it occupies and start with the life
    /// `format` gives that seat. Starting resources are opaque to the
    /// session and are the player's own business.
    pub fn new(format: GameFormat, players: Vec<P>) -> Result<Self> {
        format.validate()?;

        if players.len() != format.player_count {
            return Err(SessionError::PlayerCount {
                expected: format.player_count,
                actual: players.len(),
            });
        }

        for (seat, player) in PlayerId::all(players.len()).zip(&players) {
            let reported = player.player_number();
            if reported != seat {
                return Err(SessionError::SeatMismatch { seat, reported });
            }

            let expected = format.initial_life(seat);
            if player.life() != expected {
                return Err(SessionError::StartingLife {
                    seat,
                    expected,
                    actual: player.life(),
                });
            }
        }

        let players = PlayerMap::from_vec(players).ok_or(SessionError::PlayerCount {
            expected: format.player_count,
            actual: 0,
        })?;

        Ok(Self {
            board: Board::new(format.player_count, format.board_size),
            format,
            players,
            phases: PhaseController::new(),
            combat: CombatState::new(),
            log: EventLog::new(),
            combat_resolver: Box::new(NoCombatDamage),
            win_condition: Box::new(Undecided),
        })
    }

    /// Use `resolver` to resolve combat.
    #[must_use]
    pub fn with_combat_resolver(mut self, resolver: impl CombatResolver<P> + 'static) -> Self {
        self.combat_resolver = Box::new(resolver);
        self
    }

    /// Use `condition` to determine the winner.
    #[must_use]
    pub fn with_win_condition(mut self, condition: impl WinCondition<P> + 'static) -> Self {
        self.win_condition = Box::new(condition);
        self
    }

    // === Lifecycle ===

    /// Deal opening hands and begin player 0's first turn.
    ///
    /// Each player draws its format's opening hand; player 0 then starts its
    /// turn and its board is refreshed. No events are emitted.
    pub fn start_game(&mut self) -> Result<()> {
        if self.phases.is_started() {
            return Err(SessionError::AlreadyStarted);
        }

        self.phases.start();
        for (seat, player) in self.players.iter_mut() {
            player.draw_cards(self.format.initial_draw(seat));
        }

        let active = self.phases.active_player();
        self.players[active].start_turn();
        self.board.refresh_player(active);

        info!(player = %active, turn = self.phases.turn_number(), "game started");
        Ok(())
    }

    /// Apply one action.
    ///
    /// On success returns every event the action appended, in emission
    /// order. On rejection nothing was mutated and nothing was emitted.
    pub fn handle_action(&mut self, action: &GameAction) -> Outcome {
        debug!(player = %action.player, action = %action.kind.action_type(), "handling action");

        let mark = self.log.watermark();
        match self.dispatch(action) {
            Ok(()) => {
                let events = self.log.since(mark);
                debug!(events = events.len(), "action applied");
                Outcome::Applied(events)
            }
            Err(reason) => {
                debug_assert_eq!(self.log.watermark(), mark, "rejected action emitted events");
                debug!(%reason, "action rejected");
                Outcome::Rejected(reason)
            }
        }
    }

    fn dispatch(&mut self, action: &GameAction) -> std::result::Result<(), Rejection> {
        let player = action.player;
        match &action.kind {
            ActionKind::Pass => self.pass(player),
            ActionKind::PlayResource => self.play_resource(player),
            ActionKind::PlayCard { to_play } => self.play_card(player, to_play),
            ActionKind::DeclareAttackers { attackers } => self.declare_attackers(player, attackers),
            ActionKind::DeclareBlockers { blockers } => self.declare_blockers(player, blockers),
            ActionKind::Mulligan
            | ActionKind::DistributeDamage
            | ActionKind::Concede
            | ActionKind::ActivateAbility => {
                Err(Rejection::UnknownAction(action.kind.action_type()))
            }
        }
    }

    // === Handlers ===
    //
    // Every precondition is checked before the first mutation.

    fn pass(&mut self, player: PlayerId) -> std::result::Result<(), Rejection> {
        self.ensure_seated(player)?;

        let phase = self.phases.phase();
        if phase.ends_turn_on_pass() {
            self.require_active(ActionType::Pass, player)?;
            self.next_turn();
            Ok(())
        } else if phase == Phase::Combat {
            // Defender declines to block.
            self.require_defending(ActionType::Pass, player)?;
            self.resolve_combat();
            Ok(())
        } else {
            Err(Rejection::WrongPhase {
                action: ActionType::Pass,
                phase,
            })
        }
    }

    fn play_resource(&mut self, player: PlayerId) -> std::result::Result<(), Rejection> {
        self.require_active(ActionType::PlayResource, player)?;

        let seat = &mut self.players[player];
        if !seat.can_play_resource() {
            return Err(Rejection::ResourceUnavailable(player));
        }

        let resource = Resource::single();
        seat.play_resource(resource);
        self.log.push(GameEvent::PlayResource {
            player,
            played: resource,
        });
        Ok(())
    }

    fn play_card(&mut self, player: PlayerId, query: &str) -> std::result::Result<(), Rejection> {
        self.require_active(ActionType::PlayCard, player)?;

        let card = self.players[player].query_hand(query).ok_or_else(|| {
            Rejection::UnresolvedReference {
                query: query.to_owned(),
            }
        })?;

        self.log.push(GameEvent::PlayCard {
            player,
            played: card.to_json(),
        });

        let mut table = Table::new(&mut self.board, &mut self.log, player);
        self.players[player].play_card(card, &mut table);
        Ok(())
    }

    fn declare_attackers(
        &mut self,
        player: PlayerId,
        queries: &[String],
    ) -> std::result::Result<(), Rejection> {
        self.require_active(ActionType::DeclareAttackers, player)?;
        self.require_phase(ActionType::DeclareAttackers, Phase::FirstMain)?;

        let mut attackers = Vec::with_capacity(queries.len());
        for query in queries {
            match self.resolve_unit(query, player) {
                Some(id) => attackers.push(id),
                None => debug!(%query, "dropping unresolved attacker"),
            }
        }

        self.combat.declare_attackers(attackers);
        self.phases.enter_combat();

        let attacking = self
            .combat
            .attackers()
            .iter()
            .map(|&id| self.unit_json(id))
            .collect();
        self.log.push(GameEvent::Attack { attacking });
        Ok(())
    }

    fn declare_blockers(
        &mut self,
        player: PlayerId,
        queries: &[(String, String)],
    ) -> std::result::Result<(), Rejection> {
        self.require_defending(ActionType::DeclareBlockers, player)?;
        self.require_phase(ActionType::DeclareBlockers, Phase::Combat)?;

        let attacking_player = player.opponent();
        let mut pairs = Vec::with_capacity(queries.len());
        for (attacker_query, blocker_query) in queries {
            let attacker = self.resolve_unit(attacker_query, attacking_player);
            let blocker = self.resolve_unit(blocker_query, player);
            match (attacker, blocker) {
                (Some(attacker), Some(blocker)) => pairs.push((attacker, blocker)),
                _ => debug!(%attacker_query, %blocker_query, "dropping unresolved block"),
            }
        }

        self.combat.declare_blockers(pairs);

        let blocks = self
            .combat
            .blockers()
            .iter()
            .map(|&(attacker, blocker)| (self.unit_json(attacker), self.unit_json(blocker)))
            .collect();
        self.log.push(GameEvent::Block { blocks });

        self.resolve_combat();
        Ok(())
    }

    // === Transitions ===

    fn resolve_combat(&mut self) {
        let mut context = CombatContext {
            players: &mut self.players,
            board: &mut self.board,
            attacking_player: self.phases.active_player(),
        };
        let events = self.combat_resolver.resolve_combat(&self.combat, &mut context);
        self.log.extend(events);
        self.phases.finish_combat();
    }

    fn next_turn(&mut self) {
        let active = self.phases.advance_turn();
        self.combat.clear();
        self.players[active].start_turn();
        self.board.refresh_player(active);

        let turn_number = self.phases.turn_number();
        info!(player = %active, turn = turn_number, "turn started");
        self.log.push(GameEvent::TurnStart {
            player: active,
            turn_number,
        });
    }

    // === Preconditions ===

    fn ensure_seated(&self, player: PlayerId) -> std::result::Result<(), Rejection> {
        if !self.phases.is_started() {
            return Err(Rejection::NotStarted);
        }
        if !self.players.contains(player) {
            return Err(Rejection::UnknownPlayer(player));
        }
        Ok(())
    }

    fn require_active(
        &self,
        action: ActionType,
        player: PlayerId,
    ) -> std::result::Result<(), Rejection> {
        self.ensure_seated(player)?;
        let expected = self.phases.active_player();
        if player != expected {
            return Err(Rejection::WrongTurn {
                action,
                player,
                expected,
            });
        }
        Ok(())
    }

    fn require_defending(
        &self,
        action: ActionType,
        player: PlayerId,
    ) -> std::result::Result<(), Rejection> {
        self.ensure_seated(player)?;
        let expected = self.phases.defending_player();
        if player != expected {
            return Err(Rejection::WrongTurn {
                action,
                player,
                expected,
            });
        }
        Ok(())
    }

    fn require_phase(&self, action: ActionType, phase: Phase) -> std::result::Result<(), Rejection> {
        let current = self.phases.phase();
        if current != phase {
            return Err(Rejection::WrongPhase {
                action,
                phase: current,
            });
        }
        Ok(())
    }

    // === Resolution helpers ===

    /// Resolve `query` against `owner`'s zone using `owner`'s collaborator.
    fn resolve_unit(&self, query: &str, owner: PlayerId) -> Option<EntityId> {
        let zone = self.board.player_entities(owner);
        self.players[owner]
            .query_cards(query, zone)
            .filter(|&id| zone.contains(id))
    }

    fn unit_json(&self, id: EntityId) -> Value {
        self.board.get(id).map_or(Value::Null, Entity::to_json)
    }

    fn describe_zone(&self, player: PlayerId) -> String {
        self.board
            .player_entities(player)
            .iter()
            .map(|(_, entity)| entity.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // === Board ===

    /// Put a unit on the board outside of any action.
    ///
    /// Fails with [`SessionError::UnknownPlayer`] if the unit's owner is not
    /// seated; no handle is allocated in that case.
    pub fn add_entity(&mut self, entity: P::Entity) -> Result<EntityId> {
        let owner = entity.owner();
        self.board
            .add_entity(entity)
            .ok_or(SessionError::UnknownPlayer(owner))
    }

    /// Take a unit off the board. No-op if absent.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<P::Entity> {
        self.board.remove_entity(id)
    }

    // === Queries ===

    /// The winner, as decided by the configured [`WinCondition`].
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.win_condition.winner(&self.players, &self.board)
    }

    #[must_use]
    pub fn is_player_turn(&self, player: PlayerId) -> bool {
        self.phases.is_player_turn(player)
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phases.is_started()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phases.phase()
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.phases.active_player()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.phases.turn_number()
    }

    #[must_use]
    pub fn format(&self) -> &GameFormat {
        &self.format
    }

    #[must_use]
    pub fn board(&self) -> &Board<P::Entity> {
        &self.board
    }

    #[must_use]
    pub fn combat(&self) -> &CombatState {
        &self.combat
    }

    /// Full event history.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.log
    }

    /// The player in `seat`, if seated.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&P> {
        self.players.contains(seat).then(|| &self.players[seat])
    }

    pub fn player_mut(&mut self, seat: PlayerId) -> Option<&mut P> {
        if self.players.contains(seat) {
            Some(&mut self.players[seat])
        } else {
            None
        }
    }

    /// Units owned by the active player.
    #[must_use]
    pub fn current_player_entities(&self) -> ZoneView<'_, P::Entity> {
        self.board.player_entities(self.phases.active_player())
    }

    /// Human-readable digest of the game from `player`'s point of view.
    pub fn player_summary(&self, player: PlayerId) -> Result<String> {
        if !self.players.contains(player) {
            return Err(SessionError::UnknownPlayer(player));
        }

        let me = &self.players[player];
        let opponent = &self.players[player.opponent()];
        let whose = if self.is_player_turn(player) {
            "your turn"
        } else {
            "your opponent's turn"
        };

        Ok(format!(
            "Turn {} - it is {}\n\
             You have {} life and your opponent has {} life.\n\
             {}\n\
             Your Board\n\
             {}\n\
             Enemy Board\n\
             {}",
            self.phases.turn_number(),
            whose,
            me.life(),
            opponent.life(),
            me.summarize(),
            self.describe_zone(player),
            self.describe_zone(player.opponent()),
        ))
    }
}
