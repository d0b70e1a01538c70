//! The world: actor arena, player, round progression and the tick protocol.
//!
//! `World` owns every actor in insertion order, the player ship, the score
//! ledger and the seeded RNG. Completely headless; a driver feeds it one
//! optional key per tick and reads back `WorldSnapshot`s.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use inflators_ai::profiles::roll_goodie_drop;
use inflators_core::config::SimConfig;
use inflators_core::constants::{
    GOODIE_DROP_ODDS, GOODIE_SCORE_BONUS, KILLS_PER_ROUND, TORPEDO_GOODIE_AMOUNT,
};
use inflators_core::enums::{GoodieKind, HitCause, Key, ProjectileKind, Shooter, Species, TickStatus};
use inflators_core::events::AudioEvent;
use inflators_core::hud::{format_status_line, HudStats};
use inflators_core::ledger::ScoreLedger;
use inflators_core::state::WorldSnapshot;
use inflators_core::types::{ActorId, Grid, GridPos};

use crate::actor::{Actor, ActorKind};
use crate::alien::{Alien, HitOutcome};
use crate::goodie::Goodie;
use crate::player::Player;
use crate::projectile::Projectile;
use crate::systems;
use crate::systems::snapshot::SnapshotCounters;

pub struct World {
    config: SimConfig,
    grid: Grid,
    rng: ChaCha8Rng,
    /// Insertion-ordered arena. A slot is only `None` while its actor is
    /// taken out to act.
    actors: Vec<Option<Actor>>,
    player: Option<Player>,
    next_actor_id: u64,
    round: u32,
    killed_this_round: u32,
    tick: u64,
    ledger: ScoreLedger,
    audio_events: Vec<AudioEvent>,
    hud_text: String,
    despawn_buffer: Vec<ActorId>,
    last_act_count: usize,
}

impl World {
    /// Create an empty world. Call `init` to place the player.
    pub fn new(config: SimConfig) -> Self {
        Self {
            grid: config.grid(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            actors: Vec::new(),
            player: None,
            next_actor_id: 0,
            round: config.starting_round.max(1),
            killed_this_round: 0,
            tick: 0,
            ledger: ScoreLedger::new(config.starting_lives),
            audio_events: Vec::new(),
            hud_text: String::new(),
            despawn_buffer: Vec::new(),
            last_act_count: 0,
            config,
        }
    }

    /// Create the player ship at its starting position.
    pub fn init(&mut self) {
        self.player = Some(Player::new(self.grid));
        self.refresh_hud();
        log::info!(
            "World initialized: round {}, {} ship(s) left",
            self.round,
            self.ledger.lives()
        );
    }

    /// Destroy the player and then every actor, newest first.
    pub fn tear_down(&mut self) {
        self.player = None;
        let count = self.actors.len();
        while self.actors.pop().is_some() {}
        log::debug!("World torn down, {count} actor(s) removed");
    }

    /// Run one simulation tick with at most one key of input.
    pub fn advance_one_tick(&mut self, input: Option<Key>) -> TickStatus {
        if self.player.is_none() {
            log::warn!("advance_one_tick called before init; creating the player");
            self.init();
        }
        self.tick += 1;

        // 1. Spawning
        if self.config.auto_spawn {
            self.run_spawner();
        }
        // 2. HUD text
        self.refresh_hud();
        // 3. Player
        if let Some(mut player) = self.player.take() {
            player.act(self, input);
            self.player = Some(player);
        }
        // 4. Actors present now; anything spawned during the pass waits a tick
        let count = self.actors.len();
        let mut acted = 0;
        for index in 0..count {
            if self.act_slot(index) {
                acted += 1;
            }
        }
        self.last_act_count = acted;
        // 5. Reap
        let reaped = systems::cleanup::run(&mut self.actors, &mut self.despawn_buffer);
        if reaped > 0 {
            log::trace!("Reaped {reaped} actor(s)");
        }
        // 6. Round progression
        if self.killed_this_round == KILLS_PER_ROUND * self.round {
            self.round += 1;
            self.killed_this_round = 0;
            log::info!("Round {} begins", self.round);
        }
        // 7. Player death
        let player_dead = self.player.as_ref().is_some_and(|p| !p.is_alive());
        if player_dead {
            self.ledger.dec_lives();
            self.killed_this_round = 0;
            log::info!(
                "Player died on tick {}, {} ship(s) left",
                self.tick,
                self.ledger.lives()
            );
            return TickStatus::PlayerDied;
        }
        TickStatus::Continue
    }

    fn act_slot(&mut self, index: usize) -> bool {
        let Some(mut actor) = self.actors.get_mut(index).and_then(Option::take) else {
            return false;
        };
        let alive = actor.is_alive();
        if alive {
            actor.act(self);
        }
        self.actors[index] = Some(actor);
        alive
    }

    fn run_spawner(&mut self) {
        let live_aliens = self.live_alien_count();
        let plan = systems::spawner::run(
            &mut self.rng,
            self.grid,
            self.round,
            self.killed_this_round,
            live_aliens,
        );
        if let Some((species, position)) = plan.alien {
            let id = self.spawn_alien(species, position);
            log::debug!("Spawned {species:?} {id:?} at column {}", position.x);
        }
        if let Some(position) = plan.star {
            self.spawn_star(position);
        }
    }

    fn refresh_hud(&mut self) {
        let (energy_pct, torpedoes) = self
            .player
            .as_ref()
            .map_or((0.0, 0), |p| (p.energy().pct(), p.torpedoes()));
        self.hud_text = format_status_line(&HudStats {
            score: self.ledger.score(),
            round: self.round,
            energy_pct,
            torpedoes,
            ships: self.ledger.lives(),
        });
    }

    // --- Spawning ---

    fn add_actor(&mut self, position: GridPos, kind: ActorKind) -> ActorId {
        let id = ActorId(self.next_actor_id);
        self.next_actor_id += 1;
        self.actors.push(Some(Actor::new(id, position, kind)));
        id
    }

    /// Place a new alien scaled to the current round.
    pub fn spawn_alien(&mut self, species: Species, position: GridPos) -> ActorId {
        let alien = Alien::new(species, self.round);
        self.add_actor(position, ActorKind::Alien(alien))
    }

    /// Place a goodie whose lifetime is set by the current round.
    pub fn spawn_goodie(&mut self, kind: GoodieKind, position: GridPos) -> ActorId {
        let goodie = Goodie::new(kind, self.round);
        self.add_actor(position, ActorKind::Goodie(goodie))
    }

    pub fn spawn_star(&mut self, position: GridPos) -> ActorId {
        self.add_actor(position, ActorKind::Star)
    }

    /// Place a projectile exactly at `position`, without sound.
    pub fn spawn_projectile(
        &mut self,
        position: GridPos,
        kind: ProjectileKind,
        shooter: Shooter,
    ) -> ActorId {
        self.add_actor(position, ActorKind::Projectile(Projectile::new(kind, shooter)))
    }

    /// Fire from `from`: player shots appear one row above the ship, alien
    /// shots one row below the alien.
    pub fn launch_projectile(
        &mut self,
        from: GridPos,
        kind: ProjectileKind,
        shooter: Shooter,
    ) -> ActorId {
        let (offset, cue) = match (shooter, kind) {
            (Shooter::Player, ProjectileKind::Bullet) => (IVec2::Y, AudioEvent::PlayerFiredPrimary),
            (Shooter::Player, ProjectileKind::Torpedo) => {
                (IVec2::Y, AudioEvent::PlayerFiredSecondary)
            }
            (Shooter::Alien, kind) => (IVec2::NEG_Y, AudioEvent::EnemyFired { kind }),
        };
        self.audio_events.push(cue);
        self.spawn_projectile(from + offset, kind, shooter)
    }

    // --- Queries ---

    /// Live aliens occupying `position`, in insertion order.
    pub fn colliding_aliens(&self, position: GridPos) -> Vec<ActorId> {
        self.actors
            .iter()
            .flatten()
            .filter(|a| a.is_alive() && a.is_alien() && a.position() == position)
            .map(Actor::id)
            .collect()
    }

    /// The player, if alive and at `position`.
    pub fn colliding_player(&self, position: GridPos) -> Option<&Player> {
        self.player
            .as_ref()
            .filter(|p| p.is_alive() && p.position() == position)
    }

    /// Live projectiles in flight that were fired by aliens.
    pub fn num_alien_fired_projectiles(&self) -> usize {
        self.actors
            .iter()
            .flatten()
            .filter(|a| a.is_alive())
            .filter_map(Actor::as_projectile)
            .filter(|p| p.shooter() == Shooter::Alien)
            .count()
    }

    pub fn live_alien_count(&self) -> usize {
        self.actors
            .iter()
            .flatten()
            .filter(|a| a.is_alive() && a.is_alien())
            .count()
    }

    // --- Damage and rewards ---

    /// Credit one alien kill toward the round quota.
    pub fn increase_kill_count(&mut self) {
        self.killed_this_round += 1;
    }

    /// Damage the alien `id`. A projectile kill credits the kill, pays its
    /// worth and may drop a goodie; a ram kill does none of that.
    pub fn damage_alien(&mut self, id: ActorId, points: i32, cause: HitCause) {
        let Some(actor) = self.actors.iter_mut().flatten().find(|a| a.id() == id) else {
            return;
        };
        let position = actor.position();
        let body = &mut actor.body;
        let ActorKind::Alien(alien) = &mut actor.kind else {
            return;
        };
        let outcome = alien.take_hit(body, points, cause);
        let species = alien.species();
        let worth = alien.worth();

        match outcome {
            HitOutcome::Survived => {
                self.audio_events.push(AudioEvent::EnemyHit { species });
            }
            HitOutcome::Destroyed => {
                self.increase_kill_count();
                self.audio_events.push(AudioEvent::EnemyDied { species });
                self.ledger.increase_score(worth);
                log::debug!("{species:?} {id:?} destroyed, +{worth}");
                if self.rng.gen_ratio(1, GOODIE_DROP_ODDS) {
                    if let Some(kind) = roll_goodie_drop(species, &mut self.rng) {
                        self.spawn_goodie(kind, position);
                    }
                }
            }
            HitOutcome::Rammed => {
                log::debug!("{species:?} {id:?} rammed the player");
            }
            HitOutcome::Ignored => {}
        }
    }

    /// Damage the player ship, if present.
    pub fn damage_player(&mut self, points: i32, cause: HitCause) {
        if let Some(player) = self.player.as_mut() {
            player.damage(points, cause, &mut self.audio_events);
        }
    }

    /// Apply a collected goodie's bonus and effect.
    pub(crate) fn award_goodie(&mut self, kind: GoodieKind) {
        self.ledger.increase_score(GOODIE_SCORE_BONUS);
        self.audio_events.push(AudioEvent::GoodieCollected { kind });
        match kind {
            GoodieKind::FreeShip => self.ledger.inc_lives(),
            GoodieKind::Energy => {
                if let Some(player) = self.player.as_mut() {
                    player.restore_full_energy();
                }
            }
            GoodieKind::Torpedo => {
                if let Some(player) = self.player.as_mut() {
                    player.add_torpedoes(TORPEDO_GOODIE_AMOUNT);
                }
            }
        }
        log::debug!("Goodie collected: {kind:?}");
    }

    // --- Accessors ---

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn killed_this_round(&self) -> u32 {
        self.killed_this_round
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut ScoreLedger {
        &mut self.ledger
    }

    /// Status line as of the start of the latest tick.
    pub fn hud_text(&self) -> &str {
        &self.hud_text
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    pub fn player_position(&self) -> Option<GridPos> {
        self.player.as_ref().map(Player::position)
    }

    /// Actors in insertion order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().flatten()
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors().find(|a| a.id() == id)
    }

    pub fn alien_mut(&mut self, id: ActorId) -> Option<&mut Alien> {
        self.actors
            .iter_mut()
            .flatten()
            .find(|a| a.id() == id)
            .and_then(Actor::as_alien_mut)
    }

    /// Mutable access to an actor record (for staging tests).
    #[cfg(test)]
    pub(crate) fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().flatten().find(|a| a.id() == id)
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub(crate) fn audio_mut(&mut self) -> &mut Vec<AudioEvent> {
        &mut self.audio_events
    }

    /// Audio cues queued since the last drain.
    pub fn drain_audio_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.audio_events)
    }

    /// Number of actors that acted during the latest tick's act pass.
    pub fn last_act_count(&self) -> usize {
        self.last_act_count
    }

    /// Build a renderer snapshot, draining queued audio cues into it.
    pub fn snapshot(&mut self) -> WorldSnapshot {
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            SnapshotCounters {
                tick: self.tick,
                round: self.round,
                killed_this_round: self.killed_this_round,
            },
            &self.actors,
            self.player.as_ref(),
            &self.ledger,
            &self.hud_text,
            audio_events,
        )
    }
}
