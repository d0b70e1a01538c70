//! Simulation constants and tuning parameters.

// --- Playfield ---

/// Default playfield width in cells.
pub const GRID_WIDTH: i32 = 30;

/// Default playfield height in cells.
pub const GRID_HEIGHT: i32 = 40;

/// Row the player ship starts on.
pub const PLAYER_START_ROW: i32 = 1;

// --- Player ---

pub const PLAYER_FULL_ENERGY: i32 = 50;

/// Torpedoes in stock at the start of each life.
pub const PLAYER_START_TORPEDOES: u32 = 0;

/// Flat energy loss when the player rams (or is rammed by) aliens.
pub const RAM_DAMAGE: i32 = 15;

/// Fire latch clears every this many player ticks.
pub const PLAYER_FIRE_PERIOD: u32 = 2;

pub const STARTING_LIVES: u32 = 3;

// --- Projectiles ---

pub const BULLET_DAMAGE: i32 = 2;
pub const TORPEDO_DAMAGE: i32 = 8;

// --- Aliens ---

pub const NACHLING_BASE_ENERGY: f64 = 5.0;
pub const WEALTHY_NACHLING_BASE_ENERGY: f64 = 8.0;
pub const SMALLBOT_BASE_ENERGY: f64 = 12.0;

pub const NACHLING_WORTH: u64 = 1000;
pub const WEALTHY_NACHLING_WORTH: u64 = 1200;
pub const SMALLBOT_WORTH: u64 = 1500;

/// Aliens move on every other tick of their own cadence.
pub const ALIEN_MOVE_PERIOD: u32 = 2;

/// 1-in-N chance that a projectile kill rolls the goodie-drop policy.
pub const GOODIE_DROP_ODDS: u32 = 3;

/// 1-in-N chance of a diagonal step while descending.
pub const NACHLING_DIAGONAL_ODDS: u32 = 3;

/// Patrol half-sweep is randomised only when the border is farther than this.
pub const NACHLING_MAX_HALF_MOVE: i32 = 3;

/// 1-in-N chance per patrol act of breaking off into a return pass.
pub const NACHLING_BREAK_OFF_ODDS: u32 = 20;

/// Fire chance numerator: P(fire) = 1 / (floor(N / round) + 1).
pub const NACHLING_FIRE_SCALE: u32 = 10;

/// 1-in-N chance per act that a wealthy nachling starts malfunctioning.
pub const MALFUNCTION_ODDS: u32 = 200;

/// Number of inert ticks per malfunction.
pub const MALFUNCTION_TICKS: u32 = 30;

/// 1-in-N chance of an evasive diagonal step after a hit.
pub const SMALLBOT_EVADE_ODDS: u32 = 3;

/// Torpedo chance numerator: P(torpedo) = 1 / (floor(N / round) + 1).
pub const SMALLBOT_TORPEDO_SCALE: u32 = 100;

/// Alien-fired projectile cap is this many per round number.
pub const ALIEN_PROJECTILES_PER_ROUND: usize = 2;

// --- Goodies ---

/// Lifetime = floor(N / round) + GOODIE_LIFETIME_BASE ticks.
pub const GOODIE_LIFETIME_SCALE: u32 = 100;
pub const GOODIE_LIFETIME_BASE: u32 = 30;

/// Goodies descend one row every this many ticks.
pub const GOODIE_FALL_PERIOD: u32 = 3;

/// Brightness floor added to the lifetime fraction.
pub const GOODIE_MIN_BRIGHTNESS: f64 = 0.2;

pub const GOODIE_SCORE_BONUS: u64 = 5000;
pub const TORPEDO_GOODIE_AMOUNT: u32 = 5;

// --- Spawning / rounds ---

/// Kills needed per round number to advance a round.
pub const KILLS_PER_ROUND: u32 = 4;

/// On-screen alien limit is floor(BASE + SCALE * round).
pub const ALIEN_LIMIT_BASE: f64 = 2.0;
pub const ALIEN_LIMIT_PER_ROUND: f64 = 0.5;

/// Percent chance a spawned alien is from the nachling family.
pub const NACHLING_FAMILY_PERCENT: u32 = 70;

/// Percent chance a nachling-family spawn is the wealthy variant.
pub const WEALTHY_PERCENT: u32 = 20;

/// Percent chance per tick of spawning a star.
pub const STAR_PERCENT: u32 = 33;

// --- HUD ---

pub const HUD_SCORE_DIGITS: usize = 7;
pub const HUD_ROUND_DIGITS: usize = 2;
pub const HUD_TORPEDO_DIGITS: usize = 3;
pub const HUD_SHIPS_DIGITS: usize = 2;
