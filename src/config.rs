//! Tunable numbers for the lab economy and the flask.

pub const MAX_ENERGY: u32 = 100;
pub const INITIAL_ENERGY: u32 = MAX_ENERGY;
pub const DIAMONDS_INITIAL: u64 = 5;
pub const GOMA_COINS_INITIAL: u64 = 100;
/// Mock sessions start with this many times the base balances.
pub const STARTING_MULTIPLIER: u64 = 10;
/// Enough to open the first wing right away.
pub const INITIAL_STARS: u32 = 10;
/// Stars awarded when a freshly unlocked item is installed.
pub const STARS_FOR_ITEM_UNLOCK: u32 = 5;

pub const SPAWNER_CHARGE_INITIAL: u32 = 15;
pub const SPAWNER_CHARGE_MAX: u32 = 30;

// Flask geometry in canvas pixels.
pub const FLASK_WIDTH: f64 = 320.0;
pub const FLASK_HEIGHT: f64 = 420.0;
pub const SLIME_RADIUS: f64 = 18.0;
pub const GRAVITY: f64 = 900.0;

pub const FLASK_STORAGE_KEY: &str = "slimes_in_flask";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub max_energy: u32,
    pub initial_energy: u32,
    pub starting_multiplier: u64,
    pub initial_stars: u32,
    pub stars_for_item_unlock: u32,
    pub spawner_charge_initial: u32,
    pub spawner_charge_max: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_energy: MAX_ENERGY,
            initial_energy: INITIAL_ENERGY,
            starting_multiplier: STARTING_MULTIPLIER,
            initial_stars: INITIAL_STARS,
            stars_for_item_unlock: STARS_FOR_ITEM_UNLOCK,
            spawner_charge_initial: SPAWNER_CHARGE_INITIAL,
            spawner_charge_max: SPAWNER_CHARGE_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_mirrors_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.max_energy, MAX_ENERGY);
        assert!(cfg.initial_energy <= cfg.max_energy);
        assert!(cfg.spawner_charge_initial <= cfg.spawner_charge_max);
        assert_eq!(cfg.stars_for_item_unlock, STARS_FOR_ITEM_UNLOCK);
    }
}
