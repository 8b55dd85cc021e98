//! The flask: creatures dropped by the spawner, settled by a fixed-step fall.

use log::{debug, info};

use crate::config::{FLASK_HEIGHT, FLASK_WIDTH, GRAVITY, SLIME_RADIUS};
use crate::error::{GameError, GameResult};
use crate::model::{FlaskSlime, GameState, Position, Slime, SlimeColor};

const FLOOR_Y: f64 = FLASK_HEIGHT - SLIME_RADIUS;

impl FlaskSlime {
    pub fn is_resting(&self) -> bool {
        self.velocity_y == 0.0 && self.position.y >= FLOOR_Y
    }
}

impl GameState {
    /// Spends one spawner charge and drops a level-1 slime at horizontal position `x`.
    pub fn spawn_slime(&mut self, color: SlimeColor, x: f64) -> GameResult<u32> {
        if self.spawner_charge == 0 {
            return Err(GameError::SpawnerEmpty);
        }
        self.spawner_charge -= 1;
        let id = self.next_flask_id;
        self.next_flask_id = self.next_flask_id.wrapping_add(1);
        let x = if x.is_finite() { x } else { FLASK_WIDTH / 2.0 };
        self.current_slimes.push(FlaskSlime {
            id,
            level: 1,
            color,
            position: Position {
                x: x.clamp(SLIME_RADIUS, FLASK_WIDTH - SLIME_RADIUS),
                y: SLIME_RADIUS,
            },
            velocity_y: 0.0,
        });
        self.collect(color, 1);
        debug!("dropped {color} slime #{id}, {} charges left", self.spawner_charge);
        Ok(id)
    }

    /// Advances falling slimes by `dt` seconds. Returns true if anything moved.
    pub fn step_flask(&mut self, dt: f64) -> bool {
        if !(dt > 0.0) {
            return false;
        }
        let mut moved = false;
        for s in self.current_slimes.iter_mut().filter(|s| !s.is_resting()) {
            s.velocity_y += GRAVITY * dt;
            s.position.y += s.velocity_y * dt;
            if s.position.y >= FLOOR_Y {
                s.position.y = FLOOR_Y;
                s.velocity_y = 0.0;
            }
            moved = true;
        }
        moved
    }

    /// Adds one creature to the collection, stacking onto an entry of the same color and level.
    fn collect(&mut self, color: SlimeColor, level: u32) {
        match self.slimes.iter_mut().find(|s| s.color == color && s.level == level) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => {
                let id = format!("slime-{}-{}", color, level).to_lowercase();
                self.slimes.push(Slime {
                    id,
                    color,
                    level,
                    quantity: 1,
                });
            }
        }
    }

    pub fn recharge_spawner(&mut self, amount: u32) {
        let max = self.config.spawner_charge_max;
        self.spawner_charge = self.spawner_charge.saturating_add(amount).min(max);
    }

    /// Replaces the flask contents with a saved snapshot.
    pub fn restore_flask(&mut self, slimes: Vec<FlaskSlime>) {
        let max_id = slimes.iter().map(|s| s.id).max().unwrap_or(0);
        self.next_flask_id = self.next_flask_id.max(max_id.wrapping_add(1));
        self.current_slimes = slimes
            .into_iter()
            .map(|mut s| {
                s.position.x = s.position.x.clamp(SLIME_RADIUS, FLASK_WIDTH - SLIME_RADIUS);
                s.position.y = s.position.y.clamp(SLIME_RADIUS, FLOOR_Y);
                s.velocity_y = 0.0;
                s
            })
            .collect();
        info!("restored {} slimes into the flask", self.current_slimes.len());
    }

    /// Whether every slime has landed; the app saves the snapshot at that point.
    pub fn flask_settled(&self) -> bool {
        self.current_slimes.iter().all(|s| s.is_resting())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::started;

    #[test]
    fn spawn_consumes_charge() {
        let mut gs = started();
        let charge = gs.spawner_charge;
        let id = gs.spawn_slime(SlimeColor::Verde, 100.0).unwrap();
        assert_eq!(gs.spawner_charge, charge - 1);
        assert_eq!(gs.current_slimes.len(), 1);
        assert_eq!(gs.current_slimes[0].id, id);
        assert_eq!(gs.current_slimes[0].level, 1);
    }

    #[test]
    fn spawned_slimes_stack_in_collection() {
        let mut gs = started();
        gs.spawn_slime(SlimeColor::Roxo, 10.0).unwrap();
        gs.spawn_slime(SlimeColor::Roxo, 20.0).unwrap();
        let roxo: Vec<_> = gs.slimes.iter().filter(|s| s.color == SlimeColor::Roxo).collect();
        assert_eq!(roxo.len(), 1);
        assert_eq!(roxo[0].quantity, 3);
        assert_eq!(gs.slimes.len(), 4);
    }

    #[test]
    fn empty_spawner_refuses() {
        let mut gs = started();
        gs.spawner_charge = 0;
        assert_eq!(gs.spawn_slime(SlimeColor::Roxo, 10.0), Err(GameError::SpawnerEmpty));
        assert!(gs.current_slimes.is_empty());
        assert_eq!(gs.spawner_charge, 0);
    }

    #[test]
    fn spawn_position_is_clamped_into_flask() {
        let mut gs = started();
        gs.spawn_slime(SlimeColor::Azul, -500.0).unwrap();
        gs.spawn_slime(SlimeColor::Azul, f64::NAN).unwrap();
        assert_eq!(gs.current_slimes[0].position.x, SLIME_RADIUS);
        assert_eq!(gs.current_slimes[1].position.x, FLASK_WIDTH / 2.0);
    }

    #[test]
    fn slimes_fall_and_land_on_floor() {
        let mut gs = started();
        gs.spawn_slime(SlimeColor::Amarelo, 50.0).unwrap();
        assert!(!gs.flask_settled());
        let mut steps = 0;
        while gs.step_flask(1.0 / 60.0) {
            steps += 1;
            assert!(steps < 10_000);
        }
        assert!(gs.flask_settled());
        assert_eq!(gs.current_slimes[0].position.y, FLOOR_Y);
    }

    #[test]
    fn recharge_is_capped() {
        let mut gs = started();
        gs.recharge_spawner(1000);
        assert_eq!(gs.spawner_charge, gs.config.spawner_charge_max);
    }

    #[test]
    fn restore_continues_id_sequence() {
        let mut gs = started();
        gs.restore_flask(vec![FlaskSlime {
            id: 41,
            level: 2,
            color: SlimeColor::Roxo,
            position: Position { x: 60.0, y: 9_999.0 },
            velocity_y: 0.0,
        }]);
        assert_eq!(gs.current_slimes[0].position.y, FLOOR_Y);
        assert_eq!(gs.spawn_slime(SlimeColor::Azul, 10.0).unwrap(), 42);
    }
}
