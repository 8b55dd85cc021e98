use log::debug;

use crate::error::{GameError, GameResult};
use crate::model::{CostType, GameState, Profile, TaskCost};

impl Profile {
    pub fn balance(&self, cost_type: CostType) -> u64 {
        match cost_type {
            CostType::GomaCoins => self.goma_coins,
            CostType::Diamonds => self.diamond_count,
            CostType::Energy => self.current_energy as u64,
        }
    }

    pub fn can_afford(&self, cost: TaskCost) -> bool {
        self.balance(cost.cost_type) >= cost.amount
    }

    /// Charges `cost` in full or not at all.
    pub fn spend(&mut self, cost: TaskCost) -> GameResult<()> {
        let available = self.balance(cost.cost_type);
        let remaining = available
            .checked_sub(cost.amount)
            .ok_or(GameError::InsufficientFunds {
                cost_type: cost.cost_type,
                required: cost.amount,
                available,
            })?;
        match cost.cost_type {
            CostType::GomaCoins => self.goma_coins = remaining,
            CostType::Diamonds => self.diamond_count = remaining,
            // remaining <= current_energy, so it fits
            CostType::Energy => self.current_energy = remaining as u32,
        }
        debug!("spent {} {}, {} left", cost.amount, cost.cost_type, remaining);
        Ok(())
    }
}

impl GameState {
    /// Adds `delta` to energy, clamped into `0..=max_energy`.
    pub fn update_energy(&mut self, delta: i64) -> GameResult<u32> {
        let max = self.config.max_energy;
        let profile = self.profile_mut()?;
        let next = (profile.current_energy as i64 + delta).clamp(0, max as i64) as u32;
        profile.current_energy = next;
        debug!("energy -> {next}");
        Ok(next)
    }

    /// Adds `delta` to the star count (floor 0) and re-checks wing unlocks.
    pub fn update_star_count(&mut self, delta: i64) -> GameResult<u32> {
        let profile = self.profile_mut()?;
        let next = (profile.star_count as i64 + delta).clamp(0, u32::MAX as i64) as u32;
        profile.star_count = next;
        debug!("stars -> {next}");
        self.check_wing_unlock();
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_ENERGY;
    use crate::model::tests::started;

    fn goma(amount: u64) -> TaskCost {
        TaskCost {
            cost_type: CostType::GomaCoins,
            amount,
        }
    }

    #[test]
    fn energy_is_clamped_at_max() {
        let mut gs = started();
        assert_eq!(gs.update_energy(MAX_ENERGY as i64).unwrap(), MAX_ENERGY);
        assert_eq!(gs.profile.as_ref().unwrap().current_energy, MAX_ENERGY);
    }

    #[test]
    fn energy_never_goes_negative() {
        let mut gs = started();
        assert_eq!(gs.update_energy(-(MAX_ENERGY as i64) - 50).unwrap(), 0);
        assert_eq!(gs.update_energy(7).unwrap(), 7);
    }

    #[test]
    fn counters_need_a_profile() {
        let mut gs = GameState::default();
        assert_eq!(gs.update_energy(1), Err(GameError::NoProfile));
        assert_eq!(gs.update_star_count(1), Err(GameError::NoProfile));
    }

    #[test]
    fn stars_floor_at_zero() {
        let mut gs = started();
        assert_eq!(gs.update_star_count(-1000).unwrap(), 0);
    }

    #[test]
    fn spend_is_all_or_nothing() {
        let mut gs = started();
        let profile = gs.profile.as_mut().unwrap();
        let before = profile.goma_coins;
        let err = profile.spend(goma(before + 1)).unwrap_err();
        assert!(matches!(err, GameError::InsufficientFunds { required, .. } if required == before + 1));
        assert_eq!(profile.goma_coins, before);
        profile.spend(goma(before)).unwrap();
        assert_eq!(profile.goma_coins, 0);
    }

    #[test]
    fn every_cost_type_is_checked() {
        let mut gs = started();
        let profile = gs.profile.as_mut().unwrap();
        let diamonds = TaskCost {
            cost_type: CostType::Diamonds,
            amount: profile.diamond_count + 1,
        };
        assert!(!profile.can_afford(diamonds));
        let energy = TaskCost {
            cost_type: CostType::Energy,
            amount: 10,
        };
        profile.spend(energy).unwrap();
        assert_eq!(profile.current_energy, MAX_ENERGY - 10);
    }
}
