use log::info;

use crate::catalog::{WING_DEFS, WingDef};
use crate::model::GameState;

impl GameState {
    /// Lifts the fog from every wing whose threshold the star count has reached.
    /// Returns the keys unlocked by this call; wings are never locked again.
    pub fn check_wing_unlock(&mut self) -> Vec<&'static str> {
        let Some(stars) = self.profile.as_ref().map(|p| p.star_count) else {
            return Vec::new();
        };
        let mut opened = Vec::new();
        for wing in WING_DEFS {
            if stars >= wing.unlock_stars && self.unlocked_wings.insert(wing.key.to_string()) {
                info!("Ala {} desbloqueada com {} estrelas!", wing.wing_name, stars);
                opened.push(wing.key);
            }
        }
        opened
    }
}

/// CSS class projected onto a wing's panel.
pub fn wing_css_class(unlocked: bool) -> &'static str {
    if unlocked { "unlocked" } else { "fog-overlay" }
}

/// Stars still missing before `wing` opens.
pub fn stars_missing(wing: &WingDef, stars: u32) -> u32 {
    wing.unlock_stars.saturating_sub(stars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::wing_def;
    use crate::model::tests::started;

    #[test]
    fn first_wing_opens_at_start() {
        let gs = started();
        assert!(gs.unlocked_wings.contains("fusion_bay"));
        assert!(!gs.unlocked_wings.contains("astro_garden"));
    }

    #[test]
    fn reaching_threshold_unlocks_and_stays_unlocked() {
        let mut gs = started();
        let need = wing_def("astro_garden").unwrap().unlock_stars;
        let have = gs.profile.as_ref().unwrap().star_count;
        gs.update_star_count((need - have) as i64).unwrap();
        assert!(gs.unlocked_wings.contains("astro_garden"));

        gs.update_star_count(-(need as i64)).unwrap();
        assert!(gs.check_wing_unlock().is_empty());
        assert!(gs.unlocked_wings.contains("astro_garden"));
        assert!(gs.unlocked_wings.contains("fusion_bay"));
    }

    #[test]
    fn repeated_checks_report_nothing_new() {
        let mut gs = started();
        gs.update_star_count(1000).unwrap();
        assert!(gs.check_wing_unlock().is_empty());
        assert_eq!(gs.unlocked_wings.len(), WING_DEFS.len());
    }

    #[test]
    fn check_without_profile_is_a_no_op() {
        let mut gs = GameState::default();
        assert!(gs.check_wing_unlock().is_empty());
        assert!(gs.unlocked_wings.is_empty());
    }

    #[test]
    fn projection_classes() {
        assert_eq!(wing_css_class(true), "unlocked");
        assert_eq!(wing_css_class(false), "fog-overlay");
        let cryo = wing_def("cryo_vault").unwrap();
        assert_eq!(stars_missing(cryo, 10), cryo.unlock_stars - 10);
        assert_eq!(stars_missing(cryo, 1000), 0);
    }
}
