//! Core data models for Slimes Lab and the session reducer.
//! Every mutation goes through `GameAction`; the engine itself lives in `crate::state`.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Display-name hint; falls back to the local part of the email.
    pub username: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub star_count: u32,
    pub diamond_count: u64,
    pub goma_coins: u64,
    pub current_energy: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlimeColor {
    Roxo,
    Azul,
    Verde,
    Amarelo,
}

impl SlimeColor {
    pub const ALL: [SlimeColor; 4] = [Self::Roxo, Self::Azul, Self::Verde, Self::Amarelo];

    pub fn hex(self) -> &'static str {
        match self {
            Self::Roxo => "#a371f7",
            Self::Azul => "#58a6ff",
            Self::Verde => "#3fb950",
            Self::Amarelo => "#d29922",
        }
    }
}

impl fmt::Display for SlimeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slime {
    pub id: String,
    pub color: SlimeColor,
    pub level: u32,
    /// How many of this color/level the player holds.
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizationRecord {
    pub user_id: String,
    pub item_id: String,
    pub item_wing: String,
    pub is_unlocked: bool,
    pub skin_equipped: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    GomaCoins,
    Diamonds,
    Energy,
}

impl fmt::Display for CostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GomaCoins => "Goma Coins",
            Self::Diamonds => "Diamantes",
            Self::Energy => "Energia",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCost {
    pub cost_type: CostType,
    pub amount: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDef {
    pub task_name: String,
    pub task_description: String,
    pub wing_id: String,
    pub cost: TaskCost,
    pub unlocks_item_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub is_completed: bool,
    /// Milliseconds since the Unix epoch.
    pub completed_at: Option<u64>,
    pub task: TaskDef,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A creature currently sitting in the flask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlaskSlime {
    pub id: u32,
    pub level: u32,
    pub color: SlimeColor,
    pub position: Position,
    #[serde(skip)]
    pub velocity_y: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingCustomization {
    pub task_id: String,
    pub item_id: String,
    pub wing_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    pub user: Option<User>,
    pub profile: Option<Profile>,
    pub slimes: Vec<Slime>,
    pub customization: Vec<CustomizationRecord>,
    pub tasks: Vec<Task>,
    /// Wing keys whose fog has lifted. Only ever grows.
    pub unlocked_wings: BTreeSet<String>,
    pub spawner_charge: u32,
    pub current_slimes: Vec<FlaskSlime>,
    pub next_flask_id: u32,
    pub pending_customization: Option<PendingCustomization>,
    pub notice: Option<Notice>,
    /// Bumped on every accepted action so views can key effects on it.
    pub version: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            user: None,
            profile: None,
            slimes: Vec::new(),
            customization: Vec::new(),
            tasks: Vec::new(),
            unlocked_wings: BTreeSet::new(),
            spawner_charge: 0,
            current_slimes: Vec::new(),
            next_flask_id: 1,
            pending_customization: None,
            notice: None,
            version: 0,
        }
    }

    /// Populates the session with the offline starter data for `user`.
    pub fn initialize(&mut self, user: User) {
        let cfg = self.config;
        let username = user
            .username
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| user.email.split('@').next().unwrap_or_default().to_string());

        self.profile = Some(Profile {
            id: user.id.clone(),
            username,
            star_count: cfg.initial_stars,
            diamond_count: crate::config::DIAMONDS_INITIAL * cfg.starting_multiplier,
            goma_coins: crate::config::GOMA_COINS_INITIAL * cfg.starting_multiplier,
            current_energy: cfg.initial_energy.min(cfg.max_energy),
        });

        self.slimes = SlimeColor::ALL
            .iter()
            .enumerate()
            .map(|(i, &color)| Slime {
                id: format!("mock-slime-{}", i + 1),
                color,
                level: 1,
                quantity: 1,
            })
            .collect();

        self.customization = vec![CustomizationRecord {
            user_id: user.id.clone(),
            item_id: "mesa_principal".into(),
            item_wing: "fusion_bay".into(),
            is_unlocked: true,
            skin_equipped: Some("tech_neon".into()),
        }];

        self.tasks = starter_tasks();
        self.spawner_charge = cfg.spawner_charge_initial;
        self.pending_customization = None;
        self.unlocked_wings.clear();
        self.user = Some(user);

        info!(
            "session initialized for {}",
            self.profile.as_ref().map(|p| p.username.as_str()).unwrap_or_default()
        );
        self.check_wing_unlock();
    }

    pub fn profile_mut(&mut self) -> GameResult<&mut Profile> {
        self.profile.as_mut().ok_or(GameError::NoProfile)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn record_for(&self, item_id: &str) -> Option<&CustomizationRecord> {
        self.customization.iter().find(|c| c.item_id == item_id)
    }

    fn can_regenerate(&self) -> bool {
        let energy_full = self
            .profile
            .as_ref()
            .is_none_or(|p| p.current_energy >= self.config.max_energy);
        self.spawner_charge < self.config.spawner_charge_max || !energy_full
    }

    fn notify(&mut self, kind: NoticeKind, text: String) {
        self.notice = Some(Notice { kind, text });
    }
}

fn starter_tasks() -> Vec<Task> {
    let goma = |amount| TaskCost {
        cost_type: CostType::GomaCoins,
        amount,
    };
    let task = |id: &str, name: &str, desc: &str, wing: &str, cost, unlocks: Option<&str>| Task {
        id: id.into(),
        is_completed: false,
        completed_at: None,
        task: TaskDef {
            task_name: name.into(),
            task_description: desc.into(),
            wing_id: wing.into(),
            cost,
            unlocks_item_id: unlocks.map(Into::into),
        },
    };
    vec![
        task(
            "mock-task-1",
            "Limpar Frasco",
            "Gaste 100 Goma Coins para limpar o frasco.",
            "fusion_bay",
            goma(100),
            None,
        ),
        task(
            "mock-task-2",
            "Fundir Slimes",
            "Fundir 2 Slimes Roxo Nível 1.",
            "fusion_bay",
            goma(200),
            Some("acelerador_quantico"),
        ),
        task(
            "mock-task-3",
            "Coletar Goma",
            "Coletar 500 Goma Coins.",
            "astro_garden",
            goma(500),
            Some("estufa_astro"),
        ),
    ]
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    Initialize(User),
    CompleteTask { task_id: String, now_ms: u64 },
    FinalizeCustomization { item_id: String, skin_id: String },
    CancelCustomization,
    /// Reopens the skin picker for a completed task whose item was never installed.
    ResumeCustomization { task_id: String },
    SpawnSlime { color: SlimeColor, x: f64 },
    /// Periodic trickle of spawner charge and energy.
    Regenerate { charge: u32, energy: i64 },
    StepFlask { dt: f64 },
    RestoreFlask(Vec<FlaskSlime>),
    DismissNotice,
    /// Drops the whole session; the flask snapshot is cleared by the auth adapter.
    SignOut,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        // Ticks that would change nothing hand back the same Rc, so nothing re-renders.
        match &action {
            StepFlask { .. } if self.flask_settled() => return self,
            Regenerate { .. } if !self.can_regenerate() => return self,
            _ => {}
        }
        let mut new = (*self).clone();
        let outcome: GameResult<Option<String>> = match action {
            Initialize(user) => {
                new.initialize(user);
                Ok(None)
            }
            CompleteTask { task_id, now_ms } => new.attempt_complete_task(&task_id, now_ms),
            FinalizeCustomization { item_id, skin_id } => new
                .finalize_customization(&item_id, &skin_id)
                .map(Some),
            CancelCustomization => {
                new.cancel_customization();
                Ok(None)
            }
            ResumeCustomization { task_id } => new.resume_customization(&task_id).map(|_| None),
            SpawnSlime { color, x } => new.spawn_slime(color, x).map(|_| None),
            Regenerate { charge, energy } => {
                new.recharge_spawner(charge);
                if new.profile.is_some() {
                    new.update_energy(energy).map(|_| None)
                } else {
                    Ok(None)
                }
            }
            StepFlask { dt } => {
                new.step_flask(dt);
                Ok(None)
            }
            RestoreFlask(slimes) => {
                new.restore_flask(slimes);
                Ok(None)
            }
            DismissNotice => {
                new.notice = None;
                Ok(None)
            }
            SignOut => {
                let mut fresh = GameState::new(new.config);
                fresh.version = new.version;
                new = fresh;
                Ok(None)
            }
        };
        match outcome {
            Ok(Some(msg)) => new.notify(NoticeKind::Info, msg),
            Ok(None) => {}
            Err(err) => {
                warn!("action rejected: {err}");
                // Rejected actions leave the previous state intact apart from the notice.
                let mut kept = (*self).clone();
                kept.notify(NoticeKind::Error, err.to_string());
                kept.version = kept.version.wrapping_add(1);
                return Rc::new(kept);
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::auth::OfflineAuth;
    use crate::config::{GOMA_COINS_INITIAL, MAX_ENERGY, STARTING_MULTIPLIER};

    pub(crate) fn started() -> GameState {
        let mut gs = GameState::default();
        gs.initialize(OfflineAuth::mock_user());
        gs
    }

    fn dispatch(state: GameState, action: GameAction) -> GameState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn initialize_populates_mock_session() {
        let gs = started();
        let p = gs.profile.as_ref().unwrap();
        assert_eq!(p.username, "DrCROK_Offline");
        assert_eq!(p.goma_coins, GOMA_COINS_INITIAL * STARTING_MULTIPLIER);
        assert_eq!(p.current_energy, MAX_ENERGY);
        assert_eq!(gs.slimes.len(), 4);
        assert!(gs.slimes.iter().all(|s| s.level == 1 && s.quantity == 1));
        assert_eq!(gs.customization.len(), 1);
        assert_eq!(gs.tasks.len(), 3);
        assert!(gs.tasks.iter().all(|t| !t.is_completed));
        assert_eq!(gs.spawner_charge, 15);
        assert!(gs.unlocked_wings.contains("fusion_bay"));
    }

    #[test]
    fn username_falls_back_to_email_local_part() {
        let mut gs = GameState::default();
        gs.initialize(User {
            id: "u1".into(),
            email: "cientista@slimes.lab".into(),
            username: None,
        });
        assert_eq!(gs.profile.unwrap().username, "cientista");
    }

    #[test]
    fn rejected_action_keeps_state_and_reports() {
        let gs = started();
        let before = gs.profile.clone();
        let after = dispatch(
            gs,
            GameAction::CompleteTask {
                task_id: "missing".into(),
                now_ms: 1,
            },
        );
        assert_eq!(after.profile, before);
        let notice = after.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("missing"));
    }

    #[test]
    fn completing_plain_task_posts_info_notice() {
        let after = dispatch(
            started(),
            GameAction::CompleteTask {
                task_id: "mock-task-1".into(),
                now_ms: 42,
            },
        );
        let notice = after.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.text, "Tarefa \"Limpar Frasco\" concluída!");
    }

    #[test]
    fn idle_flask_step_returns_same_state() {
        let state = Rc::new(started());
        let stepped = state.clone().reduce(GameAction::StepFlask { dt: 0.016 });
        assert!(Rc::ptr_eq(&state, &stepped));
    }

    #[test]
    fn regenerate_refills_spawner_and_energy() {
        let mut gs = started();
        gs.profile.as_mut().unwrap().current_energy = 10;
        let charge = gs.spawner_charge;
        let after = dispatch(gs, GameAction::Regenerate { charge: 2, energy: 5 });
        assert_eq!(after.spawner_charge, charge + 2);
        assert_eq!(after.profile.unwrap().current_energy, 15);
    }

    #[test]
    fn regenerate_when_full_is_a_no_op() {
        let mut gs = started();
        gs.spawner_charge = gs.config.spawner_charge_max;
        let state = Rc::new(gs);
        let after = state.clone().reduce(GameAction::Regenerate { charge: 1, energy: 1 });
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn sign_out_resets_session() {
        let after = dispatch(started(), GameAction::SignOut);
        assert!(after.user.is_none());
        assert!(after.profile.is_none());
        assert!(after.tasks.is_empty());
        assert!(after.version > 0);
    }

    #[test]
    fn dismiss_clears_notice() {
        let mut gs = started();
        gs.notify(NoticeKind::Info, "oi".into());
        let after = dispatch(gs, GameAction::DismissNotice);
        assert!(after.notice.is_none());
    }
}
