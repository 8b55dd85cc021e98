//! Task completion and the item-installation sub-flow.

use log::info;

use crate::catalog;
use crate::error::{GameError, GameResult};
use crate::model::{CustomizationRecord, GameState, PendingCustomization};

impl GameState {
    /// Pays for and completes a task.
    ///
    /// Tasks that unlock an item leave a `PendingCustomization` behind and return
    /// `Ok(None)`; the skin picker takes over from there. Other tasks return the
    /// completion message.
    pub fn attempt_complete_task(&mut self, task_id: &str, now_ms: u64) -> GameResult<Option<String>> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| GameError::TaskNotFound(task_id.to_string()))?;
        if self.tasks[idx].is_completed {
            return Err(GameError::TaskAlreadyCompleted(self.tasks[idx].task.task_name.clone()));
        }
        if self.pending_customization.is_some() {
            return Err(GameError::CustomizationPending);
        }

        let cost = self.tasks[idx].task.cost;
        self.profile_mut()?.spend(cost)?;

        let task = &mut self.tasks[idx];
        task.is_completed = true;
        task.completed_at = Some(now_ms);
        info!("task {} completed for {} {}", task.id, cost.amount, cost.cost_type);

        match task.task.unlocks_item_id.clone() {
            Some(item_id) => {
                self.pending_customization = Some(PendingCustomization {
                    task_id: task.id.clone(),
                    item_id,
                    wing_id: task.task.wing_id.clone(),
                });
                Ok(None)
            }
            None => Ok(Some(format!("Tarefa \"{}\" concluída!", task.task.task_name))),
        }
    }

    /// Installs the pending item with the chosen skin.
    pub fn finalize_customization(&mut self, item_id: &str, skin_id: &str) -> GameResult<String> {
        let pending = self
            .pending_customization
            .as_ref()
            .ok_or(GameError::NoPendingCustomization)?;
        if pending.item_id != item_id {
            return Err(GameError::ItemMismatch {
                expected: pending.item_id.clone(),
                got: item_id.to_string(),
            });
        }
        let (_, item) =
            catalog::item_def(item_id).ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;
        if !item.has_skin(skin_id) {
            return Err(GameError::UnknownSkin {
                item: item_id.to_string(),
                skin: skin_id.to_string(),
            });
        }
        let user_id = self.user.as_ref().map(|u| u.id.clone()).ok_or(GameError::NoProfile)?;
        let wing_id = pending.wing_id.clone();

        let freshly_unlocked = match self.customization.iter_mut().find(|c| c.item_id == item_id) {
            Some(existing) => {
                existing.is_unlocked = true;
                existing.skin_equipped = Some(skin_id.to_string());
                false
            }
            None => {
                self.customization.push(CustomizationRecord {
                    user_id,
                    item_id: item_id.to_string(),
                    item_wing: wing_id,
                    is_unlocked: true,
                    skin_equipped: Some(skin_id.to_string()),
                });
                true
            }
        };
        self.pending_customization = None;
        if freshly_unlocked {
            let stars = self.config.stars_for_item_unlock as i64;
            self.update_star_count(stars)?;
        }
        info!("item {item_id} installed with skin {skin_id}");
        Ok(format!("Item \"{item_id}\" instalado com a skin \"{skin_id}\"!"))
    }

    /// Closes the picker. The task stays completed and can be resumed later.
    pub fn cancel_customization(&mut self) {
        if let Some(p) = self.pending_customization.take() {
            info!("installation of {} postponed", p.item_id);
        }
    }

    pub fn resume_customization(&mut self, task_id: &str) -> GameResult<()> {
        if self.pending_customization.is_some() {
            return Err(GameError::CustomizationPending);
        }
        let task = self
            .task(task_id)
            .ok_or_else(|| GameError::TaskNotFound(task_id.to_string()))?;
        let pending = match (&task.task.unlocks_item_id, task.is_completed) {
            (Some(item), true) if self.record_for(item).is_none() => PendingCustomization {
                task_id: task.id.clone(),
                item_id: item.clone(),
                wing_id: task.task.wing_id.clone(),
            },
            _ => return Err(GameError::NoPendingCustomization),
        };
        self.pending_customization = Some(pending);
        Ok(())
    }

    /// Completed tasks whose unlocked item has not been installed yet.
    pub fn awaiting_installation(&self) -> impl Iterator<Item = &str> + '_ {
        self.tasks
            .iter()
            .filter(|t| t.is_completed)
            .filter(|t| {
                t.task
                    .unlocks_item_id
                    .as_deref()
                    .is_some_and(|item| self.record_for(item).is_none())
            })
            .map(|t| t.id.as_str())
    }
}
