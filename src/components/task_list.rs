use web_sys::Element;
use yew::prelude::*;

use crate::catalog;
use crate::model::{Profile, Task};

#[derive(Properties, PartialEq, Clone)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub profile: Profile,
    /// Completed tasks whose item still waits for a skin.
    pub awaiting_install: Vec<String>,
    pub on_complete: Callback<String>,
    pub on_resume: Callback<String>,
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_name().split_whitespace().any(|c| c == class)
}

#[function_component]
pub fn TaskList(props: &TaskListProps) -> Html {
    // One delegated handler for the whole list; buttons carry the task id in data-task-id.
    let onclick = {
        let on_complete = props.on_complete.clone();
        let on_resume = props.on_resume.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            let Some(task_id) = target.get_attribute("data-task-id") else {
                return;
            };
            if has_class(&target, "complete-task-btn") {
                on_complete.emit(task_id);
            } else if has_class(&target, "resume-install-btn") {
                on_resume.emit(task_id);
            }
        })
    };

    html! {
        <div id="task-list" {onclick} style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; min-width:260px;">
            <div style="font-weight:600;">{"Tarefas"}</div>
            { for props.tasks.iter().map(|t| {
                let cost = format!("{} {}", t.task.cost.amount, t.task.cost.cost_type);
                let waiting = props.awaiting_install.contains(&t.id);
                let action = if waiting {
                    html!{ <button class="resume-install-btn" data-task-id={t.id.clone()}>{"Instalar item"}</button> }
                } else if t.is_completed {
                    html!{ <span style="font-size:12px; color:#3fb950;">{"✔ Concluída"}</span> }
                } else {
                    let short = !props.profile.can_afford(t.task.cost);
                    let title = if short { "Saldo insuficiente" } else { "" };
                    html!{ <button class="complete-task-btn" data-task-id={t.id.clone()} {title}
                        style={ if short { "opacity:0.6;" } else { "" } }>{ format!("Concluir ({})", cost) }</button> }
                };
                let wing_name = catalog::wing_def(&t.task.wing_id).map(|w| w.wing_name).unwrap_or("?");
                let opacity = if t.is_completed && !waiting { "0.6" } else { "1" };
                html!{
                    <div key={t.id.clone()} class="task-item" style={format!("display:flex; flex-direction:column; gap:4px; background:#1c2128; border:1px solid #30363d; border-radius:6px; padding:6px 8px; opacity:{};", opacity)}>
                        <div style="display:flex; justify-content:space-between; gap:8px;">
                            <span style="font-weight:600;">{ t.task.task_name.clone() }</span>
                            <span style="font-size:11px; opacity:0.6;">{ wing_name }</span>
                        </div>
                        <div style="font-size:12px; opacity:0.8;">{ t.task.task_description.clone() }</div>
                        { if let Some(item) = &t.task.unlocks_item_id {
                            html!{ <div style="font-size:11px; color:#a371f7;">{ format!("Desbloqueia: {}", item) }</div> }
                        } else { html!{} } }
                        { action }
                    </div>
                }
            }) }
        </div>
    }
}
