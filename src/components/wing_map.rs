use std::collections::BTreeSet;
use yew::prelude::*;

use crate::catalog::{WING_DEFS, wing_element_id};
use crate::model::CustomizationRecord;
use crate::state::wings::{stars_missing, wing_css_class};

#[derive(Properties, PartialEq, Clone)]
pub struct ItemRowProps {
    pub name: &'static str,
    pub skin: Option<String>,
    pub installed: bool,
}

#[function_component(ItemRow)]
pub fn item_row(props: &ItemRowProps) -> Html {
    let color = if props.installed { "#3fb950" } else { "#30363d" };
    let label = match (&props.skin, props.installed) {
        (Some(skin), true) => format!("{} · {}", props.name, skin),
        (None, true) => props.name.to_string(),
        (_, false) => format!("{} (bloqueado)", props.name),
    };
    html! { <div style="display:flex; align-items:center; gap:8px; margin:3px 0; font-size:12px;"> <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border:1px solid #30363d; border-radius:2px;", color)}></span> <span>{ label }</span> </div> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct WingMapProps {
    pub unlocked_wings: BTreeSet<String>,
    pub customization: Vec<CustomizationRecord>,
    pub stars: u32,
}

#[function_component]
pub fn WingMap(props: &WingMapProps) -> Html {
    html! {<div id="lab-wings" style="display:flex; gap:10px; flex-wrap:wrap;">
        { for WING_DEFS.iter().map(|wing| {
            let unlocked = props.unlocked_wings.contains(wing.key);
            let style = if unlocked {
                "background:rgba(22,27,34,0.9); border:1px solid #3fb950;"
            } else {
                "background:rgba(13,17,23,0.95); border:1px dashed #30363d; filter:grayscale(0.8); opacity:0.7;"
            };
            html!{
                <div id={wing_element_id(wing.key)} key={wing.key} class={classes!("wing", wing_css_class(unlocked))}
                    style={format!("{} border-radius:8px; padding:8px 10px; min-width:170px;", style)}>
                    <div style="font-weight:600; margin-bottom:4px;">{ wing.wing_name }</div>
                    { if unlocked {
                        html!{ <>{ for wing.items.iter().map(|item| {
                            let record = props.customization.iter().find(|c| c.item_id == item.id && c.is_unlocked);
                            html!{ <ItemRow name={item.name} skin={record.and_then(|r| r.skin_equipped.clone())} installed={record.is_some()} /> }
                        }) }</> }
                    } else {
                        html!{ <div style="font-size:11px; color:#8b949e;">{ format!("Faltam {} estrelas", stars_missing(wing, props.stars)) }</div> }
                    } }
                </div>
            }
        }) }
    </div>}
}
