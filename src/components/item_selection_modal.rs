use yew::prelude::*;

use crate::catalog;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemSelectionModalProps {
    /// Item waiting for a skin; the modal is hidden when `None`.
    pub item_id: Option<String>,
    pub on_choose: Callback<(String, String)>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ItemSelectionModal(props: &ItemSelectionModalProps) -> Html {
    let Some(item_id) = props.item_id.clone() else {
        return html! {};
    };
    let Some((wing, item)) = catalog::item_def(&item_id) else {
        return html! {};
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div id="item-selection-modal" style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{ format!("Instalar {}", item.name) }</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Depois"}</button>
            </div>
            <div style="font-size:12px; opacity:0.75;">{ format!("Ala: {}", wing.wing_name) }</div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                { for item.skins.iter().map(|skin| {
                    let cb = props.on_choose.clone();
                    let item_id = item_id.clone();
                    let skin_id = skin.id.to_string();
                    let onclick = Callback::from(move |_| cb.emit((item_id.clone(), skin_id.clone())));
                    html!{ <button class="skin-option" data-skin-id={skin.id} {onclick} style="flex:1; padding:10px;">{ skin.name }</button> }
                }) }
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Escolha a aparência do item. Fechar adia a instalação; o item fica aguardando na lista de tarefas."}</div>
        </div>
    </div>}
}
