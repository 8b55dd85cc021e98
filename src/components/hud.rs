use crate::util::format_count;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub username: String,
    pub goma_coins: u64,
    pub diamonds: u64,
    pub energy: u32,
    pub max_energy: u32,
    pub stars: u32,
    pub on_sign_out: Callback<()>,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let sign_out_cb = {
        let cb = props.on_sign_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let energy_pct = if props.max_energy == 0 {
        0.0
    } else {
        props.energy as f64 / props.max_energy as f64 * 100.0
    };
    html! {
        <div id="hud" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <span style="font-weight:600;">{ props.username.clone() }</span>
                <button onclick={sign_out_cb} style="padding:2px 8px; font-size:12px;">{"Sair"}</button>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🪙"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Goma Coins"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ format_count(props.goma_coins) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"💎"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Diamantes"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ format_count(props.diamonds) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f0c000;", icon_style)}>{"⭐"}</span>
                <span style={format!("{} color:#f0c000;", label_style)}>{"Estrelas"}</span>
                <span style={format!("{} color:#f0c000;", value_style)}>{ props.stars }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#3fb950;", icon_style)}>{"⚡"}</span>
                <span style={format!("{} color:#3fb950;", label_style)}>{"Energia"}</span>
                <span style={format!("{} color:#3fb950;", value_style)}>{ format!("{}/{}", props.energy, props.max_energy) }</span>
            </div>
            <div style="height:6px; background:#0d1117; border-radius:3px; overflow:hidden;">
                <div style={format!("height:100%; width:{:.0}%; background:#3fb950;", energy_pct)}></div>
            </div>
        </div>
    }
}
