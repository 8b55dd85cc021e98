use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::{FLASK_HEIGHT, FLASK_WIDTH, SLIME_RADIUS};
use crate::model::{FlaskSlime, Slime};

#[derive(Properties, PartialEq, Clone)]
pub struct FlaskViewProps {
    pub slimes: Vec<FlaskSlime>,
    pub collection: Vec<Slime>,
    pub spawner_charge: u32,
    pub spawner_max: u32,
    pub on_spawn: Callback<()>,
}

fn draw(canvas: &HtmlCanvasElement, slimes: &[FlaskSlime]) {
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        None => return,
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.set_fill_style_str("#0e1116");
    ctx.fill_rect(0.0, 0.0, w, h);
    // glass
    ctx.set_stroke_style_str("#2f3641");
    ctx.set_line_width(3.0);
    ctx.stroke_rect(1.5, 1.5, w - 3.0, h - 3.0);

    for s in slimes {
        let r = SLIME_RADIUS * (1.0 + 0.15 * (s.level.saturating_sub(1)) as f64);
        let (cx, cy) = (s.position.x, s.position.y);
        ctx.begin_path();
        ctx.set_fill_style_str(s.color.hex());
        ctx.ellipse(cx, cy + r * 0.1, r, r * 0.85, 0.0, 0.0, std::f64::consts::PI * 2.0).ok();
        ctx.fill();
        ctx.set_stroke_style_str("#0d1117");
        ctx.set_line_width(1.5);
        ctx.stroke();
        // eyes
        ctx.set_fill_style_str("#0d1117");
        for dx in [-0.3, 0.3] {
            ctx.begin_path();
            ctx.arc(cx + dx * r, cy - r * 0.1, r * 0.12, 0.0, std::f64::consts::PI * 2.0).ok();
            ctx.fill();
        }
        if s.level > 1 {
            ctx.set_fill_style_str("#ffffff");
            ctx.set_font("10px sans-serif");
            ctx.fill_text(&format!("N{}", s.level), cx - 6.0, cy + r * 0.55).ok();
        }
    }
}

#[function_component]
pub fn FlaskView(props: &FlaskViewProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let slimes = props.slimes.clone();
        use_effect_with(slimes, move |slimes| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw(&canvas, slimes);
            }
            || ()
        });
    }

    let spawn_cb = {
        let cb = props.on_spawn.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let empty = props.spawner_charge == 0;

    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:8px;">
        <canvas ref={canvas_ref} id="flask" width={FLASK_WIDTH.to_string()} height={FLASK_HEIGHT.to_string()}
            style="border-radius:0 0 40px 40px; background:#0e1116;"></canvas>
        <div style="display:flex; align-items:center; gap:10px;">
            <button id="slime-spawner-btn" onclick={spawn_cb} disabled={empty}>{"Soltar Slime"}</button>
            <span style="font-size:12px; opacity:0.8; font-variant-numeric:tabular-nums;">{ format!("Carga: {}/{}", props.spawner_charge, props.spawner_max) }</span>
        </div>
        <div style="display:flex; gap:6px; flex-wrap:wrap; font-size:11px;">
            { for props.collection.iter().map(|s| html!{
                <span key={s.id.clone()} style={format!("padding:2px 6px; border-radius:10px; border:1px solid {}; color:{};", s.color.hex(), s.color.hex())}>
                    { format!("{} N{} ×{}", s.color, s.level, s.quantity) }
                </span>
            }) }
        </div>
    </div>}
}
