use yew::prelude::*;

use crate::model::{Notice, NoticeKind};

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component]
pub fn NoticeBanner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let border = match notice.kind {
        NoticeKind::Info => "#3fb950",
        NoticeKind::Error => "#f85149",
    };
    let dismiss_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style={format!("position:absolute; left:50%; bottom:28px; transform:translateX(-50%); background:rgba(22,27,34,0.95); border:1px solid {}; border-radius:10px; padding:10px 14px; display:flex; gap:10px; align-items:center; min-width:240px; z-index:60;", border)}>
        <div style="font-size:13px; line-height:1.25; flex:1;">{ notice.text.clone() }</div>
        <button onclick={dismiss_cb} style="padding:2px 8px;">{"OK"}</button>
    </div> }
}
