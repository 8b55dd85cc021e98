use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::password_issues;

#[derive(Clone, Debug, PartialEq)]
pub enum AuthRequest {
    SignIn {
        login: String,
        password: String,
    },
    SignUp {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    },
}

#[derive(Properties, PartialEq, Clone)]
pub struct AuthPanelProps {
    pub error: Option<String>,
    pub on_submit: Callback<AuthRequest>,
}

fn value_of(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|i| i.value())
        .unwrap_or_default()
}

#[function_component]
pub fn AuthPanel(props: &AuthPanelProps) -> Html {
    let sign_up_mode = use_state(|| false);
    let tooltip = use_state(Vec::<&'static str>::new);
    let login_ref = use_node_ref();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    let toggle_mode = {
        let sign_up_mode = sign_up_mode.clone();
        let tooltip = tooltip.clone();
        Callback::from(move |_| {
            sign_up_mode.set(!*sign_up_mode);
            tooltip.set(Vec::new());
        })
    };
    let on_password_input = {
        let sign_up_mode = sign_up_mode.clone();
        let tooltip = tooltip.clone();
        let password_ref = password_ref.clone();
        Callback::from(move |_: InputEvent| {
            if *sign_up_mode {
                tooltip.set(password_issues(&value_of(&password_ref)));
            }
        })
    };
    let submit = {
        let sign_up_mode = sign_up_mode.clone();
        let on_submit = props.on_submit.clone();
        let (login_ref, username_ref, password_ref, confirm_ref) = (
            login_ref.clone(),
            username_ref.clone(),
            password_ref.clone(),
            confirm_ref.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let req = if *sign_up_mode {
                AuthRequest::SignUp {
                    username: value_of(&username_ref),
                    email: value_of(&login_ref),
                    password: value_of(&password_ref),
                    confirm_password: value_of(&confirm_ref),
                }
            } else {
                AuthRequest::SignIn {
                    login: value_of(&login_ref),
                    password: value_of(&password_ref),
                }
            };
            on_submit.emit(req);
        })
    };

    let field = "padding:6px 8px; background:#0d1117; border:1px solid #30363d; border-radius:6px; color:inherit;";
    html! {<div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:420px; width:90%;">
        <h2 style="margin:0 0 12px 0; font-size:22px; color:#a371f7; text-align:center;">{"Slimes Lab"}</h2>
        <form onsubmit={submit} style="display:flex; flex-direction:column; gap:8px;">
            { if *sign_up_mode {
                html!{ <input ref={username_ref} placeholder="Nome de usuário" style={field} /> }
            } else { html!{} } }
            <input ref={login_ref} placeholder={ if *sign_up_mode { "Email" } else { "Email ou nome de usuário" } } style={field} />
            <input ref={password_ref} type="password" placeholder="Senha" oninput={on_password_input} style={field} />
            { if *sign_up_mode {
                html!{ <input ref={confirm_ref} type="password" placeholder="Confirmar senha" style={field} /> }
            } else { html!{} } }
            { if !tooltip.is_empty() {
                html!{ <ul style="margin:0 0 0 18px; padding:0; font-size:11px; color:#d29922;">{ for tooltip.iter().map(|t| html!{ <li>{ *t }</li> }) }</ul> }
            } else { html!{} } }
            { if let Some(err) = &props.error {
                html!{ <div style="font-size:12px; color:#f85149;">{ err.clone() }</div> }
            } else { html!{} } }
            <button type="submit">{ if *sign_up_mode { "Cadastrar" } else { "Entrar" } }</button>
        </form>
        <div style="margin-top:12px; font-size:12px; text-align:center;">
            <button onclick={toggle_mode} style="background:none; border:none; color:#58a6ff; cursor:pointer;">
                { if *sign_up_mode { "Já tenho conta" } else { "Criar conta" } }
            </button>
        </div>
    </div>}
}
