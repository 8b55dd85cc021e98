use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    auth_panel::{AuthPanel, AuthRequest},
    flask_view::FlaskView,
    hud::Hud,
    item_selection_modal::ItemSelectionModal,
    notice_banner::NoticeBanner,
    task_list::TaskList,
    wing_map::WingMap,
};
use crate::auth::OfflineAuth;
use crate::config::FLASK_WIDTH;
use crate::model::{GameAction, GameState, SlimeColor};
use crate::storage;
use crate::util::now_ms;

const SIM_STEP_MS: i32 = 16;
const RECHARGE_EVERY_MS: i32 = 10_000;
const ENERGY_REGEN: i64 = 1;
/// Password of the built-in offline account.
const MOCK_PASSWORD: &str = "Slimes#Lab1";

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::default);
    let auth = use_mut_ref(|| OfflineAuth::with_mock_account(MOCK_PASSWORD));
    let auth_error = use_state(|| None::<String>);

    // Boot straight into the offline session and bring back the saved flask.
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            game.dispatch(GameAction::Initialize(OfflineAuth::mock_user()));
            match storage::load_local_slimes() {
                Ok(Some(slimes)) => game.dispatch(GameAction::RestoreFlask(slimes)),
                Ok(None) => {}
                Err(e) => warn!("ignoring flask snapshot: {e}"),
            }
            || ()
        });
    }

    // Flask simulation + spawner recharge tickers
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let sim_game = game.clone();
            let sim = Closure::wrap(Box::new(move || {
                sim_game.dispatch(GameAction::StepFlask {
                    dt: SIM_STEP_MS as f64 / 1000.0,
                });
            }) as Box<dyn FnMut()>);
            let recharge = Closure::wrap(Box::new(move || {
                game.dispatch(GameAction::Regenerate {
                    charge: 1,
                    energy: ENERGY_REGEN,
                });
            }) as Box<dyn FnMut()>);
            let mut ids = Vec::new();
            if let Some(win) = &window {
                for (cb, every) in [(&sim, SIM_STEP_MS), (&recharge, RECHARGE_EVERY_MS)] {
                    if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        every,
                    ) {
                        ids.push(id);
                    }
                }
            }
            move || {
                if let Some(win) = window {
                    for id in ids {
                        win.clear_interval_with_handle(id);
                    }
                }
                drop(sim);
                drop(recharge);
            }
        });
    }

    // Persist the flask whenever its population changes or everything has landed.
    {
        let game = game.clone();
        let deps = (
            game.user.is_some(),
            game.current_slimes.len(),
            game.flask_settled(),
        );
        use_effect_with(deps, move |(signed_in, _, settled)| {
            if *signed_in && *settled {
                if let Err(e) = storage::save_local_slimes(&game.current_slimes) {
                    warn!("could not save flask: {e}");
                }
            }
            || ()
        });
    }

    let on_spawn = {
        let game = game.clone();
        Callback::from(move |_| {
            let idx = (js_sys::Math::random() * SlimeColor::ALL.len() as f64) as usize;
            let color = SlimeColor::ALL[idx.min(SlimeColor::ALL.len() - 1)];
            let x = js_sys::Math::random() * FLASK_WIDTH;
            game.dispatch(GameAction::SpawnSlime { color, x });
        })
    };
    let on_complete = {
        let game = game.clone();
        Callback::from(move |task_id: String| {
            game.dispatch(GameAction::CompleteTask {
                task_id,
                now_ms: now_ms(),
            })
        })
    };
    let on_resume = {
        let game = game.clone();
        Callback::from(move |task_id: String| game.dispatch(GameAction::ResumeCustomization { task_id }))
    };
    let on_choose = {
        let game = game.clone();
        Callback::from(move |(item_id, skin_id): (String, String)| {
            game.dispatch(GameAction::FinalizeCustomization { item_id, skin_id })
        })
    };
    let on_close_modal = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::CancelCustomization))
    };
    let on_dismiss = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::DismissNotice))
    };
    let on_sign_out = {
        let game = game.clone();
        let auth = auth.clone();
        Callback::from(move |_| {
            auth.borrow().sign_out();
            game.dispatch(GameAction::SignOut);
        })
    };
    let on_auth = {
        let game = game.clone();
        let auth = auth.clone();
        let auth_error = auth_error.clone();
        Callback::from(move |req: AuthRequest| {
            let result = match req {
                AuthRequest::SignIn { login, password } => auth.borrow().sign_in(&login, &password),
                AuthRequest::SignUp {
                    username,
                    email,
                    password,
                    confirm_password,
                } => auth
                    .borrow_mut()
                    .sign_up(&username, &email, &password, &confirm_password),
            };
            match result {
                Ok(user) => {
                    auth_error.set(None);
                    game.dispatch(GameAction::Initialize(user));
                }
                Err(e) => auth_error.set(Some(e.to_string())),
            }
        })
    };

    let Some(profile) = game.profile.clone() else {
        return html! {
            <div id="root" style="position:relative; width:100vw; height:100vh;">
                <AuthPanel error={(*auth_error).clone()} on_submit={on_auth} />
            </div>
        };
    };
    let awaiting: Vec<String> = game.awaiting_installation().map(str::to_string).collect();
    let state: &GameState = &game;

    html! {
        <div id="root" style="position:relative; width:100vw; min-height:100vh; padding:12px; box-sizing:border-box; display:flex; gap:16px; align-items:flex-start; flex-wrap:wrap;">
            <div style="display:flex; flex-direction:column; gap:12px;">
                <Hud
                    username={profile.username.clone()}
                    goma_coins={profile.goma_coins}
                    diamonds={profile.diamond_count}
                    energy={profile.current_energy}
                    max_energy={state.config.max_energy}
                    stars={profile.star_count}
                    on_sign_out={on_sign_out}
                />
                <TaskList tasks={state.tasks.clone()} profile={profile.clone()} awaiting_install={awaiting} on_complete={on_complete} on_resume={on_resume} />
            </div>
            <FlaskView
                slimes={state.current_slimes.clone()}
                collection={state.slimes.clone()}
                spawner_charge={state.spawner_charge}
                spawner_max={state.config.spawner_charge_max}
                on_spawn={on_spawn}
            />
            <WingMap unlocked_wings={state.unlocked_wings.clone()} customization={state.customization.clone()} stars={profile.star_count} />
            <ItemSelectionModal
                item_id={state.pending_customization.as_ref().map(|p| p.item_id.clone())}
                on_choose={on_choose}
                on_close={on_close_modal}
            />
            <NoticeBanner notice={state.notice.clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
