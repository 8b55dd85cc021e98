pub mod app;
pub mod auth_panel;
pub mod flask_view;
pub mod hud;
pub mod item_selection_modal;
pub mod notice_banner;
pub mod task_list;
pub mod wing_map;
