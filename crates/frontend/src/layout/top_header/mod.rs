//! Top bar: sidebar toggle and console title

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

pub const APP_TITLE: &str = "金融数据管理台";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "隐藏导航" } else { "显示导航" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{APP_TITLE}</span>
            </div>
        </div>
    }
}
