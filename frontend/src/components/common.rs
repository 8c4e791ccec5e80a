//! 页面间共用的小组件

use crate::auth::{logout, use_auth};
use crate::stores::use_stores;
use crate::web::router::Link;
use leptos::prelude::*;
use petagenda::AppRoute;

/// 顶部导航栏
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let stores = use_stores();
    let user_name = auth.user_name();
    let is_admin = move || auth.state.with(|s| s.is_admin());

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Landing class="btn btn-ghost text-xl">"PetAgenda"</Link>
                <Show when=is_admin>
                    <span class="badge badge-secondary">"管理员"</span>
                </Show>
            </div>
            <div class="flex-none gap-2">
                <span class="hidden md:inline text-base-content/70">{user_name}</span>
                <Show
                    when=is_admin
                    fallback=|| view! { <Link to=AppRoute::Dashboard class="btn btn-ghost">"我的宠物"</Link> }
                >
                    <Link to=AppRoute::AdminDashboard class="btn btn-ghost">"客户管理"</Link>
                </Show>
                <button
                    on:click=move |_| {
                        logout(&auth);
                        stores.reset();
                    }
                    class="btn btn-outline btn-error"
                >
                    "退出登录"
                </button>
            </div>
        </div>
    }
}

/// store 的 error 字段
#[component]
pub fn ErrorAlert(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

#[component]
pub fn Spinner(#[prop(into)] when: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || when.get()>
            <div class="flex justify-center py-8">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        </Show>
    }
}

/// 受信号控制的模态框
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if open.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        } else if dialog.open() {
            dialog.close();
        }
    });

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg mb-4">{title}</h3>
                {children()}
            </div>
        </dialog>
    }
}

/// 页面骨架：导航栏 + 内容
#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Navbar />
                {children()}
            </div>
        </div>
    }
}
