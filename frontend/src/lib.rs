//! PetAgenda 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `auth`: 会话上下文（包装核心库的 `Session`）
//! - `stores`: 宠物与管理员 store 的上下文
//! - `web::router`: 路由服务，守卫判定来自核心库
//! - `components`: UI 组件层

mod auth;
mod cell;
pub mod config;
mod stores;
mod components {
    pub mod admin_dashboard;
    pub mod admin_pet_detail;
    pub mod common;
    pub mod dashboard;
    pub mod landing;
    pub mod login;
    pub mod pet_detail;
    pub mod register;
}

// 原生 Web API 封装模块
// 对 fetch / localStorage / console / History 的轻量级封装，
// 替代 gloo-* 系列 crate，以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod console;
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::BrowserStorage;
}

use crate::auth::AuthContext;
use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::admin_pet_detail::AdminPetDetailPage;
use crate::components::dashboard::DashboardPage;
use crate::components::landing::{LandingPage, NotFoundPage};
use crate::components::login::LoginPage;
use crate::components::pet_detail::PetDetailPage;
use crate::components::register::RegisterPage;
use crate::stores::StoreContext;

use leptos::prelude::*;
use petagenda::{AppRoute, RuntimeConfig};
use web::router::{Router, RouterOutlet};

pub use web::console::init_logging;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::PetDetail(id) => view! { <PetDetailPage pet_id=id /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::AdminPetDetail(id) => view! { <AdminPetDetailPage pet_id=id /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App(config: RuntimeConfig) -> impl IntoView {
    // 1. 按配置选择 HTTP 后端或内存模拟后端
    let api = petagenda::connect(&config, web::FetchHttpClient);

    // 2. 从 LocalStorage 恢复会话
    let auth = AuthContext::restore(api.clone());
    provide_context(auth);

    // 3. store 与会话共享同一个 Principal
    provide_context(StoreContext::new(api, auth.session()));

    view! {
        // 4. 路由器组件：注入会话快照实现守卫
        <Router auth=auth.snapshot_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
