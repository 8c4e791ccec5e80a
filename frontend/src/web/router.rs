//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 守卫判定来自核心库的 `route::resolve`，这里只负责"监听 -> 判定 -> 写 History -> 更新信号"。

use leptos::prelude::*;
use petagenda::route::resolve;
use petagenda::{AppRoute, AuthSnapshot};
use tracing::info;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 路由器服务
///
/// 通过注入的会话快照信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    auth: Signal<AuthSnapshot>,
}

impl RouterService {
    fn new(auth: Signal<AuthSnapshot>) -> Self {
        // 首屏也要过守卫
        let target = AppRoute::from_path(&current_path());
        let resolution = resolve(target, auth.get_untracked());
        if resolution.redirected {
            replace_history_state(&resolution.route.to_path());
        }
        let (current_route, set_route) = signal(resolution.route);

        Self {
            current_route,
            set_route,
            auth,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), path, true);
    }

    pub fn go(&self, route: AppRoute) {
        self.navigate_to_route(route, &route.to_path(), true);
    }

    /// 导航到指定路由
    ///
    /// 被守卫重定向时总是用 replaceState，放行时按 `use_push` 决定。
    /// 未匹配的地址保留用户请求的原样。
    fn navigate_to_route(&self, target: AppRoute, requested: &str, use_push: bool) {
        let resolution = resolve(target, self.auth.get_untracked());
        let path = resolution.history_path(requested);

        if resolution.redirected || !use_push {
            replace_history_state(&path);
        } else {
            push_history_state(&path);
        }
        self.set_route.set(resolution.route);
    }

    /// 浏览器后退/前进按钮同样经过守卫
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            router.navigate_to_route(AppRoute::from_path(&path), &path, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话快照变化（登录/注销）时对当前路由重新执行守卫
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let auth = router.auth.get();
            let route = router.current_route.get_untracked();
            let resolution = resolve(route, auth);

            if resolution.redirected {
                info!(from = %route, to = %resolution.route, "auth state changed, re-routing");
                replace_history_state(&resolution.route.to_path());
                router.set_route.set(resolution.route);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(auth: Signal<AuthSnapshot>) -> RouterService {
    let router = RouterService::new(auth);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 会话快照信号
    auth: Signal<AuthSnapshot>,
    children: Children,
) -> impl IntoView {
    provide_router(auth);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击，经由路由服务导航
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.go(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
