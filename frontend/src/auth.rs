//! 认证模块
//!
//! 把核心库的 `Session` 放进 Context，与路由系统解耦：
//! 路由服务只拿到一个只读的会话快照信号。

use crate::cell::ReactiveCell;
use crate::web::BrowserStorage;
use leptos::prelude::*;
use petagenda::{AuthSnapshot, HttpClient, PetAgendaApi, Principal, Session, SessionState};
use std::rc::Rc;

pub type ApiClient = Rc<dyn HttpClient>;
pub type AppSession = Session<ApiClient, BrowserStorage, ReactiveCell<SessionState>>;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<AppSession, LocalStorage>,
    /// 会话状态（视图订阅）
    pub state: RwSignal<SessionState>,
}

impl AuthContext {
    /// 从 LocalStorage 恢复会话并创建上下文
    pub fn restore(api: PetAgendaApi<ApiClient>) -> Self {
        let cell = ReactiveCell::new(SessionState::default());
        let session = Session::restore(api, BrowserStorage, cell);

        Self {
            session: StoredValue::new_local(session),
            state: cell.signal(),
        }
    }

    pub fn session(&self) -> AppSession {
        self.session.get_value()
    }

    /// 会话快照信号（用于路由服务注入）
    pub fn snapshot_signal(&self) -> Signal<AuthSnapshot> {
        let state = self.state;
        Signal::derive(move || state.with(SessionState::snapshot))
    }

    pub fn user_name(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())
        })
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录
///
/// 成功后无需手动导航，路由服务监听会话快照并自动离开访客页。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> bool {
    ctx.session().login(&email, &password).await
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    let session = ctx.session();
    tracing::info!(user_id = ?session.user_id(), "logging out");
    session.logout();
}
