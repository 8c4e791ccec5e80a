//! 资源 store 的 Context
//!
//! store 持有 `Rc`，只能放在本地存储的 `StoredValue` 里；
//! 它们的状态则是普通的 `RwSignal`，视图直接订阅。

use crate::auth::{ApiClient, AppSession};
use crate::cell::ReactiveCell;
use leptos::prelude::*;
use leptos::task::spawn_local;
use petagenda::{AdminState, AdminStore, PetAgendaApi, PetState, PetStore};
use std::future::Future;

pub type AppPetStore = PetStore<ApiClient, ReactiveCell<PetState>, AppSession>;
pub type AppAdminStore = AdminStore<ApiClient, ReactiveCell<AdminState>, AppSession>;

#[derive(Clone, Copy)]
pub struct StoreContext {
    pets: StoredValue<AppPetStore, LocalStorage>,
    admin: StoredValue<AppAdminStore, LocalStorage>,
    pub pet_state: RwSignal<PetState>,
    pub admin_state: RwSignal<AdminState>,
}

impl StoreContext {
    pub fn new(api: PetAgendaApi<ApiClient>, session: AppSession) -> Self {
        let pet_cell = ReactiveCell::new(PetState::default());
        let admin_cell = ReactiveCell::new(AdminState::default());

        Self {
            pets: StoredValue::new_local(PetStore::new(api.clone(), pet_cell, session.clone())),
            admin: StoredValue::new_local(AdminStore::new(api, admin_cell, session)),
            pet_state: pet_cell.signal(),
            admin_state: admin_cell.signal(),
        }
    }

    /// 在后台执行一个宠物 store 动作
    pub fn with_pets<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppPetStore) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.pets.get_value()));
    }

    /// 在后台执行一个管理员 store 动作
    pub fn with_admin<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppAdminStore) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.admin.get_value()));
    }

    /// 注销时清空两个 store，避免下一位用户看到上一位的数据
    pub fn reset(&self) {
        self.pets.get_value().reset();
        self.admin.get_value().reset();
    }

    pub fn pets(&self) -> AppPetStore {
        self.pets.get_value()
    }

    pub fn admin(&self) -> AppAdminStore {
        self.admin.get_value()
    }
}

pub fn use_stores() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext should be provided")
}
