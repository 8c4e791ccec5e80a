//! 把 Leptos 信号接到核心库的 `StoreCell`
//!
//! store 通过它写状态，视图直接订阅内部的 `RwSignal`。

use leptos::prelude::*;
use petagenda::StoreCell;

#[derive(Debug)]
pub struct ReactiveCell<T: Send + Sync + 'static>(pub RwSignal<T>);

impl<T: Send + Sync + 'static> ReactiveCell<T> {
    pub fn new(value: T) -> Self {
        Self(RwSignal::new(value))
    }

    pub fn signal(&self) -> RwSignal<T> {
        self.0
    }
}

impl<T: Send + Sync + 'static> Clone for ReactiveCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ReactiveCell<T> {}

impl<T: Send + Sync + 'static> StoreCell<T> for ReactiveCell<T> {
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.write())
    }
}
