//! 管理面板：客户与宠物的增删改

use crate::components::common::{ErrorAlert, Modal, Page, Spinner};
use crate::stores::{StoreContext, use_stores};
use crate::web::router::Link;
use leptos::prelude::*;
use petagenda::AppRoute;
use petagenda_shared::{Client, ClientUpdate, Id, NewClient, NewPet};

fn non_blank(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stores = use_stores();
    let state = stores.admin_state;

    stores.with_admin(|store| async move { store.fetch_all_data().await });

    let loading = Signal::derive(move || state.with(|s| s.status.is_loading()));
    let error = Signal::derive(move || state.with(|s| s.status.error().map(str::to_string)));
    let clients = move || state.with(|s| s.users_with_pets().to_vec());

    let create_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Client>::None);
    let adding_pet_for = RwSignal::new(Option::<Client>::None);

    view! {
        <Page>
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">"客户管理"</h2>
                <button class="btn btn-primary" on:click=move |_| create_open.set(true)>
                    "+ 新建客户"
                </button>
            </div>

            <ErrorAlert error=error />
            <Spinner when=loading />

            <div class="overflow-x-auto bg-base-100 rounded-box shadow-xl">
                <table class="table">
                    <thead>
                        <tr><th>"姓名"</th><th>"邮箱"</th><th>"宠物"</th><th></th></tr>
                    </thead>
                    <tbody>
                        <For
                            each=clients
                            key=|c| {
                                let pets: Vec<(Id, String)> =
                                    c.pets.iter().map(|p| (p.id, p.name.clone())).collect();
                                (c.id, c.name.clone(), c.email.clone(), pets)
                            }
                            children=move |client| {
                                let for_edit = client.clone();
                                let for_pet = client.clone();
                                let id = client.id;
                                view! {
                                    <tr>
                                        <td>{client.name.clone()}</td>
                                        <td>{client.email.clone()}</td>
                                        <td>
                                            <div class="flex flex-wrap gap-1">
                                                {client.pets.iter().map(|pet| {
                                                    let name = pet.name.clone();
                                                    view! {
                                                        <Link to=AppRoute::AdminPetDetail(pet.id) class="badge badge-primary badge-outline">
                                                            {name}
                                                        </Link>
                                                    }
                                                }).collect_view()}
                                            </div>
                                        </td>
                                        <td class="flex gap-2 justify-end">
                                            <button class="btn btn-ghost btn-xs" on:click=move |_| adding_pet_for.set(Some(for_pet.clone()))>
                                                "添加宠物"
                                            </button>
                                            <button class="btn btn-ghost btn-xs" on:click=move |_| editing.set(Some(for_edit.clone()))>
                                                "编辑"
                                            </button>
                                            <button class="btn btn-ghost btn-xs text-error" on:click=move |_| delete_client(stores, id)>
                                                "删除"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <CreateClientDialog open=create_open />
            <EditClientDialog editing=editing />
            <AddPetDialog client=adding_pet_for />
        </Page>
    }
}

fn delete_client(stores: StoreContext, id: Id) {
    let confirmed = window()
        .confirm_with_message("确定删除该客户及其所有宠物吗？")
        .unwrap_or(false);
    if confirmed {
        stores.with_admin(move |store| async move {
            let _ = store.delete_client(id).await;
        });
    }
}

#[component]
fn CreateClientDialog(open: RwSignal<bool>) -> impl IntoView {
    let stores = use_stores();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = NewClient {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: non_blank(password.get_untracked()),
        };
        stores.with_admin(move |store| async move {
            if store.create_client(client).await.is_ok() {
                name.set(String::new());
                email.set(String::new());
                password.set(String::new());
                open.set(false);
            }
        });
    };

    view! {
        <Modal open=open title="新建客户">
            <form on:submit=on_submit class="space-y-3">
                <input class="input input-bordered w-full" placeholder="姓名" required
                    prop:value=name on:input=move |ev| name.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" type="email" placeholder="邮箱" required
                    prop:value=email on:input=move |ev| email.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" type="password" placeholder="初始密码（可选）"
                    prop:value=password on:input=move |ev| password.set(event_target_value(&ev)) />
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| open.set(false)>"取消"</button>
                    <button type="submit" class="btn btn-primary">"创建"</button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn EditClientDialog(editing: RwSignal<Option<Client>>) -> impl IntoView {
    let stores = use_stores();
    let open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(client) = editing.get() {
            name.set(client.name);
            email.set(client.email);
            open.set(true);
        }
    });
    Effect::new(move |_| {
        if !open.get() {
            editing.set(None);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = editing.with_untracked(|c| c.as_ref().map(|c| c.id)) else {
            return;
        };
        let update = ClientUpdate {
            name: non_blank(name.get_untracked()),
            email: non_blank(email.get_untracked()),
        };
        stores.with_admin(move |store| async move {
            if store.update_client(id, update).await.is_ok() {
                open.set(false);
            }
        });
    };

    view! {
        <Modal open=open title="编辑客户">
            <form on:submit=on_submit class="space-y-3">
                <input class="input input-bordered w-full" placeholder="姓名"
                    prop:value=name on:input=move |ev| name.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" type="email" placeholder="邮箱"
                    prop:value=email on:input=move |ev| email.set(event_target_value(&ev)) />
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| open.set(false)>"取消"</button>
                    <button type="submit" class="btn btn-primary">"保存"</button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn AddPetDialog(client: RwSignal<Option<Client>>) -> impl IntoView {
    let stores = use_stores();
    let open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let species = RwSignal::new(String::new());
    let breed = RwSignal::new(String::new());

    Effect::new(move |_| {
        if client.with(Option::is_some) {
            name.set(String::new());
            species.set(String::new());
            breed.set(String::new());
            open.set(true);
        }
    });
    Effect::new(move |_| {
        if !open.get() {
            client.set(None);
        }
    });

    let title = move || {
        client.with(|c| {
            c.as_ref()
                .map(|c| format!("为 {} 添加宠物", c.name))
                .unwrap_or_default()
        })
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = client.with_untracked(|c| c.as_ref().map(|c| c.id)) else {
            return;
        };
        let pet = NewPet {
            name: name.get_untracked().trim().to_string(),
            species: species.get_untracked().trim().to_string(),
            breed: breed.get_untracked().trim().to_string(),
        };
        stores.with_admin(move |store| async move {
            if store.create_pet_for_client(pet, user_id).await.is_ok() {
                open.set(false);
            }
        });
    };

    view! {
        <Modal open=open title="添加宠物">
            <p class="text-sm text-base-content/70 mb-2">{title}</p>
            <form on:submit=on_submit class="space-y-3">
                <input class="input input-bordered w-full" placeholder="名字" required
                    prop:value=name on:input=move |ev| name.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" placeholder="物种"
                    prop:value=species on:input=move |ev| species.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" placeholder="品种"
                    prop:value=breed on:input=move |ev| breed.set(event_target_value(&ev)) />
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| open.set(false)>"取消"</button>
                    <button type="submit" class="btn btn-primary">"添加"</button>
                </div>
            </form>
        </Modal>
    }
}
