//! 宠物详情（管理视角）：编辑、删除、追加预约与病历

use crate::components::common::{ErrorAlert, Modal, Page, Spinner};
use crate::components::pet_detail::PetHistory;
use crate::stores::use_stores;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use petagenda::AppRoute;
use petagenda_shared::date::{parse_datetime, parse_day};
use petagenda_shared::{Id, NewAppointment, NewMedicalRecord, PetUpdate};

#[component]
pub fn AdminPetDetailPage(pet_id: Id) -> impl IntoView {
    let stores = use_stores();
    let state = stores.admin_state;

    stores.with_admin(move |store| async move { store.fetch_admin_pet_details(pet_id).await });
    on_cleanup(move || stores.admin().clear_selected_pet_details());

    let loading = Signal::derive(move || state.with(|s| s.status.is_loading()));
    let error = Signal::derive(move || state.with(|s| s.status.error().map(str::to_string)));
    let details = move || {
        state.with(|s| {
            s.selected_pet_details
                .clone()
                .filter(|d| d.pet.id == pet_id)
        })
    };
    let appointments = Signal::derive(move || details().map(|d| d.appointments).unwrap_or_default());
    let records = Signal::derive(move || details().map(|d| d.records).unwrap_or_default());

    let edit_open = RwSignal::new(false);
    let appointment_open = RwSignal::new(false);
    let record_open = RwSignal::new(false);

    let router = use_router();
    let on_delete = move |_: leptos::ev::MouseEvent| {
        let confirmed = window()
            .confirm_with_message("确定删除这只宠物吗？预约与病历会一并删除。")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        stores.with_admin(move |store| async move {
            if store.delete_pet(pet_id).await.is_ok() {
                router.go(AppRoute::AdminDashboard);
            }
        });
    };

    view! {
        <Page>
            <Link to=AppRoute::AdminDashboard class="btn btn-ghost btn-sm">"← 返回客户管理"</Link>
            <ErrorAlert error=error />
            <Spinner when=loading />

            {move || details().map(|d| {
                let owner = d
                    .owner
                    .map(|o| format!("{} <{}>", o.name, o.email))
                    .unwrap_or_else(|| "未知".to_string());
                view! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title text-2xl">{d.pet.name}</h2>
                            <p class="text-base-content/70">{d.pet.species} " · " {d.pet.breed}</p>
                            <p class="text-sm">"主人：" {owner}</p>
                            <div class="card-actions justify-end">
                                <button class="btn btn-sm" on:click=move |_| appointment_open.set(true)>"添加预约"</button>
                                <button class="btn btn-sm" on:click=move |_| record_open.set(true)>"添加病历"</button>
                                <button class="btn btn-sm btn-primary" on:click=move |_| edit_open.set(true)>"编辑"</button>
                                <button class="btn btn-sm btn-error btn-outline" on:click=on_delete>"删除"</button>
                            </div>
                        </div>
                    </div>
                }
            })}

            <PetHistory appointments=appointments records=records />

            <EditPetDialog pet_id=pet_id open=edit_open />
            <AppointmentDialog pet_id=pet_id open=appointment_open />
            <RecordDialog pet_id=pet_id open=record_open />
        </Page>
    }
}

#[component]
fn EditPetDialog(pet_id: Id, open: RwSignal<bool>) -> impl IntoView {
    let stores = use_stores();
    let name = RwSignal::new(String::new());
    let species = RwSignal::new(String::new());
    let breed = RwSignal::new(String::new());

    // 打开时用当前值填充表单
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        stores.admin_state.with_untracked(|s| {
            if let Some(d) = &s.selected_pet_details {
                name.set(d.pet.name.clone());
                species.set(d.pet.species.clone());
                breed.set(d.pet.breed.clone());
            }
        });
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = PetUpdate {
            name: Some(name.get_untracked().trim().to_string()).filter(|v| !v.is_empty()),
            species: Some(species.get_untracked().trim().to_string()),
            breed: Some(breed.get_untracked().trim().to_string()),
        };
        stores.with_admin(move |store| async move {
            if store.update_pet(pet_id, update).await.is_ok() {
                open.set(false);
            }
        });
    };

    view! {
        <Modal open=open title="编辑宠物">
            <form on:submit=on_submit class="space-y-3">
                <input class="input input-bordered w-full" placeholder="名字" required
                    prop:value=name on:input=move |ev| name.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" placeholder="物种"
                    prop:value=species on:input=move |ev| species.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" placeholder="品种"
                    prop:value=breed on:input=move |ev| breed.set(event_target_value(&ev)) />
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| open.set(false)>"取消"</button>
                    <button type="submit" class="btn btn-primary">"保存"</button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn AppointmentDialog(pet_id: Id, open: RwSignal<bool>) -> impl IntoView {
    let stores = use_stores();
    let date = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(when) = parse_datetime(&date.get_untracked()) else {
            set_form_error.set(Some("请输入有效的时间".to_string()));
            return;
        };
        set_form_error.set(None);
        let appointment = NewAppointment::new(pet_id, when, reason.get_untracked().trim());
        stores.with_admin(move |store| async move {
            if store.add_appointment(appointment).await.is_ok() {
                date.set(String::new());
                reason.set(String::new());
                open.set(false);
            }
        });
    };

    view! {
        <Modal open=open title="添加预约">
            <form on:submit=on_submit class="space-y-3">
                <ErrorAlert error=form_error />
                <input class="input input-bordered w-full" type="datetime-local" required
                    prop:value=date on:input=move |ev| date.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" placeholder="事由" required
                    prop:value=reason on:input=move |ev| reason.set(event_target_value(&ev)) />
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| open.set(false)>"取消"</button>
                    <button type="submit" class="btn btn-primary">"添加"</button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn RecordDialog(pet_id: Id, open: RwSignal<bool>) -> impl IntoView {
    let stores = use_stores();
    let kind = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(day) = parse_day(&date.get_untracked()) else {
            set_form_error.set(Some("请输入有效的日期".to_string()));
            return;
        };
        set_form_error.set(None);
        let record = NewMedicalRecord {
            pet_id,
            kind: kind.get_untracked().trim().to_string(),
            name: name.get_untracked().trim().to_string(),
            date: day,
        };
        stores.with_admin(move |store| async move {
            if store.add_medical_record(record).await.is_ok() {
                kind.set(String::new());
                name.set(String::new());
                date.set(String::new());
                open.set(false);
            }
        });
    };

    view! {
        <Modal open=open title="添加病历">
            <form on:submit=on_submit class="space-y-3">
                <ErrorAlert error=form_error />
                <input class="input input-bordered w-full" placeholder="类型（如 Vacuna）" required
                    prop:value=kind on:input=move |ev| kind.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" placeholder="名称" required
                    prop:value=name on:input=move |ev| name.set(event_target_value(&ev)) />
                <input class="input input-bordered w-full" type="date" required
                    prop:value=date on:input=move |ev| date.set(event_target_value(&ev)) />
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| open.set(false)>"取消"</button>
                    <button type="submit" class="btn btn-primary">"添加"</button>
                </div>
            </form>
        </Modal>
    }
}
