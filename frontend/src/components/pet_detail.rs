use crate::components::common::{ErrorAlert, Page, Spinner};
use crate::stores::use_stores;
use crate::web::router::Link;
use leptos::prelude::*;
use petagenda::AppRoute;
use petagenda_shared::date::{format_datetime, format_day};
use petagenda_shared::{Appointment, Id, MedicalRecord, PetDetails};

/// 预约与病历两张表，用户与管理员页面共用
#[component]
pub fn PetHistory(
    #[prop(into)] appointments: Signal<Vec<Appointment>>,
    #[prop(into)] records: Signal<Vec<MedicalRecord>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"预约"</h3>
                    <Show
                        when=move || appointments.with(|a| !a.is_empty())
                        fallback=|| view! { <p class="text-base-content/50">"暂无预约"</p> }
                    >
                        <table class="table table-zebra">
                            <thead>
                                <tr><th>"时间"</th><th>"事由"</th><th>"状态"</th></tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || appointments.get()
                                    key=|a| a.id
                                    children=|a| view! {
                                        <tr>
                                            <td>{format_datetime(&a.date)}</td>
                                            <td>{a.reason}</td>
                                            <td><span class="badge badge-outline">{a.status}</span></td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"病历"</h3>
                    <Show
                        when=move || records.with(|r| !r.is_empty())
                        fallback=|| view! { <p class="text-base-content/50">"暂无病历"</p> }
                    >
                        <table class="table table-zebra">
                            <thead>
                                <tr><th>"日期"</th><th>"类型"</th><th>"名称"</th></tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || records.get()
                                    key=|r| r.id
                                    children=|r| view! {
                                        <tr>
                                            <td>{format_day(&r.date)}</td>
                                            <td>{r.kind}</td>
                                            <td>{r.name}</td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// 宠物详情（用户视角）
#[component]
pub fn PetDetailPage(pet_id: Id) -> impl IntoView {
    let stores = use_stores();
    let state = stores.pet_state;

    stores.with_pets(move |store| async move { store.fetch_pet_by_id(pet_id).await });

    // 离开页面时丢弃选中的宠物，在途请求的响应也随之作废
    on_cleanup(move || stores.pets().clear_selected_pet());

    let loading = Signal::derive(move || state.with(|s| s.status.is_loading()));
    let error = Signal::derive(move || state.with(|s| s.status.error().map(str::to_string)));
    let details = move || state.with(|s| s.selected_pet.clone().filter(|d| d.pet.id == pet_id));

    view! {
        <Page>
            <Link to=AppRoute::Dashboard class="btn btn-ghost btn-sm">"← 返回我的宠物"</Link>
            <ErrorAlert error=error />
            <Spinner when=loading />
            {move || details().map(|d| view! { <PetDetailsCard details=d /> })}
        </Page>
    }
}

#[component]
fn PetDetailsCard(details: PetDetails) -> impl IntoView {
    let PetDetails { pet, appointments, records, .. } = details;

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-2xl">{pet.name}</h2>
                <p class="text-base-content/70">{pet.species} " · " {pet.breed}</p>
            </div>
        </div>
        <PetHistory appointments=Signal::stored(appointments) records=Signal::stored(records) />
    }
}
