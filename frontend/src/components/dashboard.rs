use crate::auth::use_auth;
use crate::components::common::{ErrorAlert, Page, Spinner};
use crate::stores::use_stores;
use crate::web::router::Link;
use leptos::prelude::*;
use petagenda::AppRoute;

/// 用户面板：当前用户的宠物列表
#[component]
pub fn DashboardPage() -> impl IntoView {
    let user_name = use_auth().user_name();
    let stores = use_stores();
    let state = stores.pet_state;

    stores.with_pets(|store| async move { store.fetch_pets().await });

    let loading = Signal::derive(move || state.with(|s| s.status.is_loading()));
    let error = Signal::derive(move || state.with(|s| s.status.error().map(str::to_string)));
    let pets = move || state.with(|s| s.pets_for_current_user().to_vec());
    let is_empty = move || state.with(|s| s.pets.is_empty() && !s.status.is_loading());

    view! {
        <Page>
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">
                    {move || format!("{} 的宠物", user_name.get())}
                </h2>
                <button
                    class="btn btn-ghost btn-sm"
                    disabled=move || loading.get()
                    on:click=move |_| stores.with_pets(|store| async move { store.fetch_pets().await })
                >
                    "刷新"
                </button>
            </div>

            <ErrorAlert error=error />
            <Spinner when=loading />

            <Show when=is_empty>
                <div class="text-center py-12 text-base-content/50">"还没有登记任何宠物"</div>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=pets
                    key=|pet| (pet.id, pet.name.clone(), pet.species.clone(), pet.breed.clone())
                    children=move |pet| {
                        view! {
                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body">
                                    <h3 class="card-title">{pet.name.clone()}</h3>
                                    <p class="text-base-content/70">
                                        {pet.species.clone()} " · " {pet.breed.clone()}
                                    </p>
                                    <div class="card-actions justify-end">
                                        <Link to=AppRoute::PetDetail(pet.id) class="btn btn-primary btn-sm">
                                            "查看详情"
                                        </Link>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Page>
    }
}
