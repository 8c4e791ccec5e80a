use crate::auth::use_auth;
use crate::web::router::Link;
use leptos::prelude::*;
use petagenda::AppRoute;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();
    let home = move || auth.state.with(|s| AppRoute::landing_for(s.snapshot()));
    let signed_in = move || auth.state.with(|s| s.is_authenticated());

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-lg space-y-6">
                    <h1 class="text-5xl font-bold">"PetAgenda"</h1>
                    <p class="text-lg text-base-content/70">
                        "宠物的预约、病历与档案，集中在一个地方管理。"
                    </p>
                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <div class="flex justify-center gap-4">
                                <Link to=AppRoute::Login class="btn btn-primary">"登录"</Link>
                                <Link to=AppRoute::Register class="btn btn-outline">"注册"</Link>
                            </div>
                        }
                    >
                        {move || {
                            let target = home();
                            view! { <Link to=target class="btn btn-primary">"进入面板"</Link> }
                        }}
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="space-y-4">
                    <h1 class="text-6xl font-bold">"404"</h1>
                    <p class="text-base-content/70">"页面不存在"</p>
                    <Link to=AppRoute::Landing class="btn btn-primary">"返回首页"</Link>
                </div>
            </div>
        </div>
    }
}
