use crate::auth::{login, use_auth};
use crate::components::common::ErrorAlert;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use petagenda::AppRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let is_submitting = move || auth.state.with(|s| s.status.is_loading());
    let error = Signal::derive(move || {
        form_error
            .get()
            .or_else(|| auth.state.with(|s| s.status.error().map(str::to_string)))
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked().trim().to_string();
        let secret = password.get_untracked();
        if address.is_empty() || secret.is_empty() {
            set_form_error.set(Some("请填写邮箱和密码".to_string()));
            return;
        }
        set_form_error.set(None);

        // 登录成功后路由服务会自动跳转到对应的面板
        spawn_local(async move {
            login(&auth, address, secret).await;
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"PetAgenda"</h1>
                    <p class="text-base-content/70">"登录以管理您的宠物"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert error=error />

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"邮箱"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="test@petagenda.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_submitting>
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登录".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center text-base-content/70">
                            "还没有账号？" <Link to=AppRoute::Register class="link link-primary">"了解如何注册"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
