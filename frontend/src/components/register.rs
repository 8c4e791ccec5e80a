use crate::web::router::Link;
use leptos::prelude::*;
use petagenda::AppRoute;

/// 注册说明页
///
/// 账号由诊所管理员在后台创建，这里只给出指引。
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card w-full shadow-2xl bg-base-100">
                    <div class="card-body space-y-2">
                        <h2 class="card-title">"注册账号"</h2>
                        <p class="text-base-content/70">
                            "PetAgenda 的账号由诊所统一开通。请联系前台，提供您的姓名与邮箱，"
                            "管理员创建账号后即可登录。"
                        </p>
                        <div class="card-actions justify-end">
                            <Link to=AppRoute::Login class="btn btn-primary">"去登录"</Link>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
