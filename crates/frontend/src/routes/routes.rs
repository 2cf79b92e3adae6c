use crate::domain::a026_pos_cart::ui::pos::PosPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page not found"</h1>
            <a href="/">"Back to POS"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=PosPage />
                    <Route path=path!("/home") view=PosPage />
                </Routes>
            </main>
        </Router>
    }
}
