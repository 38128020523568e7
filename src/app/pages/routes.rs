use crate::app::layouts::{AdminSidebar, Navbar};
use crate::app::pages::admin::{
    AdminCategoryList, AdminDashboard, AdminLogin, AdminPostEdit, AdminPostList, AdminPostNew,
    AdminTagList,
};
use crate::app::pages::archive::{AllCategories, CategoryPage, TagPage};
use crate::app::pages::home::Home;
use crate::app::pages::post_detail::PostDetail;
use crate::app::pages::search::SearchPage;
use crate::shared::hooks::use_auth;
use dioxus::document;
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Public reading site
    #[layout(PublicLayout)]
    #[route("/")]
    Home {},
    #[route("/posts/:slug")]
    PostDetail { slug: String },
    #[route("/categories")]
    AllCategories {},
    #[route("/categories/:slug")]
    CategoryPage { slug: String },
    #[route("/tags/:slug")]
    TagPage { slug: String },
    #[route("/search")]
    SearchPage {},
    #[end_layout]

    // Back office
    #[route("/admin/login")]
    AdminLogin {},

    #[layout(AdminLayout)]
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/posts")]
    AdminPostList {},
    #[route("/admin/posts/new")]
    AdminPostNew {},
    #[route("/admin/posts/:id/edit")]
    AdminPostEdit { id: i64 },
    #[route("/admin/categories")]
    AdminCategoryList {},
    #[route("/admin/tags")]
    AdminTagList {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        // Load WASM bundle for client-side hydration
        document::Script {
            src: "/wasm/blog-air-web.js",
            r#type: "module"
        },
        Router::<Route> {}
    }
}

/// Public site shell: navbar on top, routed content, footer.
#[component]
fn PublicLayout() -> Element {
    rsx! {
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
            footer { class: "c-layout__footer",
                p { "Powered by blog-air" }
            }
        }
    }
}

/// Back-office shell: sidebar plus routed content, gated on the admin
/// session. Unauthenticated visits bounce to the login page.
#[component]
fn AdminLayout() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let is_authenticated = *auth.is_authenticated.read();
    use_effect(move || {
        if !*auth.is_authenticated.read() {
            navigator.replace(Route::AdminLogin {});
        }
    });

    if !is_authenticated {
        return rsx! {
            div { class: "c-admin-gate", "Redirecting to login..." }
        };
    }

    rsx! {
        div { class: "c-admin-layout",
            AdminSidebar { auth }
            main { class: "c-admin-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
