use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod debug;
mod errors;
mod utils {
    pub mod dom;
    pub mod storage;
    pub mod timing;
}
mod navigation {
    pub mod controller;
    pub mod sections;

    pub type PageController = controller::ScrollController<crate::utils::timing::BrowserScheduler>;
}
mod behaviors {
    pub mod connectivity;
    pub mod keyboard;
    pub mod lazy_load;
    pub mod page_visibility;
    pub mod parallax;
    pub mod reveal;
    pub mod touch;
}
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod header;
    pub mod hero_video;
    pub mod notification;
    pub mod preloader;
    pub mod scroll_dots;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use components::notification::NotificationProvider;
use pages::{landing::Landing, privacy::PrivacyPolicy};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <NotificationProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </NotificationProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application, version {}", config::VERSION);
    errors::install_global_handlers();
    analytics::announce();
    yew::Renderer::<App>::new().render();
}
