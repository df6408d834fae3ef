use crate::components::toast::ToastProvider;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod pages {
    pub mod business_profile;
    pub mod influencer_profile;
    pub mod not_found;
    pub mod profile_layout;
    pub mod profile_state;
    pub mod settings;
    pub mod social_link;
}

use pages::{
    business_profile::BusinessProfilePage, influencer_profile::InfluencerProfilePage,
    not_found::NotFound, settings::SettingsPage, social_link::SocialLinkPage,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/settings")]
    Settings,
    #[at("/business/profile")]
    BusinessProfile,
    #[at("/influencer/profile")]
    InfluencerProfile,
    #[at("/onboarding/socials")]
    SocialLink,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="app-container">
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Settings} /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::BusinessProfile => html! { <BusinessProfilePage /> },
        Route::InfluencerProfile => html! { <InfluencerProfilePage /> },
        Route::SocialLink => html! { <SocialLinkPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Logger initialized; API base URL {}", config::Config::api_base_url());

    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
