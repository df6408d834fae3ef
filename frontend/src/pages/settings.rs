use crate::api::auth::fetch_current_user;
use crate::Route;
use log::debug;
use shared::models::user::UserType;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

pub fn profile_route(user_type: UserType) -> Route {
    match user_type {
        UserType::Influencer => Route::InfluencerProfile,
        UserType::Business => Route::BusinessProfile,
    }
}

/// Sends the user to the settings screen matching their account type.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let navigator = use_navigator();
    let error = use_state(|| None::<String>);

    {
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_current_user().await {
                    Ok(user) => {
                        let route = profile_route(user.user_type);
                        debug!("Opening settings for {} account: {:?}", user.user_type.as_str(), route);
                        if let Some(navigator) = navigator {
                            navigator.replace(&route);
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
            || ()
        });
    }

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            {match &*error {
                None => html! { <p class="text-gray-500">{"Loading your settings..."}</p> },
                Some(msg) => html! {
                    <div class="bg-white shadow rounded-lg p-6 max-w-md">
                        <p class="mb-4 text-red-700">{format!("We couldn't load your account: {}", msg)}</p>
                        <Link<Route> to={Route::SocialLink} classes="text-blue-600 hover:underline">
                            {"Go to account linking"}
                        </Link<Route>>
                    </div>
                },
            }}
        </div>
    }
}
