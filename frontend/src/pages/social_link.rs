use crate::api::auth::{fetch_current_user, instagram_login_url};
use crate::api::socials::fetch_linked_socials;
use crate::auth::auth_token;
use crate::components::toast::use_toast;
use crate::config::Config;
use crate::Route;
use log::{debug, error, info, warn};
use shared::models::socials::{LinkedSocials, Platform};
use shared::models::user::UserType;
use shared::onboarding::{
    continue_destination, has_connect_marker, strip_connected_marker, ConnectAction,
    ConnectHandshake, OnboardingState, PlatformLink,
};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
struct OnboardingModel {
    state: OnboardingState,
}

enum OnboardingAction {
    Handshake(ConnectHandshake),
    LiveStatus(LinkedSocials),
}

impl Reducible for OnboardingModel {
    type Action = OnboardingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        match action {
            OnboardingAction::Handshake(handshake) => {
                state.apply_handshake(handshake);
            }
            OnboardingAction::LiveStatus(socials) => state.apply_live_status(&socials),
        }
        Rc::new(Self { state })
    }
}

/// Reads the one-shot completion marker and removes it from the address bar
/// without navigating.
fn consume_connect_marker() -> ConnectHandshake {
    let window = gloo_utils::window();
    let location = window.location();
    let search = location.search().unwrap_or_default();
    let handshake = ConnectHandshake::from_query(&search);

    if has_connect_marker(&search) {
        let current = format!(
            "{}{}{}",
            location.pathname().unwrap_or_default(),
            search,
            location.hash().unwrap_or_default()
        );
        let cleaned = strip_connected_marker(&current);
        match window.history() {
            Ok(history) => {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&cleaned)) {
                    warn!("Failed to clean URL after account link: {:?}", e);
                }
            }
            Err(e) => warn!("History API unavailable: {:?}", e),
        }
    }
    handshake
}

#[function_component(SocialLinkPage)]
pub fn social_link_page() -> Html {
    let model = use_reducer(OnboardingModel::default);
    let user_type = use_state(|| None::<UserType>);
    let checking = use_state(|| true);
    let navigator = use_navigator();
    let toast = use_toast();

    {
        let dispatcher = model.dispatcher();
        let user_type = user_type.clone();
        let checking = checking.clone();
        use_effect_with((), move |_| {
            let handshake = consume_connect_marker();
            if let ConnectHandshake::Completed(platform) = handshake {
                info!("Returned from {} authorization", platform);
            }
            dispatcher.dispatch(OnboardingAction::Handshake(handshake));

            spawn_local(async move {
                match fetch_linked_socials().await {
                    Ok(socials) => dispatcher.dispatch(OnboardingAction::LiveStatus(socials)),
                    Err(e) => error!("Could not load linked accounts: {}", e),
                }
                checking.set(false);
            });
            spawn_local(async move {
                match fetch_current_user().await {
                    Ok(user) => user_type.set(Some(user.user_type)),
                    Err(e) => warn!("Continue will use the fallback destination: {}", e),
                }
            });
            || ()
        });
    }

    let on_connect = {
        let state = model.state.clone();
        let toast = toast.clone();
        Callback::from(move |platform: Platform| {
            let login_url = instagram_login_url(&Config::api_base_url(), auth_token().as_deref());
            match state.connect_action(platform, &login_url) {
                ConnectAction::Redirect(url) => {
                    debug!("Redirecting to {} authorization", platform);
                    if let Err(e) = gloo_utils::window().location().set_href(&url) {
                        error!("Failed to start {} authorization: {:?}", platform, e);
                    }
                }
                ConnectAction::Placeholder(message) => match &toast {
                    Some(toast) => toast.info(message),
                    None => info!("{}", message),
                },
            }
        })
    };

    let can_continue = model.state.has_linked_accounts();
    let on_continue = {
        let user_type = *user_type;
        Callback::from(move |_: MouseEvent| {
            let destination = continue_destination(user_type);
            let route = Route::recognize(destination).unwrap_or(Route::Settings);
            match &navigator {
                Some(navigator) => navigator.push(&route),
                None => error!("Navigator unavailable; cannot continue to {}", destination),
            }
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <main class="container mx-auto px-4 py-10 max-w-2xl">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">{"Link your social accounts"}</h1>
                <p class="text-gray-600 mb-6">{"Connect at least one account to continue."}</p>

                <div class="bg-white shadow rounded-lg divide-y divide-gray-200">
                    {for model.state.links().iter().map(|link| platform_row(link, *checking, &on_connect))}
                </div>

                <div class="mt-6 flex justify-end">
                    <button
                        onclick={on_continue}
                        disabled={!can_continue}
                        class="px-6 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50 transition-colors"
                    >
                        {"Continue"}
                    </button>
                </div>
            </main>
        </div>
    }
}

fn platform_row(link: &PlatformLink, checking: bool, on_connect: &Callback<Platform>) -> Html {
    let platform = link.platform;
    let onclick = on_connect.reform(move |_: MouseEvent| platform);

    html! {
        <div key={platform.as_str()} class="flex items-center justify-between p-4">
            <div>
                <p class="font-medium text-gray-900">{platform.label()}</p>
                <p class="text-sm text-gray-500">
                    {match (&link.handle, link.linked) {
                        (Some(handle), true) => format!("Linked as @{}", handle),
                        (None, true) => "Linked".to_string(),
                        _ if checking && platform == Platform::Instagram => "Checking...".to_string(),
                        _ => "Not Linked".to_string(),
                    }}
                </p>
            </div>
            if link.linked {
                <span class="px-3 py-1 rounded bg-green-100 text-green-700 text-sm font-semibold">{"Connected"}</span>
            } else {
                <button
                    {onclick}
                    class="px-4 py-2 border border-blue-600 text-blue-600 rounded hover:bg-blue-50 transition-colors"
                >
                    {"Connect"}
                </button>
            }
        </div>
    }
}
