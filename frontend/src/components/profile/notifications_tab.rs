use crate::api::notifications::fetch_notifications;
use log::warn;
use shared::models::notification::{unread_count, Notification, NotificationPreferences};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationsTabProps {
    pub on_save: Callback<NotificationPreferences>,
}

#[function_component(NotificationsTab)]
pub fn notifications_tab(props: &NotificationsTabProps) -> Html {
    let notifications = use_state(Vec::<Notification>::new);
    let loading = use_state(|| true);
    let preferences = use_state(NotificationPreferences::default);

    {
        let notifications = notifications.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_notifications().await {
                    Ok(list) => notifications.set(list),
                    // An unavailable feed renders as an empty list
                    Err(e) => warn!("Showing no notifications: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let toggle = |apply: fn(&mut NotificationPreferences)| {
        let preferences = preferences.clone();
        Callback::from(move |_: Event| {
            let mut next = (*preferences).clone();
            apply(&mut next);
            preferences.set(next);
        })
    };

    let on_submit = {
        let preferences = preferences.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit((*preferences).clone());
        })
    };

    let unread = unread_count(&notifications);

    html! {
        <div class="space-y-6">
            <div class="bg-white shadow rounded-lg p-6">
                <h2 class="text-2xl font-bold text-gray-900 mb-4">
                    {"Notifications"}
                    if unread > 0 {
                        <span class="ml-2 text-sm font-medium text-blue-600">{format!("{} unread", unread)}</span>
                    }
                </h2>
                if *loading {
                    <p class="text-gray-500">{"Loading notifications..."}</p>
                } else if notifications.is_empty() {
                    <p class="text-gray-500">{"You have no notifications."}</p>
                } else {
                    <ul class="divide-y divide-gray-200">
                        {for notifications.iter().map(|n| html! {
                            <li key={n.id.clone()} class={classes!("py-3", (!n.read).then_some("font-semibold"))}>
                                if let Some(title) = &n.title {
                                    <p class="text-gray-900">{title}</p>
                                }
                                <p class="text-gray-700">{&n.message}</p>
                                if let Some(at) = n.created_at {
                                    <p class="text-xs text-gray-400">{at.format("%b %e, %Y %H:%M").to_string()}</p>
                                }
                            </li>
                        })}
                    </ul>
                }
            </div>

            <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-semibold text-gray-700">{"Delivery Preferences"}</h3>
                <label class="flex items-center space-x-3">
                    <input type="checkbox" checked={preferences.email} onchange={toggle(|p| p.email = !p.email)} />
                    <span>{"Email notifications"}</span>
                </label>
                <label class="flex items-center space-x-3">
                    <input type="checkbox" checked={preferences.push} onchange={toggle(|p| p.push = !p.push)} />
                    <span>{"Push notifications"}</span>
                </label>
                <label class="flex items-center space-x-3">
                    <input type="checkbox" checked={preferences.marketing} onchange={toggle(|p| p.marketing = !p.marketing)} />
                    <span>{"Product news and offers"}</span>
                </label>
                <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition-colors">
                    {"Save Preferences"}
                </button>
            </form>
        </div>
    }
}
