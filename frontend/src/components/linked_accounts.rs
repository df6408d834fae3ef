use crate::api::socials::fetch_linked_socials;
use shared::linked_accounts::{LinkedAccountsView, PlatformStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(LinkedAccounts)]
pub fn linked_accounts() -> Html {
    let view = use_state(LinkedAccountsView::default);

    {
        let view = view.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                view.set(LinkedAccountsView::from_result(fetch_linked_socials().await));
            });
            || ()
        });
    }

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-xl font-bold text-gray-900 mb-4">{"Linked Accounts"}</h2>
            {match &*view {
                LinkedAccountsView::Loading => html! {
                    <p class="text-gray-500">{"Loading linked accounts..."}</p>
                },
                LinkedAccountsView::Error(msg) => html! {
                    <div class="p-4 bg-red-100 border border-red-400 text-red-700 rounded">{msg}</div>
                },
                LinkedAccountsView::Loaded(statuses) => html! {
                    <ul class="divide-y divide-gray-200">
                        {for statuses.iter().map(status_row)}
                    </ul>
                },
            }}
        </div>
    }
}

fn status_row(status: &PlatformStatus) -> Html {
    let badge_class = if status.linked {
        "bg-green-100 text-green-700"
    } else {
        "bg-gray-100 text-gray-500"
    };

    html! {
        <li key={status.platform.as_str()} class="flex items-center justify-between py-3">
            <div>
                <span class="font-medium text-gray-900">{status.platform.label()}</span>
                if let Some(handle) = &status.handle {
                    <span class="ml-2 text-sm text-gray-500">{format!("@{}", handle)}</span>
                }
            </div>
            <span class={classes!("px-2", "py-1", "rounded", "text-xs", "font-semibold", badge_class)}>
                {status.badge()}
            </span>
        </li>
    }
}
