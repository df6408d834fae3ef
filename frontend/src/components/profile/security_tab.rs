use crate::components::profile::form_model::event_value;
use shared::PasswordChange;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SecurityTabProps {
    pub on_save: Callback<PasswordChange>,
}

#[function_component(SecurityTab)]
pub fn security_tab(props: &SecurityTabProps) -> Html {
    let change = use_state(PasswordChange::default);
    let error = use_state(|| None::<String>);

    let update = |apply: fn(&mut PasswordChange, String)| {
        let change = change.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*change).clone();
            apply(&mut next, event_value(&e));
            change.set(next);
        })
    };

    let on_submit = {
        let change = change.clone();
        let error = error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = change.check() {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            on_save.emit((*change).clone());
            change.set(PasswordChange::default());
        })
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

    html! {
        <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
            <h2 class="text-2xl font-bold text-gray-900">{"Security"}</h2>
            <h3 class="text-lg font-semibold text-gray-700">{"Update Password"}</h3>
            if let Some(msg) = (*error).as_ref() {
                <div class="p-4 bg-red-100 border border-red-400 text-red-700 rounded">{msg}</div>
            }
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"Current Password"}</label>
                <input type="password" value={change.current_password.clone()}
                    oninput={update(|c, v| c.current_password = v)} class={input_class}
                    placeholder="Enter current password" />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"New Password"}</label>
                <input type="password" value={change.new_password.clone()}
                    oninput={update(|c, v| c.new_password = v)} class={input_class}
                    placeholder="Enter new password (min 8 characters)" />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"Confirm New Password"}</label>
                <input type="password" value={change.confirm_password.clone()}
                    oninput={update(|c, v| c.confirm_password = v)} class={input_class}
                    placeholder="Confirm new password" />
            </div>
            <button type="submit" class="px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 transition-colors">
                {"Update Password"}
            </button>
        </form>
    }
}
