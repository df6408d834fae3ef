use shared::PrivacySettings;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PrivacyTabProps {
    pub on_save: Callback<PrivacySettings>,
}

#[function_component(PrivacyTab)]
pub fn privacy_tab(props: &PrivacyTabProps) -> Html {
    let settings = use_state(PrivacySettings::default);

    let toggle = |apply: fn(&mut PrivacySettings)| {
        let settings = settings.clone();
        Callback::from(move |_: Event| {
            let mut next = (*settings).clone();
            apply(&mut next);
            settings.set(next);
        })
    };

    let on_submit = {
        let settings = settings.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit((*settings).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
            <h2 class="text-2xl font-bold text-gray-900">{"Privacy"}</h2>
            <label class="flex items-center space-x-3">
                <input type="checkbox" checked={settings.public_profile}
                    onchange={toggle(|s| s.public_profile = !s.public_profile)} />
                <span>{"Make my profile public"}</span>
            </label>
            <label class="flex items-center space-x-3">
                <input type="checkbox" checked={settings.show_contact_info}
                    onchange={toggle(|s| s.show_contact_info = !s.show_contact_info)} />
                <span>{"Show contact information on my profile"}</span>
            </label>
            <label class="flex items-center space-x-3">
                <input type="checkbox" checked={settings.allow_discovery}
                    onchange={toggle(|s| s.allow_discovery = !s.allow_discovery)} />
                <span>{"Let others find me in search"}</span>
            </label>
            <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition-colors">
                {"Save Privacy Settings"}
            </button>
        </form>
    }
}
