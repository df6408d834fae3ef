use crate::components::location_select::LocationSelect;
use crate::components::profile::form_model::{
    on_change, on_input, on_value, use_record_form, FormAction,
};
use shared::forms::personal::NICHES;
use shared::{Gender, PersonalField, PersonalInfo, SharedError};
use validator::Validate;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PersonalInfoFormProps {
    pub record: Option<PersonalInfo>,
    pub loading: bool,
    pub on_save: Callback<PersonalInfo>,
}

#[function_component(PersonalInfoForm)]
pub fn personal_info_form(props: &PersonalInfoFormProps) -> Html {
    let model = use_record_form(props.record.clone(), props.loading);
    let validation_error = use_state(|| None::<String>);

    let on_submit = {
        let model = model.clone();
        let validation_error = validation_error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let record = model.form.record();
            if let Err(errors) = record.validate() {
                validation_error.set(Some(SharedError::from(errors).to_string()));
                return;
            }
            validation_error.set(None);
            model.dispatch(FormAction::Submit);
            on_save.emit(record);
        })
    };

    let on_discard = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(FormAction::Reset))
    };

    let draft = model.form.draft().clone();
    let dirty = model.form.is_dirty();
    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

    html! {
        <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-6">
            <h2 class="text-2xl font-bold text-gray-900">{"Personal Information"}</h2>

            if let Some(msg) = (*validation_error).as_ref() {
                <div class="p-4 bg-red-100 border border-red-400 text-red-700 rounded">{msg}</div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-2">{"Full Name"}</label>
                    <input
                        type="text"
                        value={draft.full_name.clone()}
                        oninput={on_input(&model, PersonalField::FullName)}
                        class={input_class}
                        placeholder="Enter your full name"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-2">{"Phone Number"}</label>
                    <input
                        type="tel"
                        value={draft.phone_number.clone()}
                        oninput={on_input(&model, PersonalField::PhoneNumber)}
                        class={input_class}
                        placeholder="+234 801 234 5678"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-2">{"Gender"}</label>
                    <select onchange={on_change(&model, PersonalField::Gender)} class={input_class}>
                        {for Gender::ALL.iter().map(|gender| html! {
                            <option value={gender.as_str()} selected={draft.gender == *gender}>
                                {gender.label()}
                            </option>
                        })}
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-2">{"Niche"}</label>
                    <select onchange={on_change(&model, PersonalField::Niche)} class={input_class}>
                        <option value="" selected={draft.niche.is_empty()}>{"Select niche"}</option>
                        {for NICHES.iter().map(|niche| html! {
                            <option value={*niche} selected={draft.niche == *niche}>{*niche}</option>
                        })}
                    </select>
                </div>
            </div>

            <LocationSelect
                state={draft.state.clone()}
                city={draft.city.clone()}
                on_state={on_value(&model, PersonalField::State)}
                on_city={on_value(&model, PersonalField::City)}
            />

            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"Bio"}</label>
                <textarea
                    rows="4"
                    value={draft.bio.clone()}
                    oninput={on_input(&model, PersonalField::Bio)}
                    class={input_class}
                    placeholder="Tell brands about yourself"
                />
            </div>

            <div class="flex space-x-3">
                <button
                    type="submit"
                    disabled={props.loading}
                    class="px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50 transition-colors"
                >
                    {if props.loading { "Saving..." } else { "Save Changes" }}
                </button>
                <button
                    type="button"
                    onclick={on_discard}
                    disabled={!dirty || props.loading}
                    class="px-4 py-2 bg-gray-600 text-white rounded hover:bg-gray-700 disabled:opacity-50 transition-colors"
                >
                    {"Discard"}
                </button>
            </div>
        </form>
    }
}
