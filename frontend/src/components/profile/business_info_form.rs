use crate::components::location_select::LocationSelect;
use crate::components::profile::form_model::{
    on_change, on_input, on_value, use_record_form, FormAction,
};
use shared::models::business_info::INDUSTRIES;
use shared::{BusinessField, BusinessInfo, SharedError};
use validator::Validate;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BusinessInfoFormProps {
    pub record: Option<BusinessInfo>,
    pub loading: bool,
    pub on_save: Callback<BusinessInfo>,
}

#[function_component(BusinessInfoForm)]
pub fn business_info_form(props: &BusinessInfoFormProps) -> Html {
    let model = use_record_form(props.record.clone(), props.loading);
    let validation_error = use_state(|| None::<String>);

    let on_submit = {
        let model = model.clone();
        let validation_error = validation_error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let record = model.form.record();
            match record.validate() {
                Ok(()) => {
                    validation_error.set(None);
                    model.dispatch(FormAction::Submit);
                    on_save.emit(record);
                }
                Err(errors) => validation_error.set(Some(SharedError::from(errors).to_string())),
            }
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
            <h2 class="text-2xl font-bold text-gray-900">{"Business Information"}</h2>

            if let Some(msg) = (*validation_error).as_ref() {
                <div class="p-4 bg-red-100 border border-red-400 text-red-700 rounded">{msg}</div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-2">{"Business Name"}</label>
                    <input
                        type="text"
                        value={draft.business_name.clone()}
                        oninput={on_input(&model, BusinessField::BusinessName)}
                        class={input_class}
                        placeholder="Your company name"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-2">{"Website"}</label>
                    <input
                        type="url"
                        value={draft.business_website.clone()}
                        oninput={on_input(&model, BusinessField::BusinessWebsite)}
                        class={input_class}
                        placeholder="https://example.com"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-2">{"Phone Number"}</label>
                    <input
                        type="tel"
                        value={draft.phone_number.clone()}
                        oninput={on_input(&model, BusinessField::PhoneNumber)}
                        class={input_class}
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-2">{"Industry"}</label>
                    <select onchange={on_change(&model, BusinessField::Industry)} class={input_class}>
                        <option value="" selected={draft.industry.is_empty()}>{"Select industry"}</option>
                        {for INDUSTRIES.iter().map(|industry| html! {
                            <option value={*industry} selected={draft.industry == *industry}>{*industry}</option>
                        })}
                    </select>
                </div>
            </div>

            <LocationSelect
                state={draft.state.clone()}
                city={draft.city.clone()}
                on_state={on_value(&model, BusinessField::State)}
                on_city={on_value(&model, BusinessField::City)}
            />

            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"Additional Information"}</label>
                <textarea
                    rows="4"
                    value={draft.additional_info.clone()}
                    oninput={on_input(&model, BusinessField::AdditionalInfo)}
                    class={input_class}
                    placeholder="What should influencers know about your brand?"
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
