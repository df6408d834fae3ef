use crate::components::profile::form_model::event_value;
use shared::{BillingDetails, Plan, SharedError};
use validator::Validate;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BillingTabProps {
    pub on_save: Callback<BillingDetails>,
}

#[function_component(BillingTab)]
pub fn billing_tab(props: &BillingTabProps) -> Html {
    let details = use_state(BillingDetails::default);
    let error = use_state(|| None::<String>);

    let update = |apply: fn(&mut BillingDetails, String)| {
        let details = details.clone();
        Callback::from(move |e: Event| {
            let mut next = (*details).clone();
            apply(&mut next, event_value(&e));
            details.set(next);
        })
    };

    let on_submit = {
        let details = details.clone();
        let error = error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match details.validate() {
                Ok(()) => {
                    error.set(None);
                    on_save.emit((*details).clone());
                }
                Err(errors) => error.set(Some(SharedError::from(errors).to_string())),
            }
        })
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

    html! {
        <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
            <h2 class="text-2xl font-bold text-gray-900">{"Billing"}</h2>
            if let Some(msg) = (*error).as_ref() {
                <div class="p-4 bg-red-100 border border-red-400 text-red-700 rounded">{msg}</div>
            }
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"Plan"}</label>
                <select onchange={update(|d, v| d.plan = Plan::parse(&v))} class={input_class}>
                    {for Plan::ALL.iter().map(|plan| html! {
                        <option value={plan.as_str()} selected={details.plan == *plan}>{plan.label()}</option>
                    })}
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"Billing Email"}</label>
                <input
                    type="email"
                    value={details.billing_email.clone()}
                    onchange={update(|d, v| d.billing_email = v)}
                    class={input_class}
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"Card Holder"}</label>
                <input
                    type="text"
                    value={details.card_holder.clone()}
                    onchange={update(|d, v| d.card_holder = v)}
                    class={input_class}
                />
            </div>
            <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition-colors">
                {"Save Billing Details"}
            </button>
        </form>
    }
}
