use crate::components::profile::form_model::event_value;
use shared::locations;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocationSelectProps {
    pub state: String,
    pub city: String,
    pub on_state: Callback<String>,
    pub on_city: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Dependent state → city dropdowns. Picking a state offers only its cities;
/// the owner is expected to clear the city when the state changes.
#[function_component(LocationSelect)]
pub fn location_select(props: &LocationSelectProps) -> Html {
    let on_state = props.on_state.reform(|e: Event| event_value(&e));
    let on_city = props.on_city.reform(|e: Event| event_value(&e));
    let cities = locations::cities_for(&props.state);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"State"}</label>
                <select
                    onchange={on_state}
                    disabled={props.disabled}
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                >
                    <option value="" selected={props.state.is_empty()}>{"Select state"}</option>
                    {for locations::states().into_iter().map(|state| html! {
                        <option value={state} selected={props.state == state}>{state}</option>
                    })}
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-600 mb-2">{"City"}</label>
                <select
                    onchange={on_city}
                    disabled={props.disabled || cities.is_empty()}
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100"
                >
                    <option value="" selected={props.city.is_empty()}>{"Select city"}</option>
                    {for cities.iter().map(|city| html! {
                        <option value={*city} selected={props.city == *city}>{*city}</option>
                    })}
                </select>
            </div>
        </div>
    }
}
