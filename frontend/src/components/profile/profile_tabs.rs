use crate::pages::profile_state::ProfileTab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileTabsProps {
    pub current_tab: ProfileTab,
    pub on_tab_click: Callback<ProfileTab>,
}

#[function_component(ProfileTabs)]
pub fn profile_tabs(props: &ProfileTabsProps) -> Html {
    html! {
        <div class="border-b border-gray-200">
            <nav class="-mb-px flex space-x-8 overflow-x-auto">
                {ProfileTab::ALL.iter().map(|tab| {
                    let is_active = props.current_tab == *tab;
                    let tab = *tab;

                    html! {
                        <button
                            type="button"
                            class={classes!(
                                "py-2", "px-1", "border-b-2", "font-medium", "text-sm", "whitespace-nowrap",
                                if is_active {
                                    classes!("border-blue-500", "text-blue-600")
                                } else {
                                    classes!("border-transparent", "text-gray-500", "hover:text-gray-700", "hover:border-gray-300")
                                }
                            )}
                            onclick={props.on_tab_click.reform(move |_: MouseEvent| tab)}
                        >
                            <span class="mr-2">{tab.icon()}</span>
                            {tab.label()}
                        </button>
                    }
                }).collect::<Html>()}
            </nav>
        </div>
    }
}
