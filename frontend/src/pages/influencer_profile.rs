use crate::api::personal_info::{get_personal_info, upsert_personal_info};
use crate::api::profile_image::fetch_profile_image;
use crate::components::linked_accounts::LinkedAccounts;
use crate::components::profile::personal_info_form::PersonalInfoForm;
use crate::components::toast::use_toast;
use crate::pages::profile_layout::ProfileLayout;
use crate::pages::profile_state::{ProfileAction, ProfileState, ProfileTab};
use crate::Route;
use log::debug;
use shared::PersonalInfo;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(InfluencerProfilePage)]
pub fn influencer_profile_page() -> Html {
    let state = use_reducer(ProfileState::<PersonalInfo>::default);
    let toast = use_toast();

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            debug!("Loading influencer profile");
            let record_dispatcher = dispatcher.clone();
            spawn_local(async move {
                record_dispatcher.dispatch(ProfileAction::RecordLoaded(get_personal_info().await));
            });
            spawn_local(async move {
                dispatcher.dispatch(ProfileAction::AvatarLoaded(fetch_profile_image().await));
            });
            || ()
        });
    }

    let on_tab_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |tab: ProfileTab| dispatcher.dispatch(ProfileAction::SelectTab(tab)))
    };

    let on_save = {
        let dispatcher = state.dispatcher();
        Callback::from(move |info: PersonalInfo| {
            dispatcher.dispatch(ProfileAction::SaveStarted);
            let dispatcher = dispatcher.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let result = upsert_personal_info(&info).await;
                if let (Ok(Some(_)), Some(toast)) = (&result, &toast) {
                    toast.success("Personal information saved");
                }
                dispatcher.dispatch(ProfileAction::SaveFinished(result));
            });
        })
    };

    let display_name = state
        .record
        .as_ref()
        .and_then(|r| r.full_name.clone())
        .unwrap_or_default();

    html! {
        <ProfileLayout
            display_name={display_name}
            role_label="Influencer account"
            avatar_url={state.avatar_url.clone()}
            active_tab={state.active_tab}
            on_tab_click={on_tab_click}
        >
            <PersonalInfoForm
                record={state.record.clone()}
                loading={state.loading}
                on_save={on_save}
            />
            <LinkedAccounts />
            <div class="text-right">
                <Link<Route> to={Route::SocialLink} classes="text-blue-600 hover:underline">
                    {"Manage linked accounts"}
                </Link<Route>>
            </div>
        </ProfileLayout>
    }
}
