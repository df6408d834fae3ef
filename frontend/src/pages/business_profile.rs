use crate::api::business_info::{get_business_info, upsert_business_info};
use crate::api::profile_image::fetch_profile_image;
use crate::components::profile::business_info_form::BusinessInfoForm;
use crate::components::toast::use_toast;
use crate::pages::profile_layout::ProfileLayout;
use crate::pages::profile_state::{ProfileAction, ProfileState, ProfileTab};
use log::debug;
use shared::BusinessInfo;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(BusinessProfilePage)]
pub fn business_profile_page() -> Html {
    let state = use_reducer(ProfileState::<BusinessInfo>::default);
    let toast = use_toast();

    // Record and avatar load independently; neither waits for the other.
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            debug!("Loading business profile");
            let record_dispatcher = dispatcher.clone();
            spawn_local(async move {
                record_dispatcher.dispatch(ProfileAction::RecordLoaded(get_business_info().await));
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
        Callback::from(move |info: BusinessInfo| {
            dispatcher.dispatch(ProfileAction::SaveStarted);
            let dispatcher = dispatcher.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let result = upsert_business_info(&info).await;
                if let (Ok(Some(_)), Some(toast)) = (&result, &toast) {
                    toast.success("Business information saved");
                }
                dispatcher.dispatch(ProfileAction::SaveFinished(result));
            });
        })
    };

    let display_name = state
        .record
        .as_ref()
        .and_then(|r| r.business_name.clone())
        .unwrap_or_default();

    html! {
        <ProfileLayout
            display_name={display_name}
            role_label="Business account"
            avatar_url={state.avatar_url.clone()}
            active_tab={state.active_tab}
            on_tab_click={on_tab_click}
        >
            <BusinessInfoForm
                record={state.record.clone()}
                loading={state.loading}
                on_save={on_save}
            />
        </ProfileLayout>
    }
}
