//! Behaviour of the settings screens' state, exercised without a browser.

use frontend::pages::profile_state::{ProfileAction, ProfileState, ProfileTab};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared::error::ApiError;
use shared::linked_accounts::LinkedAccountsView;
use shared::locations;
use shared::onboarding::{ConnectHandshake, OnboardingState};
use shared::{
    BusinessField, BusinessInfo, FormPhase, FormState, LinkedSocials, PersonalField, PersonalInfo,
    Platform,
};
use std::rc::Rc;
use yew::Reducible;

#[test]
fn influencer_page_with_failed_fetch_renders_blank_form() {
    let state = Rc::new(ProfileState::<PersonalInfo>::default())
        .reduce(ProfileAction::RecordLoaded(Err(ApiError::Network("timeout".into()))));
    assert!(!state.loading);

    let mut form = FormState::<PersonalInfo>::new();
    form.sync(state.record.as_ref());
    assert_eq!(form.draft().full_name, "");
    assert_eq!(form.draft().gender.as_str(), "male");
    assert_eq!(form.phase(), FormPhase::Populated);
}

#[test]
fn business_save_cycle_round_trips_through_page_state() {
    let loaded: BusinessInfo = serde_json::from_value(json!({
        "businessName": "Acme",
        "state": "Lagos",
        "city": "Ikeja"
    }))
    .unwrap();

    let page = Rc::new(ProfileState::<BusinessInfo>::default())
        .reduce(ProfileAction::RecordLoaded(Ok(Some(loaded.clone()))));

    let mut form = FormState::<BusinessInfo>::new();
    form.sync(page.record.as_ref());
    form.edit(BusinessField::State, "Ogun".into());
    assert_eq!(form.draft().city, "");
    form.edit(BusinessField::City, "Abeokuta".into());

    let submitted = form.submit();
    let page = page.reduce(ProfileAction::SaveStarted);
    assert!(page.loading);

    // Server echoes the record it stored.
    let page = page.reduce(ProfileAction::SaveFinished(Ok(Some(submitted.clone()))));
    assert!(!page.loading);
    assert_eq!(page.record.as_ref(), Some(&submitted));

    form.finish();
    assert!(form.sync(page.record.as_ref()));
    assert_eq!(form.draft().city, "Abeokuta");
    assert!(!form.is_dirty());
}

#[test]
fn city_options_follow_selected_state_for_every_state() {
    let mut form = FormState::<PersonalInfo>::new();
    form.sync(None);
    let mut previous: Option<&str> = None;
    for state in locations::states() {
        if let Some(prev) = previous {
            form.edit(PersonalField::City, locations::cities_for(prev)[0].to_string());
        }
        form.edit(PersonalField::State, state.to_string());
        assert_eq!(form.draft().city, "");
        assert_eq!(form.draft().city_options(), locations::cities_for(state));
        previous = Some(state);
    }
}

#[test]
fn linked_accounts_view_from_partial_payload() {
    let socials: LinkedSocials = serde_json::from_value(json!({
        "instagram_linked": true,
        "instagram_username": "acme",
        "facebook": false
    }))
    .unwrap();
    let view = LinkedAccountsView::from_result(Ok(socials));
    let linked: Vec<Platform> = view
        .badges()
        .iter()
        .filter(|s| s.linked)
        .map(|s| s.platform)
        .collect();
    assert_eq!(linked, vec![Platform::Instagram]);
    assert_eq!(view.badges()[0].handle.as_deref(), Some("acme"));
}

#[test]
fn onboarding_return_unlocks_continue() {
    let mut onboarding = OnboardingState::new();
    assert!(!onboarding.has_linked_accounts());
    onboarding.apply_handshake(ConnectHandshake::from_query("?connected=instagram"));
    assert!(onboarding.has_linked_accounts());
}

#[test]
fn onboarding_return_for_unsupported_platform_keeps_continue_locked() {
    let mut onboarding = OnboardingState::new();
    onboarding.apply_handshake(ConnectHandshake::from_query("?connected=youtube"));
    onboarding.apply_live_status(&LinkedSocials::default());
    assert!(!onboarding.is_linked(Platform::Youtube));
    assert!(!onboarding.has_linked_accounts());
}

#[test]
fn default_tab_is_profile() {
    assert_eq!(ProfileState::<PersonalInfo>::default().active_tab, ProfileTab::Profile);
}
