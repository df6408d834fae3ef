use crate::components::profile::billing_tab::BillingTab;
use crate::components::profile::notifications_tab::NotificationsTab;
use crate::components::profile::privacy_tab::PrivacyTab;
use crate::components::profile::profile_header::ProfileHeader;
use crate::components::profile::profile_tabs::ProfileTabs;
use crate::components::profile::security_tab::SecurityTab;
use crate::components::toast::use_toast;
use crate::pages::profile_state::ProfileTab;
use log::info;
use shared::{BillingDetails, NotificationPreferences, PasswordChange, PrivacySettings};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileLayoutProps {
    pub display_name: String,
    pub role_label: &'static str,
    pub avatar_url: Option<String>,
    pub active_tab: ProfileTab,
    pub on_tab_click: Callback<ProfileTab>,
    /// Content of the profile tab.
    pub children: Children,
}

/// Header, tab strip and the settings tabs both account types share. The
/// record form for the profile tab is supplied by the page.
#[function_component(ProfileLayout)]
pub fn profile_layout(props: &ProfileLayoutProps) -> Html {
    let toast = use_toast();

    // These tabs have no backend route yet; submissions are acknowledged locally.
    let acknowledge = |what: &'static str| {
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            info!("{} updated", what);
            if let Some(toast) = &toast {
                toast.success(format!("{} saved", what));
            }
        })
    };
    let on_security = acknowledge("Password").reform(|_: PasswordChange| ());
    let on_notifications = {
        let ack = acknowledge("Notification preferences");
        Callback::from(move |prefs: NotificationPreferences| {
            info!("Notification preferences: {:?}", prefs);
            ack.emit(());
        })
    };
    let on_billing = {
        let ack = acknowledge("Billing details");
        Callback::from(move |details: BillingDetails| {
            info!("Billing plan: {}", details.plan.as_str());
            ack.emit(());
        })
    };
    let on_privacy = {
        let ack = acknowledge("Privacy settings");
        Callback::from(move |settings: PrivacySettings| {
            info!("Privacy settings: {:?}", settings);
            ack.emit(());
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <main class="container mx-auto px-4 py-6 max-w-4xl">
                <ProfileHeader
                    display_name={props.display_name.clone()}
                    role_label={props.role_label}
                    avatar_url={props.avatar_url.clone()}
                />
                <ProfileTabs current_tab={props.active_tab} on_tab_click={props.on_tab_click.clone()} />
                <div class="mt-6 space-y-6">
                    {match props.active_tab {
                        ProfileTab::Profile => html! { <>{props.children.clone()}</> },
                        ProfileTab::Security => html! { <SecurityTab on_save={on_security} /> },
                        ProfileTab::Notifications => html! { <NotificationsTab on_save={on_notifications} /> },
                        ProfileTab::Billing => html! { <BillingTab on_save={on_billing} /> },
                        ProfileTab::Privacy => html! { <PrivacyTab on_save={on_privacy} /> },
                    }}
                </div>
            </main>
        </div>
    }
}
