pub mod linked_accounts;
pub mod location_select;
pub mod profile {
    pub mod billing_tab;
    pub mod business_info_form;
    pub mod form_model;
    pub mod notifications_tab;
    pub mod personal_info_form;
    pub mod privacy_tab;
    pub mod profile_header;
    pub mod profile_tabs;
    pub mod security_tab;
}
pub mod toast;
