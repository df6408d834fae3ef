use log::{debug, error};
use shared::error::ApiError;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Profile,
    Security,
    Notifications,
    Billing,
    Privacy,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 5] = [
        ProfileTab::Profile,
        ProfileTab::Security,
        ProfileTab::Notifications,
        ProfileTab::Billing,
        ProfileTab::Privacy,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ProfileTab::Profile => "profile",
            ProfileTab::Security => "security",
            ProfileTab::Notifications => "notifications",
            ProfileTab::Billing => "billing",
            ProfileTab::Privacy => "privacy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Profile => "Profile",
            ProfileTab::Security => "Security",
            ProfileTab::Notifications => "Notifications",
            ProfileTab::Billing => "Billing",
            ProfileTab::Privacy => "Privacy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProfileTab::Profile => "👤",
            ProfileTab::Security => "🔒",
            ProfileTab::Notifications => "🔔",
            ProfileTab::Billing => "💳",
            ProfileTab::Privacy => "🛡️",
        }
    }
}

/// State owned by a profile page: which tab is open, the record the backend
/// holds, whether a fetch or save is in flight, and the avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState<R> {
    pub active_tab: ProfileTab,
    pub record: Option<R>,
    pub loading: bool,
    pub avatar_url: Option<String>,
}

impl<R> Default for ProfileState<R> {
    fn default() -> Self {
        Self {
            active_tab: ProfileTab::default(),
            record: None,
            // The record fetch starts on mount.
            loading: true,
            avatar_url: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ProfileAction<R> {
    SelectTab(ProfileTab),
    RecordLoaded(Result<Option<R>, ApiError>),
    AvatarLoaded(Result<Option<String>, ApiError>),
    SaveStarted,
    SaveFinished(Result<Option<R>, ApiError>),
}

impl<R: Clone + PartialEq + 'static> Reducible for ProfileState<R> {
    type Action = ProfileAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ProfileAction::SelectTab(tab) => Rc::new(Self {
                active_tab: tab,
                ..(*self).clone()
            }),
            ProfileAction::RecordLoaded(result) => {
                let record = match result {
                    Ok(record) => record,
                    Err(e) => {
                        error!("Profile record unavailable, showing empty form: {}", e);
                        None
                    }
                };
                Rc::new(Self {
                    record,
                    loading: false,
                    ..(*self).clone()
                })
            }
            ProfileAction::AvatarLoaded(result) => {
                let avatar_url = result.unwrap_or_else(|e| {
                    error!("Failed to load profile image: {}", e);
                    None
                });
                Rc::new(Self {
                    avatar_url,
                    ..(*self).clone()
                })
            }
            ProfileAction::SaveStarted => Rc::new(Self {
                loading: true,
                ..(*self).clone()
            }),
            ProfileAction::SaveFinished(result) => {
                let record = match result {
                    Ok(Some(saved)) => {
                        debug!("Profile saved");
                        Some(saved)
                    }
                    Ok(None) => {
                        error!("Save returned no record; keeping the previous one");
                        self.record.clone()
                    }
                    Err(e) => {
                        error!("Failed to save profile: {}", e);
                        self.record.clone()
                    }
                };
                Rc::new(Self {
                    record,
                    loading: false,
                    ..(*self).clone()
                })
            }
        }
    }
}
