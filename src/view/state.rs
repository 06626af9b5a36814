use crate::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    // Profile request not answered yet.
    #[default]
    Loading,
    Anonymous,
    Authenticated(UserProfile),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, ViewState::Authenticated(_))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            ViewState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }
}
