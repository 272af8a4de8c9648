//! DTOs for event alert subscriptions.

use serde::Serialize;

use crate::service::AlertToggle;

/// Response for a toggle request, reporting the resulting subscription
/// state.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AlertToggleResponse {
    /// Resulting state, `subscribed` or `unsubscribed`.
    pub status: String,
    /// Human-readable summary.
    pub message: String,
}

impl From<AlertToggle> for AlertToggleResponse {
    fn from(toggle: AlertToggle) -> Self {
        match toggle {
            AlertToggle::Subscribed => Self {
                status: "subscribed".to_string(),
                message: "Alert registered for this event".to_string(),
            },
            AlertToggle::Unsubscribed => Self {
                status: "unsubscribed".to_string(),
                message: "Alert removed for this event".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_maps_to_status_string() {
        let on = AlertToggleResponse::from(AlertToggle::Subscribed);
        assert_eq!(on.status, "subscribed");
        let off = AlertToggleResponse::from(AlertToggle::Unsubscribed);
        assert_eq!(off.status, "unsubscribed");
    }
}
