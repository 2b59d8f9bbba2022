//! Login and the per-user context handed to screens.
//!
//! Login is cosmetic: any non-empty username and password are accepted. The
//! resulting [`Session`] is passed explicitly to whatever renders
//! role-dependent content.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use utoipa::ToSchema;

/// Who is using the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A student rider.
    #[default]
    Student,
    /// Transport office staff.
    Admin,
}

impl UserRole {
    /// Display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Admin => "Admin",
        }
    }
}

/// Login failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Username or password left blank.
    #[error("Please enter both username and password.")]
    MissingCredentials,
}

/// A logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    /// Name typed at login.
    pub username: String,
    /// Role chosen at login.
    pub role: UserRole,
}

impl Session {
    /// Whether this session belongs to staff.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}

/// Start a session.
///
/// # Errors
///
/// Returns [`SessionError::MissingCredentials`] if either field is blank.
pub fn login(username: &str, password: &str, role: UserRole) -> Result<Session, SessionError> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(SessionError::MissingCredentials);
    }
    info!(username, role = role.label(), "Logged in");
    Ok(Session {
        username: username.to_string(),
        role,
    })
}

/// Screen a home menu entry leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Schedule list with search.
    Schedule,
    /// Seat allotment.
    SeatAllotment,
    /// Route and stop timeline.
    Routes,
    /// Notification feed.
    Notifications,
}

/// One tile on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Target screen.
    pub destination: Destination,
    /// Tile title.
    pub title: &'static str,
    /// Icon symbol name.
    pub icon: &'static str,
    /// Subtitle.
    pub description: &'static str,
}

const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        destination: Destination::Schedule,
        title: "Bus Schedule",
        icon: "clock.fill",
        description: "View bus timings and routes",
    },
    MenuItem {
        destination: Destination::SeatAllotment,
        title: "Seat Allotment",
        icon: "person.2.fill",
        description: "View and manage seat assignments",
    },
    MenuItem {
        destination: Destination::Routes,
        title: "Bus Routes",
        icon: "map.fill",
        description: "View all bus routes and stops",
    },
    MenuItem {
        destination: Destination::Notifications,
        title: "Updates",
        icon: "bell.fill",
        description: "Important announcements",
    },
];

/// Home screen content for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeMenu {
    /// Greeting line.
    pub greeting: String,
    /// Tiles in display order.
    pub items: Vec<MenuItem>,
}

impl HomeMenu {
    /// Build the home screen for `session`.
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        Self {
            greeting: format!("Welcome {}!", session.role.label()),
            items: MENU_ITEMS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            login("", "secret", UserRole::Student),
            Err(SessionError::MissingCredentials)
        );
        assert_eq!(
            login("asha", "   ", UserRole::Student),
            Err(SessionError::MissingCredentials)
        );
    }

    #[test]
    fn test_login_accepts_any_credentials() {
        let session = login("  asha ", "x", UserRole::Admin).unwrap();
        assert_eq!(session.username, "asha");
        assert!(session.is_admin());
    }

    #[test]
    fn test_home_menu_depends_on_role() {
        let student = login("asha", "pw", UserRole::default()).unwrap();
        let admin = login("ravi", "pw", UserRole::Admin).unwrap();

        let menu = HomeMenu::for_session(&student);
        assert_eq!(menu.greeting, "Welcome Student!");
        assert_eq!(menu.items.len(), 4);
        assert_eq!(menu.items[1].destination, Destination::SeatAllotment);

        assert_eq!(HomeMenu::for_session(&admin).greeting, "Welcome Admin!");
    }
}
