//! Navigation gate.
//!
//! One function decides where a visitor belongs (`evaluate`) and one maps a
//! requested route to the route that actually renders (`resolve`).

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

use super::flags::SessionFlags;

/// Default onboarding validity window.
pub const DEFAULT_ONBOARDING_EXPIRY_DAYS: i64 = 30;

/// Where the gate sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Onboarding,
    Login,
    Home,
}

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Onboarding,
    Login,
    Register,
    Home,
    Community,
    AcceptanceTherapy,
    Journal,
    Achievements,
    MindfulQuest,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Root,
        Route::Onboarding,
        Route::Login,
        Route::Register,
        Route::Home,
        Route::Community,
        Route::AcceptanceTherapy,
        Route::Journal,
        Route::Achievements,
        Route::MindfulQuest,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Onboarding => "/onboarding",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Home => "/home",
            Route::Community => "/community",
            Route::AcceptanceTherapy => "/acceptance-therapy",
            Route::Journal => "/journal",
            Route::Achievements => "/achievements",
            Route::MindfulQuest => "/mindful-quest",
        }
    }

    /// Routes that render only for onboarded, signed-in users.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Home
                | Route::Community
                | Route::AcceptanceTherapy
                | Route::Journal
                | Route::Achievements
                | Route::MindfulQuest
        )
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Onboarding => Route::Onboarding,
            Destination::Login => Route::Login,
            Destination::Home => Route::Home,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    /// Accepts "/community", "community" and "".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('/');
        Route::ALL
            .iter()
            .copied()
            .find(|route| route.path().trim_start_matches('/') == trimmed)
            .ok_or_else(|| format!("Unknown route: {}", s))
    }
}

/// The navigation gate with its onboarding expiry window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    expiry: Duration,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(Duration::days(DEFAULT_ONBOARDING_EXPIRY_DAYS))
    }
}

impl Gate {
    pub fn new(expiry: Duration) -> Self {
        Self { expiry }
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Onboarding is valid when complete and stamped within the window.
    /// A missing timestamp counts as expired.
    pub fn onboarding_valid(&self, flags: &SessionFlags, now: DateTime<Utc>) -> bool {
        flags.onboarding_complete
            && flags
                .onboarding_timestamp
                .is_some_and(|at| now - at <= self.expiry)
    }

    pub fn evaluate(&self, flags: &SessionFlags, now: DateTime<Utc>) -> Destination {
        if !self.onboarding_valid(flags, now) {
            Destination::Onboarding
        } else if !flags.is_authenticated {
            Destination::Login
        } else {
            Destination::Home
        }
    }

    /// The route that renders when `requested` is visited.
    pub fn resolve(&self, flags: &SessionFlags, requested: Route, now: DateTime<Utc>) -> Route {
        let destination = self.evaluate(flags, now);
        match requested {
            Route::Root => destination.into(),
            Route::Onboarding => destination.into(),
            Route::Login | Route::Register => match destination {
                Destination::Login => requested,
                other => other.into(),
            },
            protected => {
                if destination == Destination::Home {
                    protected
                } else {
                    destination.into()
                }
            }
        }
    }
}
