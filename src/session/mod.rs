//! Session state: onboarding, sign-in and the navigation gate.

pub mod flags;
pub mod gate;
pub mod manager;
pub mod onboarding;

pub use flags::{SessionFlags, UserType};
pub use gate::{Destination, Gate, Route, DEFAULT_ONBOARDING_EXPIRY_DAYS};
pub use manager::SessionManager;
pub use onboarding::{OnboardingFlow, OnboardingStep, Question, BREATH_COUNT, QUESTIONS};

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A fresh anonymous user id: `anon_` followed by nine base-36 digits.
pub fn anonymous_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("anon_{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_id_shape() {
        let id = anonymous_id();
        assert_eq!(id.len(), 14);
        assert!(id[5..].bytes().all(|b| BASE36.contains(&b)));
        assert_ne!(anonymous_id(), anonymous_id());
    }
}
