//! Mood-based activity recommendations.
//!
//! A pure lookup: no storage, no network.

use serde::Serialize;

/// A support resource shown with every recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub contact: &'static str,
    pub available: &'static str,
}

pub const CRISIS_HELPLINE: Resource = Resource {
    title: "Crisis Helpline",
    contact: "1-800-273-8255",
    available: "24/7",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub activities: Vec<&'static str>,
    pub message: &'static str,
    pub resources: Vec<Resource>,
}

struct MoodProfile {
    label: &'static str,
    activities: [&'static str; 4],
    message: &'static str,
}

static PROFILES: [MoodProfile; 5] = [
    MoodProfile {
        label: "😊 Happy",
        activities: [
            "Journal your positive experiences",
            "Share your joy with others",
            "Plan future goals",
            "Try a new hobby",
        ],
        message: "Great mood! Here are some ways to maintain your positive energy:",
    },
    MoodProfile {
        label: "😔 Sad",
        activities: [
            "Gentle exercise",
            "Talk to a friend",
            "Practice self-care",
            "Listen to uplifting music",
        ],
        message: "It's okay to feel this way. Here are some activities that might help:",
    },
    MoodProfile {
        label: "😤 Angry",
        activities: [
            "Deep breathing exercises",
            "Physical exercise",
            "Progressive muscle relaxation",
            "Write out your feelings",
        ],
        message: "Let's channel that energy constructively:",
    },
    MoodProfile {
        label: "😟 Anxious",
        activities: [
            "Grounding exercises",
            "Meditation",
            "Take a nature walk",
            "Practice mindfulness",
        ],
        message: "Here are some calming activities to try:",
    },
    MoodProfile {
        label: "😌 Peaceful",
        activities: [
            "Light yoga",
            "Gratitude journaling",
            "Creative activities",
            "Mindful walking",
        ],
        message: "Maintain your calm state with these activities:",
    },
];

const FALLBACK_ACTIVITIES: [&str; 2] = ["Take a break", "Practice self-care"];
const FALLBACK_MESSAGE: &str = "Here are some helpful activities:";

/// The known mood labels, in display order.
pub fn mood_labels() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.label)
}

/// Canonical label for `mood`, matching either the full label
/// ("😊 Happy") or the bare word ("happy", any case).
pub fn canonical_mood(mood: &str) -> Option<&'static str> {
    let mood = mood.trim();
    PROFILES
        .iter()
        .find(|p| {
            p.label == mood
                || p.label
                    .split_once(' ')
                    .is_some_and(|(_, word)| word.eq_ignore_ascii_case(mood))
        })
        .map(|p| p.label)
}

/// Activities, message and resources for a mood label.
pub fn recommend(mood: &str) -> Recommendation {
    let profile = canonical_mood(mood).and_then(|label| PROFILES.iter().find(|p| p.label == label));

    match profile {
        Some(profile) => Recommendation {
            activities: profile.activities.to_vec(),
            message: profile.message,
            resources: vec![CRISIS_HELPLINE],
        },
        None => Recommendation {
            activities: FALLBACK_ACTIVITIES.to_vec(),
            message: FALLBACK_MESSAGE,
            resources: vec![CRISIS_HELPLINE],
        },
    }
}
