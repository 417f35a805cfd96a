use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestType {
    Daily,
    Weekly,
    Challenge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestCategory {
    Awareness,
    Regulation,
    Empathy,
    Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for QuestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuestType::Daily => "daily",
            QuestType::Weekly => "weekly",
            QuestType::Challenge => "challenge",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

impl fmt::Display for QuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuestCategory::Awareness => "awareness",
            QuestCategory::Regulation => "regulation",
            QuestCategory::Empathy => "empathy",
            QuestCategory::Social => "social",
        };
        f.write_str(label)
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    pub category: QuestCategory,
    pub difficulty: Difficulty,
    pub xp_reward: u32,
}

pub static CATALOG: [Quest; 4] = [
    Quest {
        id: "1",
        title: "Emotional Awareness",
        description: "Take 5 minutes to identify your current emotions. How do they feel in your body?",
        quest_type: QuestType::Daily,
        category: QuestCategory::Awareness,
        difficulty: Difficulty::Easy,
        xp_reward: 50,
    },
    Quest {
        id: "2",
        title: "Stress Management",
        description: "When stressed today, take 3 deep breaths and note the difference in how you feel.",
        quest_type: QuestType::Daily,
        category: QuestCategory::Regulation,
        difficulty: Difficulty::Medium,
        xp_reward: 75,
    },
    Quest {
        id: "3",
        title: "Active Listening",
        description: "In your next conversation, focus entirely on understanding rather than responding.",
        quest_type: QuestType::Daily,
        category: QuestCategory::Empathy,
        difficulty: Difficulty::Hard,
        xp_reward: 100,
    },
    Quest {
        id: "4",
        title: "Gratitude Practice",
        description: "Write down three things you're grateful for and why they matter to you.",
        quest_type: QuestType::Daily,
        category: QuestCategory::Awareness,
        difficulty: Difficulty::Easy,
        xp_reward: 50,
    },
];

pub fn find(id: &str) -> Option<&'static Quest> {
    CATALOG.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rewards() {
        let rewards: Vec<_> = CATALOG.iter().map(|q| q.xp_reward).collect();
        assert_eq!(rewards, vec![50, 75, 100, 50]);
        assert!(CATALOG.iter().all(|q| q.quest_type == QuestType::Daily));
    }

    #[test]
    fn test_find() {
        assert_eq!(find("3").unwrap().title, "Active Listening");
        assert_eq!(find("3").unwrap().difficulty, Difficulty::Hard);
        assert!(find("99").is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(QuestType::Daily.to_string(), "daily");
        assert_eq!(QuestType::Challenge.to_string(), "challenge");
        let quest = find("2").unwrap();
        assert_eq!(
            format!("{}, {}, {}", quest.quest_type, quest.category, quest.difficulty),
            "daily, regulation, medium"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(CATALOG[1]).unwrap();
        assert_eq!(json["type"], "daily");
        assert_eq!(json["xpReward"], 75);
        assert_eq!(json["category"], "regulation");
    }
}
