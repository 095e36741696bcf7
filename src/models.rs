use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Onboarding,
    Plan,
    Logging,
    Progress,
}

impl Screen {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "onboarding" => Some(Self::Onboarding),
            "plan" => Some(Self::Plan),
            "logging" => Some(Self::Logging),
            "progress" => Some(Self::Progress),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Sleep,
    Workout,
    Meal,
}

impl LogKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sleep" => Some(Self::Sleep),
            "workout" => Some(Self::Workout),
            "meal" => Some(Self::Meal),
            _ => None,
        }
    }

    pub fn key_suffix(self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Workout => "workout",
            Self::Meal => "meal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sleep => "Sleep",
            Self::Workout => "Workout",
            Self::Meal => "Meal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub id: u64,
}

/// Today's three log flags plus the date they belong to. Flags for any other
/// date live only in storage and are never read as today's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLog {
    pub date: NaiveDate,
    pub sleep: bool,
    pub workout: bool,
    pub meal: bool,
}

impl DayLog {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            sleep: false,
            workout: false,
            meal: false,
        }
    }

    pub fn done_count(&self) -> u32 {
        [self.sleep, self.workout, self.meal]
            .into_iter()
            .filter(|flag| *flag)
            .count() as u32
    }

    pub fn all_logged(&self) -> bool {
        self.sleep && self.workout && self.meal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub title: &'static str,
    pub bullets: [&'static str; 3],
}

#[derive(Debug, Deserialize)]
pub struct ContinueRequest {
    pub sleep_hours: String,
    pub workout_goal: String,
    pub nutrition_goal: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleLogRequest {
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct DemoRequest {
    pub on: bool,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub screen: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub date: String,
    pub screen: Screen,
    pub sleep_hours: String,
    pub workout_goal: String,
    pub nutrition_goal: String,
    pub logged_sleep: bool,
    pub logged_workout: bool,
    pub logged_meal: bool,
    pub streak: u32,
    pub demo_mode: bool,
    pub plan: Plan,
    pub day_progress: f64,
    pub streak_progress: f64,
    pub notification: Option<Notification>,
}
