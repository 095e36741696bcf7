use crate::models::{DayLog, Plan};

const STREAK_GOAL_DAYS: f64 = 5.0;

pub fn derive_plan(sleep_hours: &str) -> Plan {
    let hours = match sleep_hours.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            return Plan {
                title: "Starter day",
                bullets: [
                    "10-20 min brisk walk",
                    "Balanced plate: protein + veggies + smart carbs",
                    "Lights out by 10:30 pm",
                ],
            };
        }
    };

    if hours < 6.0 {
        Plan {
            title: "Recovery-focused day",
            bullets: [
                "Lighter workout: 20-30 min easy walk or mobility",
                "+40-60 g carbs earlier in the day for recovery",
                "Prioritize an early bedtime",
            ],
        }
    } else if hours < 8.0 {
        Plan {
            title: "Build day",
            bullets: [
                "Strength: 3x full-body compounds (30-40 min)",
                "Protein target spread across meals",
                "Wind-down routine 30 min before bed",
            ],
        }
    } else {
        Plan {
            title: "Push day",
            bullets: [
                "Strength + finisher: 35-45 min",
                "+10% training volume vs last session",
                "Hydration: 2-3 L across day",
            ],
        }
    }
}

pub fn day_progress(day: &DayLog) -> f64 {
    f64::from(day.done_count()) / 3.0 * 100.0
}

pub fn streak_progress(streak: u32) -> f64 {
    (f64::from(streak) * 100.0 / STREAK_GOAL_DAYS).min(100.0)
}
