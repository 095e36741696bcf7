use crate::models::{DayLog, LogKind, Notification, Screen, SessionView};
use crate::plan::{day_progress, derive_plan, streak_progress};
use crate::storage::Storage;
use chrono::{NaiveDate, Utc};

pub const KEY_PREFIX: &str = "habit_";

fn field_key(name: &str) -> String {
    format!("{KEY_PREFIX}{name}")
}

fn day_key(date: NaiveDate, suffix: &str) -> String {
    format!("{KEY_PREFIX}{date}_{suffix}")
}

fn load_day<S: Storage>(store: &S, date: NaiveDate) -> DayLog {
    DayLog {
        date,
        sleep: store.get(&day_key(date, "sleep")).as_deref() == Some("1"),
        workout: store.get(&day_key(date, "workout")).as_deref() == Some("1"),
        meal: store.get(&day_key(date, "meal")).as_deref() == Some("1"),
    }
}

/// The full in-memory state for one instance of the app, plus the storage it
/// mirrors every committed write into. All mutations go through the named
/// operations below; each derives "today" exactly once from its caller.
#[derive(Debug)]
pub struct Session<S> {
    pub store: S,
    pub sleep_hours: String,
    pub workout_goal: String,
    pub nutrition_goal: String,
    pub day: DayLog,
    pub streak: u32,
    pub screen: Screen,
    pub demo_mode: bool,
    pub notification: Option<Notification>,
}

impl<S: Storage> Session<S> {
    pub fn hydrate(store: S, today: NaiveDate) -> Self {
        let sleep_hours = store.get(&field_key("sleep")).unwrap_or_default();
        let workout_goal = store.get(&field_key("workoutGoal")).unwrap_or_default();
        let nutrition_goal = store.get(&field_key("nutritionGoal")).unwrap_or_default();
        let streak = store
            .get(&field_key("streak"))
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(0);
        let day = load_day(&store, today);

        Self {
            store,
            sleep_hours,
            workout_goal,
            nutrition_goal,
            day,
            streak,
            screen: Screen::Onboarding,
            demo_mode: false,
            notification: None,
        }
    }

    /// Re-reads the day flags when the calendar date has moved on since the
    /// last operation, so yesterday's flags never count as today's.
    pub fn roll_to(&mut self, today: NaiveDate) {
        if self.day.date != today {
            self.day = load_day(&self.store, today);
        }
    }

    pub fn continue_to_plan(
        &mut self,
        sleep_hours: String,
        workout_goal: String,
        nutrition_goal: String,
        today: NaiveDate,
    ) {
        self.roll_to(today);
        self.sleep_hours = sleep_hours;
        self.workout_goal = workout_goal;
        self.nutrition_goal = nutrition_goal;
        self.store.set(&field_key("sleep"), &self.sleep_hours);
        self.store.set(&field_key("workoutGoal"), &self.workout_goal);
        self.store.set(&field_key("nutritionGoal"), &self.nutrition_goal);
        self.screen = Screen::Plan;
        self.notify("Saved");
    }

    pub fn toggle_log(&mut self, kind: LogKind, today: NaiveDate) {
        self.roll_to(today);
        let flag = match kind {
            LogKind::Sleep => {
                self.day.sleep = !self.day.sleep;
                self.day.sleep
            }
            LogKind::Workout => {
                self.day.workout = !self.day.workout;
                self.day.workout
            }
            LogKind::Meal => {
                self.day.meal = !self.day.meal;
                self.day.meal
            }
        };
        let key = day_key(today, kind.key_suffix());
        self.store.set(&key, if flag { "1" } else { "0" });
        let label = kind.label();
        let verb = if flag { "logged" } else { "unlogged" };
        self.notify(format!("{label} {verb}"));
    }

    pub fn complete_day(&mut self, today: NaiveDate) {
        self.roll_to(today);
        let marker = day_key(today, "completed");
        let already = self.store.get(&marker).as_deref() == Some("1");
        if self.day.all_logged() && !already {
            self.streak += 1;
            let streak = self.streak.to_string();
            self.store.set(&field_key("streak"), &streak);
            self.store.set(&marker, "1");
            self.notify("Day complete, streak +1");
        } else if !self.day.all_logged() {
            self.notify("Log all 3 to complete the day");
        }
        // Already completed today: no increment and no notification, but the
        // screen change still happens.
        self.screen = Screen::Progress;
    }

    pub fn seed_demo(&mut self, on: bool, today: NaiveDate) {
        self.roll_to(today);
        self.demo_mode = on;
        if !on {
            // Turning demo mode off leaves the seeded values in place.
            self.notify("Demo mode off");
            return;
        }

        self.sleep_hours = "5.5".to_string();
        self.workout_goal = "Upper body strength".to_string();
        self.nutrition_goal = "160g protein, 2L water".to_string();
        self.day = DayLog {
            date: today,
            sleep: true,
            workout: true,
            meal: false,
        };
        self.store.set(&field_key("sleep"), "5.5");
        self.store.set(&field_key("workoutGoal"), "Upper body strength");
        self.store.set(&field_key("nutritionGoal"), "160g protein, 2L water");
        self.store.set(&day_key(today, "sleep"), "1");
        self.store.set(&day_key(today, "workout"), "1");
        self.store.set(&day_key(today, "meal"), "0");
        self.notify("Demo data loaded");
    }

    pub fn reset_all(&mut self, today: NaiveDate) {
        for key in self.store.keys() {
            if key.starts_with(KEY_PREFIX) {
                self.store.remove(&key);
            }
        }
        self.sleep_hours = String::new();
        self.workout_goal = String::new();
        self.nutrition_goal = String::new();
        self.day = DayLog::empty(today);
        self.streak = 0;
        self.demo_mode = false;
        self.screen = Screen::Onboarding;
        self.notify("Reset complete");
    }

    pub fn navigate(&mut self, to: Screen, today: NaiveDate) {
        self.roll_to(today);
        if self.screen == Screen::Plan && to == Screen::Logging {
            self.notify("Start logging");
        }
        self.screen = to;
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            id: Utc::now().timestamp_millis() as u64,
        });
    }

    /// Clears the notification only if `id` still matches, so a stale expiry
    /// timer never wipes a newer message.
    pub fn clear_notification_if(&mut self, id: u64) {
        if self.notification.as_ref().map(|n| n.id) == Some(id) {
            self.notification = None;
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            date: self.day.date.to_string(),
            screen: self.screen,
            sleep_hours: self.sleep_hours.clone(),
            workout_goal: self.workout_goal.clone(),
            nutrition_goal: self.nutrition_goal.clone(),
            logged_sleep: self.day.sleep,
            logged_workout: self.day.workout,
            logged_meal: self.day.meal,
            streak: self.streak,
            demo_mode: self.demo_mode,
            plan: derive_plan(&self.sleep_hours),
            day_progress: day_progress(&self.day),
            streak_progress: streak_progress(self.streak),
            notification: self.notification.clone(),
        }
    }
}
