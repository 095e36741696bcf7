use crate::errors::AppError;
use crate::models::{
    ContinueRequest, DemoRequest, LogKind, NavigateRequest, Screen, SessionView, ToggleLogRequest,
};
use crate::state::AppState;
use crate::storage::{persist_data, MemoryStore};
use crate::ui::render_page;
use axum::{extract::State, response::Html, Json};
use chrono::{Local, NaiveDate};
use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::error;

pub const NOTIFICATION_TTL: Duration = Duration::from_millis(1800);

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let mut session = state.session.lock().await;
    session.roll_to(today);
    Html(render_page(&session.view()))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let today = today();
    let mut session = state.session.lock().await;
    session.roll_to(today);
    Json(session.view())
}

pub async fn continue_onboarding(
    State(state): State<AppState>,
    Json(payload): Json<ContinueRequest>,
) -> Json<SessionView> {
    let today = today();
    let mut session = state.session.lock().await;
    session.continue_to_plan(
        payload.sleep_hours,
        payload.workout_goal,
        payload.nutrition_goal,
        today,
    );
    save(&state, &session.store).await;
    let view = session.view();
    drop(session);

    schedule_notification_clear(&state, &view);
    Json(view)
}

pub async fn toggle_log(
    State(state): State<AppState>,
    Json(payload): Json<ToggleLogRequest>,
) -> Result<Json<SessionView>, AppError> {
    let kind = match LogKind::parse(payload.kind.trim()) {
        Some(kind) => kind,
        None => {
            return Err(AppError::bad_request(
                "kind must be 'sleep', 'workout' or 'meal'",
            ));
        }
    };

    let today = today();
    let mut session = state.session.lock().await;
    session.toggle_log(kind, today);
    save(&state, &session.store).await;
    let view = session.view();
    drop(session);

    schedule_notification_clear(&state, &view);
    Ok(Json(view))
}

pub async fn complete_day(State(state): State<AppState>) -> Json<SessionView> {
    let today = today();
    let mut session = state.session.lock().await;
    session.complete_day(today);
    save(&state, &session.store).await;
    let view = session.view();
    drop(session);

    schedule_notification_clear(&state, &view);
    Json(view)
}

pub async fn seed_demo(
    State(state): State<AppState>,
    Json(payload): Json<DemoRequest>,
) -> Json<SessionView> {
    let today = today();
    let mut session = state.session.lock().await;
    session.seed_demo(payload.on, today);
    save(&state, &session.store).await;
    let view = session.view();
    drop(session);

    schedule_notification_clear(&state, &view);
    Json(view)
}

pub async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<SessionView>, AppError> {
    let to = match Screen::parse(payload.screen.trim()) {
        Some(screen) => screen,
        None => {
            return Err(AppError::bad_request(
                "screen must be 'onboarding', 'plan', 'logging' or 'progress'",
            ));
        }
    };

    let today = today();
    let mut session = state.session.lock().await;
    session.navigate(to, today);
    let view = session.view();
    drop(session);

    schedule_notification_clear(&state, &view);
    Ok(Json(view))
}

pub async fn reset_all(State(state): State<AppState>) -> Json<SessionView> {
    let today = today();
    let mut session = state.session.lock().await;
    session.reset_all(today);
    save(&state, &session.store).await;
    let view = session.view();
    drop(session);

    schedule_notification_clear(&state, &view);
    Json(view)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// Persistence failures only cost durability: the in-memory session has already
// moved on and the response reflects it.
async fn save(state: &AppState, store: &MemoryStore) {
    if let Err(err) = persist_data(&state.data_path, store).await {
        error!("failed to persist session data: {err}");
    }
}

fn schedule_notification_clear(state: &AppState, view: &SessionView) {
    let id = match &view.notification {
        Some(notification) => notification.id,
        None => return,
    };

    let session = Arc::clone(&state.session);
    tokio::spawn(async move {
        sleep(NOTIFICATION_TTL).await;
        // A newer notification has its own timer; only clear our own.
        session.lock().await.clear_notification_if(id);
    });
}
