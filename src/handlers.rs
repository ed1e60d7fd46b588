use crate::calendar::{build_month, month_start, parse_month};
use crate::errors::{AppError, StoreError};
use crate::models::{
    AddSubjectRequest, DayStatusResponse, DeleteResponse, MarkRequest, MarkResponse, MonthQuery,
    MonthResponse, SelectedSubject, StateResponse, SubjectRef, SubjectSummary,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::store::AttendanceStore;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&today().to_string()))
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let store = state.store.lock().await;
    Json(to_state(&store))
}

pub async fn add_subject(
    State(state): State<AppState>,
    Json(payload): Json<AddSubjectRequest>,
) -> Result<(StatusCode, Json<StateResponse>), AppError> {
    let mut store = state.store.lock().await;
    let name = store.add_subject(&payload.name)?;
    state.save(&store).await?;

    info!("added subject {name:?}");
    Ok((StatusCode::CREATED, Json(to_state(&store))))
}

pub async fn delete_subject(
    State(state): State<AppState>,
    Query(SubjectRef { name }): Query<SubjectRef>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut store = state.store.lock().await;
    let removed = store.delete_subject(&name);
    state.save(&store).await?;

    info!("deleted subject {name:?} (removed: {removed})");
    Ok(Json(DeleteResponse {
        name,
        removed,
        state: to_state(&store),
    }))
}

pub async fn select_subject(
    State(state): State<AppState>,
    Json(SubjectRef { name }): Json<SubjectRef>,
) -> Result<Json<StateResponse>, AppError> {
    let mut store = state.store.lock().await;
    store.select_subject(&name)?;
    Ok(Json(to_state(&store)))
}

pub async fn mark_attendance(
    State(state): State<AppState>,
    Json(payload): Json<MarkRequest>,
) -> Result<Json<MarkResponse>, AppError> {
    let mut store = state.store.lock().await;
    let status = store
        .mark_attendance(payload.date, payload.status)
        .ok_or(StoreError::NoSubjectSelected)?;
    state.save(&store).await?;

    let subject = store
        .selected_subject()
        .ok_or(StoreError::NoSubjectSelected)?;
    let stats = build_stats(subject);
    Ok(Json(MarkResponse {
        subject: subject.name.clone(),
        date: payload.date,
        status,
        present_count: stats.present_count,
        absent_count: stats.absent_count,
        percentage: stats.percentage_label(),
    }))
}

pub async fn get_status(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayStatusResponse>, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be yyyy-MM-dd"))?;
    let store = state.store.lock().await;
    let name = store.selected().ok_or(StoreError::NoSubjectSelected)?;

    Ok(Json(DayStatusResponse {
        subject: name.to_string(),
        date,
        status: store.status_of(name, date),
    }))
}

pub async fn get_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthResponse>, AppError> {
    let today = today();
    let month = match query.month.as_deref() {
        Some(key) => parse_month(key).ok_or_else(|| AppError::bad_request("month must be yyyy-MM"))?,
        None => month_start(today),
    };

    let store = state.store.lock().await;
    Ok(Json(build_month(month, today, store.selected_subject())))
}

fn to_state(store: &AttendanceStore) -> StateResponse {
    let subjects = store
        .subjects()
        .iter()
        .map(|subject| {
            let stats = build_stats(subject);
            SubjectSummary {
                name: subject.name.clone(),
                present_count: stats.present_count,
                absent_count: stats.absent_count,
                percentage: stats.percentage_label(),
            }
        })
        .collect();

    let selected = store.selected_subject().map(|subject| {
        let stats = build_stats(subject);
        let standing = stats.standing();
        SelectedSubject {
            name: subject.name.clone(),
            present_count: stats.present_count,
            absent_count: stats.absent_count,
            percentage: stats.percentage_label(),
            standing: standing.as_str().to_string(),
            message: standing.message().to_string(),
        }
    });

    StateResponse { subjects, selected }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::load_data;
    use std::path::PathBuf;

    fn unique_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("attendance_handlers_{tag}_{nanos}.json"))
    }

    fn tmp_of(path: &std::path::Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    #[tokio::test]
    async fn failed_save_keeps_mutation_in_memory() {
        let path = unique_path("save_fails");
        let state = AppState::new(path.clone(), AttendanceStore::default());
        let blocker = tmp_of(&path);
        std::fs::create_dir(&blocker).unwrap();

        let err = add_subject(
            State(state.clone()),
            Json(AddSubjectRequest {
                name: "Math".to_string(),
            }),
        )
        .await
        .err()
        .expect("save should fail");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.store.lock().await.find("Math").is_some());
        assert!(!path.exists());

        std::fs::remove_dir(&blocker).unwrap();
        let marked = mark_attendance(
            State(state.clone()),
            Json(MarkRequest {
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                status: crate::models::Status::Present,
            }),
        )
        .await
        .err();
        assert!(marked.is_none());

        let reloaded = load_data(&path).await.unwrap();
        let math = reloaded.find("Math").expect("math saved by the next write");
        assert_eq!(math.attendance.len(), 1);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn dot_names_are_selectable_and_deletable() {
        let path = unique_path("dots");
        let state = AppState::new(path.clone(), AttendanceStore::default());
        for name in [".", ".."] {
            let added = add_subject(
                State(state.clone()),
                Json(AddSubjectRequest {
                    name: name.to_string(),
                }),
            )
            .await;
            if let Err(err) = added {
                panic!("add {name:?}: {}", err.message);
            }
        }

        let selected = select_subject(
            State(state.clone()),
            Json(SubjectRef {
                name: ".".to_string(),
            }),
        )
        .await
        .ok()
        .expect("select");
        assert_eq!(selected.0.selected.map(|s| s.name).as_deref(), Some("."));

        for name in [".", ".."] {
            let deleted = delete_subject(
                State(state.clone()),
                Query(SubjectRef {
                    name: name.to_string(),
                }),
            )
            .await
            .ok()
            .expect("delete");
            assert!(deleted.0.removed);
        }
        assert!(state.store.lock().await.subjects().is_empty());
        let _ = std::fs::remove_file(&path);
    }
}
