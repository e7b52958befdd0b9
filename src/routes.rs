use std::sync::Arc;

use axum::{
    Router,
    extract::{
        Form, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::{Html, Redirect},
    routing::get,
};

use crate::{
    AppState,
    error::AppResult,
    models::{EditForm, IdQuery, SearchForm, TitleQuery, parse_id, parse_title},
    ranking, templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/add", get(add_form).post(add_submit))
        .route("/select", get(select))
        .route("/find", get(find))
        .route("/edit", get(edit_form).post(edit_submit))
        .route("/delete", get(delete))
        .with_state(state)
}

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let mut movies = ranking::rank(state.store.list_all().await?);
    state.store.save_rankings(&movies).await?;

    movies.sort_by_key(|m| m.ranking);
    Ok(Html(templates::home_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page())
}

pub async fn add_submit(form: Result<Form<SearchForm>, FormRejection>) -> AppResult<Redirect> {
    let Form(form) = form?;
    let title = parse_title(Some(&form.title))?;
    Ok(Redirect::to(&format!("/select?title={}", urlencoding::encode(&title))))
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    q: Result<Query<TitleQuery>, QueryRejection>,
) -> AppResult<Html<String>> {
    let Query(q) = q?;
    let title = parse_title(q.title.as_deref())?;
    let candidates = state.tmdb.search_by_title(&title).await?;
    Ok(Html(templates::select_page(&title, &candidates)))
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    q: Result<Query<IdQuery>, QueryRejection>,
) -> AppResult<Redirect> {
    let Query(q) = q?;
    let tmdb_id: i64 = parse_id(q.id.as_deref())?;
    let details = state.tmdb.fetch_details(tmdb_id).await?;
    let movie = state.store.add(details).await?;
    Ok(Redirect::to(&format!("/edit?id={}", movie.id)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    q: Result<Query<IdQuery>, QueryRejection>,
) -> AppResult<Html<String>> {
    let Query(q) = q?;
    let id = parse_id(q.id.as_deref())?;
    let movie = state.store.get_by_id(id).await?;
    Ok(Html(templates::edit_page(&movie)))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    q: Result<Query<IdQuery>, QueryRejection>,
    form: Result<Form<EditForm>, FormRejection>,
) -> AppResult<Redirect> {
    let (Query(q), Form(form)) = (q?, form?);
    let id = parse_id(q.id.as_deref())?;
    state.store.update_rating_review(id, form.parse()?).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    q: Result<Query<IdQuery>, QueryRejection>,
) -> AppResult<Redirect> {
    let Query(q) = q?;
    let id = parse_id(q.id.as_deref())?;
    state.store.delete(id).await?;
    Ok(Redirect::to("/"))
}
