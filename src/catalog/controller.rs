use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use crate::books::dto::BookView;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::ListBooksCommand;
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookParams {
    #[serde(default, rename = "numCopies")]
    num_copies: i64,
}

// Routes are typed over the Lambda body so the router can be handed to lambda_http directly.
pub fn build_router(state: AppState) -> Router<(), lambda_http::Body> {
    Router::new()
        .route("/library/books", get(list_books))
        .route("/library/books/:author/:title",
               get(find_book).post(add_book).delete(remove_book))
        .route("/library/books/:author/:title/:num_copies", put(update_book))
        .with_state(state)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookView>>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service).execute(()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book(
    State(state): State<AppState>,
    Path((author, title)): Path<(String, String)>) -> Result<Json<BookView>, ServerError> {
    let req = GetBookCommandRequest::new(&author, &title);
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    Path((author, title)): Path<(String, String)>,
    Query(params): Query<AddBookParams>) -> Result<StatusCode, ServerError> {
    let req = AddBookCommandRequest::new(&author, &title, params.num_copies);
    AddBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(StatusCode::OK)
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path((author, title, num_copies)): Path<(String, String, i64)>) -> Result<StatusCode, ServerError> {
    let req = UpdateBookCommandRequest::new(&author, &title, num_copies);
    UpdateBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(StatusCode::OK)
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path((author, title)): Path<(String, String)>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest::new(&author, &title);
    RemoveBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(StatusCode::OK)
}
