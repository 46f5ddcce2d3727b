//! Server-rendered pages.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use storeit_core::error::{AppError, ErrorKind};
use storeit_entity::file::File;
use storeit_service::FileService;

use crate::dto::request::ListFilesQuery;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// Sort choices offered on the listing page, as `(key, label)`.
const SORT_OPTIONS: &[(&str, &str)] = &[
    ("$createdAt-desc", "Date created (newest)"),
    ("$createdAt-asc", "Date created (oldest)"),
    ("name-asc", "Name (A-Z)"),
    ("name-desc", "Name (Z-A)"),
    ("size-desc", "Size (Highest)"),
    ("size-asc", "Size (Lowest)"),
];

struct SortOption {
    key: &'static str,
    label: &'static str,
    selected: bool,
}

struct FileCard {
    id: String,
    name: String,
    url: String,
    file_type: &'static str,
    size: String,
    created: String,
}

impl From<File> for FileCard {
    fn from(file: File) -> Self {
        Self {
            created: file
                .created_at
                .map(|at| at.format("%-I:%M%P, %d %b").to_string())
                .unwrap_or_default(),
            size: format_size(file.size),
            file_type: file.file_type.as_str(),
            id: file.id,
            name: file.name,
            url: file.url,
        }
    }
}

#[derive(Template)]
#[template(path = "files.html")]
struct FilesPage<'a> {
    heading: &'a str,
    sort_options: Vec<SortOption>,
    total: u64,
    files: Vec<FileCard>,
}

#[derive(Template)]
#[template(path = "auth.html")]
struct AuthPage<'a> {
    title: &'a str,
    sign_up: bool,
}

/// GET /
pub async fn home(
    state: State<AppState>,
    session: Option<SessionUser>,
    query: Query<ListFilesQuery>,
) -> Response {
    render_files(state, session, String::new(), query).await
}

/// GET /{type}
pub async fn files_by_type(
    state: State<AppState>,
    session: Option<SessionUser>,
    Path(file_type): Path<String>,
    query: Query<ListFilesQuery>,
) -> Response {
    render_files(state, session, file_type, query).await
}

/// GET /sign-in
pub async fn sign_in_page() -> Response {
    render(AuthPage {
        title: "Sign In",
        sign_up: false,
    })
}

/// GET /sign-up
pub async fn sign_up_page() -> Response {
    render(AuthPage {
        title: "Sign Up",
        sign_up: true,
    })
}

async fn render_files(
    State(state): State<AppState>,
    session: Option<SessionUser>,
    heading: String,
    Query(query): Query<ListFilesQuery>,
) -> Response {
    let sign_in = Redirect::to(&state.config.session.sign_in_path);
    let Some(session) = session else {
        return sign_in.into_response();
    };

    let list = match state
        .file_service
        .list_files(session.context(), query.sort.as_deref())
        .await
    {
        Ok(list) => list,
        Err(e) if e.is(ErrorKind::Authentication) => return sign_in.into_response(),
        Err(e) => return ApiError(e).into_response(),
    };

    let selected = FileService::resolve_sort(query.sort.as_deref()).key();
    let page = FilesPage {
        heading: &heading,
        sort_options: SORT_OPTIONS
            .iter()
            .map(|&(key, label)| SortOption {
                key,
                label,
                selected: key == selected,
            })
            .collect(),
        total: list.total,
        files: list.documents.into_iter().map(FileCard::from).collect(),
    };
    render(page)
}

fn render<T: Template>(page: T) -> Response {
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => ApiError(AppError::internal(format!("Template error: {e}"))).into_response(),
    }
}

/// Human-readable size, e.g. `1.5 MB`.
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} Bytes");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
