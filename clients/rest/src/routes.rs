use actix_web::{
    error::JsonPayloadError,
    http::header,
    middleware::{DefaultHeaders, NormalizePath},
    web::{self, Data, Json},
    HttpRequest, HttpResponse,
};
use database::{
    consts::consts::EntityId, database::request_manager::RequestManager,
    model::person::PersonInput,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Largest json body accepted, anything bigger is an internal error
const JSON_BODY_LIMIT: usize = 100 * 1024;

// Resource names match regardless of case, e.g. /Person/1
const PEOPLE_PATH: &str = "/{resource:(?i)person}";
const PERSON_PATH: &str = "/{resource:(?i)person}/{id}";

#[derive(Deserialize)]
struct PersonPath {
    id: String,
}

/// Registers the /person routes, anything else (path or method) is answered with "Endpoint not found"
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource(PEOPLE_PATH)
                .route(web::get().to(list_people))
                .route(web::head().to(list_people))
                .route(web::post().to(create_person))
                .default_service(web::to(endpoint_not_found)),
        )
        .service(
            web::resource(PERSON_PATH)
                .route(web::get().to(get_person))
                .route(web::head().to(get_person))
                .route(web::put().to(update_person))
                .route(web::delete().to(delete_person))
                .default_service(web::to(endpoint_not_found)),
        )
        .default_service(web::to(endpoint_not_found));
}

/// Cross-origin headers, sent on every response
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// Trailing (and repeated) slashes are ignored, /person/ lists everyone
pub fn normalize_path() -> NormalizePath {
    NormalizePath::trim()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, req| json_error(err, req).into())
}

/// A body that is not json, or no body at all, is read as `{}` and fails validation.
/// A json body that cannot be read (malformed, too large) is an internal error.
fn json_error(err: JsonPayloadError, req: &HttpRequest) -> ApiError {
    match err {
        JsonPayloadError::ContentType => ApiError::InvalidInput,
        JsonPayloadError::Deserialize(err) if err.is_eof() && !has_body(req) => {
            ApiError::InvalidInput
        }
        other => ApiError::Internal(format!("Failed to read json body: {}", other)),
    }
}

fn has_body(req: &HttpRequest) -> bool {
    let headers = req.headers();

    headers.contains_key(header::TRANSFER_ENCODING)
        || headers
            .get(header::CONTENT_LENGTH)
            .map_or(false, |length| length != "0")
}

/// Only objects and arrays are accepted as a top level body
fn person_input(body: Json<Value>) -> Result<PersonInput, ApiError> {
    match body.into_inner() {
        body @ (Value::Object(_) | Value::Array(_)) => Ok(PersonInput::from_json(body)),
        other => Err(ApiError::Internal(format!(
            "Json body must be an object or array, received: {}",
            other
        ))),
    }
}

// The request manager blocks until the database replies, so every call runs on the blocking pool

async fn list_people(request_manager: Data<RequestManager>) -> Result<HttpResponse, ApiError> {
    let rm = request_manager.get_ref().clone();

    let people = web::block(move || rm.send_list()).await??;

    Ok(HttpResponse::Ok().json(people))
}

async fn get_person(
    request_manager: Data<RequestManager>,
    path: web::Path<PersonPath>,
) -> Result<HttpResponse, ApiError> {
    let rm = request_manager.get_ref().clone();
    let id = EntityId(path.into_inner().id);

    match web::block(move || rm.send_get(id)).await?? {
        Some(person) => Ok(HttpResponse::Ok().json(person)),
        None => Err(ApiError::NotFound),
    }
}

async fn create_person(
    request_manager: Data<RequestManager>,
    body: Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let rm = request_manager.get_ref().clone();
    let input = person_input(body)?;

    let person = web::block(move || rm.send_add(input)).await??;

    Ok(HttpResponse::Ok().json(person))
}

async fn update_person(
    request_manager: Data<RequestManager>,
    path: web::Path<PersonPath>,
    body: Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let rm = request_manager.get_ref().clone();
    let id = EntityId(path.into_inner().id);
    let input = person_input(body)?;

    let person = web::block(move || rm.send_update(id, input)).await??;

    Ok(HttpResponse::Ok().json(person))
}

async fn delete_person(
    request_manager: Data<RequestManager>,
    path: web::Path<PersonPath>,
) -> Result<HttpResponse, ApiError> {
    let rm = request_manager.get_ref().clone();
    let id = EntityId(path.into_inner().id);

    web::block(move || rm.send_remove(id)).await??;

    Ok(HttpResponse::NoContent().finish())
}

async fn endpoint_not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound)
}
