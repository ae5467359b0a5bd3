use crate::api_key::XApiKey;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use axum_extra::TypedHeader;
use pdf_chat::prompts::ROOT_MESSAGE;
use pdf_chat::{ChatRequest, ChatResponse, ServiceError, StatusResponse, UploadResponse};

const FILE_FIELD: &str = "file";

pub async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

async fn read_file_field(mut multipart: Multipart) -> Result<UploadedFile, ServiceError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::InvalidRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ServiceError::InvalidRequest("dosya adı eksik".to_string()))?;
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServiceError::InvalidRequest(e.body_text()))?;

        return Ok(UploadedFile {
            filename,
            content_type,
            bytes: Vec::from(bytes),
        });
    }

    Err(ServiceError::InvalidRequest(format!(
        "'{}' alanı bulunamadı",
        FILE_FIELD
    )))
}

pub async fn upload_pdf_handler(
    State(state): State<AppState>,
    api_key: Option<TypedHeader<XApiKey>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let multipart = multipart.map_err(|e| ServiceError::InvalidRequest(e.body_text()))?;
    let file = read_file_field(multipart).await?;

    let api_key = api_key.as_ref().map(|TypedHeader(key)| key.as_str());
    let response = state
        .analysis_service
        .upload(&file.filename, file.content_type, file.bytes, api_key)
        .await?;

    Ok(Json(response))
}

pub async fn chat_handler(
    State(state): State<AppState>,
    api_key: Option<TypedHeader<XApiKey>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ServiceError::InvalidRequest(e.body_text()))?;
    let TypedHeader(api_key) = api_key
        .ok_or_else(|| ServiceError::InvalidRequest("x-api-key başlığı eksik".to_string()))?;

    let response = state.chat_service.chat(&request, api_key.as_str()).await?;
    Ok(Json(response))
}
