//! Typed access to the `/service/*` entity endpoints

use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::shared::crud::{BatchIds, BatchUpdate, CrudEntity, ImportRow, ListQuery, ListResponse, Payload};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::export::{filename_from_disposition, DownloadFile};

/// One entity's service. `Upload` is the browser file handle on wasm and a
/// plain value in tests.
#[async_trait(?Send)]
pub trait CrudService<E: CrudEntity> {
    type Upload: Clone + 'static;

    async fn list(&self, query: &ListQuery) -> Result<ListResponse<E>, ApiError>;
    async fn get(&self, id: &str) -> Result<E, ApiError>;
    async fn create(&self, payload: &Payload) -> Result<(), ApiError>;
    async fn update(&self, id: &str, payload: &Payload) -> Result<(), ApiError>;
    async fn batch_update(&self, body: &BatchUpdate) -> Result<(), ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
    async fn batch_delete(&self, body: &BatchIds) -> Result<(), ApiError>;
    /// Parse uploaded sheets into candidate rows (nothing is stored yet)
    async fn import(&self, files: Vec<Self::Upload>) -> Result<Vec<ImportRow>, ApiError>;
    async fn batch_create(&self, payloads: &[Payload]) -> Result<(), ApiError>;
    async fn export_template(&self) -> Result<DownloadFile, ApiError>;
    async fn export(&self, body: &BatchIds) -> Result<DownloadFile, ApiError>;
}

/// gloo-net implementation rooted at `{api_base}{service_path}`
pub struct HttpCrudService<E> {
    base: String,
    list_name: &'static str,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for HttpCrudService<E> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            list_name: self.list_name,
            _entity: PhantomData,
        }
    }
}

impl<E: CrudEntity> HttpCrudService<E> {
    pub fn new() -> Self {
        let descriptor = E::descriptor();
        Self::with_base(api_url(descriptor.service_path), descriptor.list_name)
    }

    fn with_base(base: String, list_name: &'static str) -> Self {
        Self {
            base,
            list_name,
            _entity: PhantomData,
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.base, suffix)
    }

    fn default_filename(&self) -> String {
        format!("{}.xlsx", self.list_name)
    }
}

impl<E: CrudEntity> Default for HttpCrudService<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
}

/// Maps a non-2xx response to `ApiError::Status` with the backend message
pub(crate) async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
        .and_then(|body| body.message.or(body.msg));
    Err(ApiError::status(status, message))
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn read_file(response: Response, fallback: String) -> Result<DownloadFile, ApiError> {
    let response = ensure_ok(response).await?;
    let filename = response
        .headers()
        .get("content-disposition")
        .and_then(|value| filename_from_disposition(&value))
        .unwrap_or(fallback);
    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(DownloadFile { bytes, filename })
}

/// GET returning JSON, for endpoints outside the CRUD set
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    log::debug!("PUT {}", url);
    let response = Request::put(url)
        .json(body)
        .map_err(request)?
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response).await.map(|_| ())
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn request(e: gloo_net::Error) -> ApiError {
    ApiError::Request(e.to_string())
}

#[async_trait(?Send)]
impl<E: CrudEntity> CrudService<E> for HttpCrudService<E> {
    type Upload = web_sys::File;

    async fn list(&self, query: &ListQuery) -> Result<ListResponse<E>, ApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Request(e.to_string()))?;
        fetch_json(&self.url(&format!("/list?{}", qs))).await
    }

    async fn get(&self, id: &str) -> Result<E, ApiError> {
        fetch_json(&self.url(&format!("/{}", urlencoding::encode(id)))).await
    }

    async fn create(&self, payload: &Payload) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/"))
            .json(payload)
            .map_err(request)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn update(&self, id: &str, payload: &Payload) -> Result<(), ApiError> {
        let url = self.url(&format!("/{}", urlencoding::encode(id)));
        let response = Request::put(&url)
            .json(payload)
            .map_err(request)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn batch_update(&self, body: &BatchUpdate) -> Result<(), ApiError> {
        let response = Request::put(&self.url("/batch"))
            .json(body)
            .map_err(request)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/{}", urlencoding::encode(id)));
        let response = Request::delete(&url).send().await.map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn batch_delete(&self, body: &BatchIds) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/batch-delete"))
            .json(body)
            .map_err(request)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn import(&self, files: Vec<web_sys::File>) -> Result<Vec<ImportRow>, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        for file in &files {
            form.append_with_blob_and_filename("file", file, &file.name())
                .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        }
        let response = Request::post(&self.url("/import"))
            .body(form)
            .map_err(request)?
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn batch_create(&self, payloads: &[Payload]) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/batch-create"))
            .json(&payloads)
            .map_err(request)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn export_template(&self) -> Result<DownloadFile, ApiError> {
        let response = Request::get(&self.url("/export-template"))
            .send()
            .await
            .map_err(network)?;
        read_file(response, format!("{}模板.xlsx", self.list_name)).await
    }

    async fn export(&self, body: &BatchIds) -> Result<DownloadFile, ApiError> {
        let response = Request::post(&self.url("/export"))
            .json(body)
            .map_err(request)?
            .send()
            .await
            .map_err(network)?;
        read_file(response, self.default_filename()).await
    }
}
