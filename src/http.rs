//! 共通HTTPヘルパー

use crate::error::{QmError, Result};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// GET して JSON としてデコード
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &Url) -> Result<T> {
    let response = client.get(url.clone()).send().await?;
    let response = ensure_success(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// JSON を POST（応答本文は読まない）
pub async fn post_json<B: Serialize + ?Sized>(client: &Client, url: &Url, body: &B) -> Result<()> {
    let response = client.post(url.clone()).json(body).send().await?;
    ensure_success(response).await?;
    Ok(())
}

/// 2xx 以外を `QmError::RemoteApi` に変換
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(QmError::RemoteApi {
        status: status.as_u16(),
        message,
    })
}
