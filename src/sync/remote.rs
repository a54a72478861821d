//! リモートエンドポイント
//!
//! 1つの URL に対して一覧取得（GET）と1件作成（POST）を行う。
//! 応答・要求の本文は `{ "text", "category" }` 形式の JSON。

use crate::config::HttpConfig;
use crate::error::Result;
use crate::http;
use crate::quote::Quote;
use reqwest::{Client, Url};
use std::future::Future;
use std::pin::Pin;

/// リモート操作の戻り値
pub type RemoteFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// リモート名言一覧の trait
pub trait RemoteQuotes: Send + Sync {
    /// 一覧を取得
    fn list(&self) -> RemoteFuture<'_, Vec<Quote>>;

    /// 1件作成
    fn create<'a>(&'a self, quote: &'a Quote) -> RemoteFuture<'a, ()>;
}

/// HTTP 実装
pub struct HttpRemote {
    http: Client,
    endpoint: Url,
}

impl HttpRemote {
    pub fn new(config: &HttpConfig, endpoint: Url) -> Self {
        Self {
            http: config.build_client(),
            endpoint,
        }
    }
}

impl RemoteQuotes for HttpRemote {
    fn list(&self) -> RemoteFuture<'_, Vec<Quote>> {
        Box::pin(async move {
            tracing::debug!(endpoint = %self.endpoint, "GET remote quotes");
            http::get_json(&self.http, &self.endpoint).await
        })
    }

    fn create<'a>(&'a self, quote: &'a Quote) -> RemoteFuture<'a, ()> {
        Box::pin(async move {
            tracing::debug!(endpoint = %self.endpoint, "POST quote");
            http::post_json(&self.http, &self.endpoint, quote).await
        })
    }
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
