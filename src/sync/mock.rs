//! テスト用リモート

use super::remote::{RemoteFuture, RemoteQuotes};
use crate::error::QmError;
use crate::quote::Quote;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// メモリ上のリモート
#[derive(Default)]
pub struct FakeRemote {
    quotes: Mutex<Vec<Quote>>,
    created: Mutex<Vec<Quote>>,
    fail: AtomicBool,
    list_calls: AtomicUsize,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: Mutex::new(quotes),
            ..Self::default()
        }
    }

    /// 以降の呼び出しを失敗させる
    pub fn fail_requests(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// create で受け取った名言
    pub fn created(&self) -> Vec<Quote> {
        self.created.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn failure() -> QmError {
        QmError::RemoteApi {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }
}

impl RemoteQuotes for FakeRemote {
    fn list(&self) -> RemoteFuture<'_, Vec<Quote>> {
        Box::pin(async move {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(Self::failure());
            }
            Ok(self.quotes.lock().unwrap().clone())
        })
    }

    fn create<'a>(&'a self, quote: &'a Quote) -> RemoteFuture<'a, ()> {
        Box::pin(async move {
            if self.fail.load(Ordering::SeqCst) {
                return Err(Self::failure());
            }
            self.created.lock().unwrap().push(quote.clone());
            self.quotes.lock().unwrap().push(quote.clone());
            Ok(())
        })
    }
}
