use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use zidian_types::Entry;

use crate::api::LookupApi;
use crate::error::LookupError;


/// Records every query and answers with a canned result
pub(crate) struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub entries: Option<Vec<Entry>>,
}

impl FakeApi {
    pub fn answering(entries: Vec<Entry>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            entries: Some(entries),
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            entries: None,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LookupApi for FakeApi {
    async fn lookup(&self, query: &str) -> Result<Vec<Entry>, LookupError> {
        self.calls.lock().unwrap().push(query.to_string());
        self.entries
            .clone()
            .ok_or(LookupError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
    }
}

pub(crate) fn record(simplified: &str, images: serde_json::Value) -> serde_json::Value {
    json!({
        "simplified": simplified,
        "traditional": simplified,
        "pinyin": "nǐ",
        "definitions": "you (informal)",
        "explanation": "person radical with 尔",
        "images": images,
        "examples": ["你好", "你们"],
    })
}

pub(crate) fn entry(simplified: &str, images: serde_json::Value) -> Entry {
    serde_json::from_value(record(simplified, images)).unwrap()
}
