use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::json;

mod render_tests;

pub(crate) fn record(simplified: &str, traditional: &str, images: serde_json::Value) -> serde_json::Value {
    json!({
        "simplified": simplified,
        "traditional": traditional,
        "pinyin": "xué",
        "definitions": "to learn; to study",
        "explanation": "child under a roof",
        "images": images,
        "examples": ["学生", "学习", "大学", "学校"],
    })
}

/// Cloneable in-memory writer for capturing renderer output
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
