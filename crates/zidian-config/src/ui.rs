use serde::{Deserialize, Serialize};

fn default_max_examples() -> usize {
    5
}

fn default_show_explanation() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_max_examples")]
    pub max_examples: usize,
    #[serde(default = "default_show_explanation")]
    pub show_explanation: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_examples: default_max_examples(),
            show_explanation: default_show_explanation(),
        }
    }
}
