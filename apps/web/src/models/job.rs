use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Preferences collected by the job form and forwarded verbatim to the
/// recommendation API. Fields are free text; missing fields arrive as "".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct JobPreferences {
    pub personality: String,
    pub work_experience: String,
    pub work_hours: String,
    /// Salary range descriptor such as "50000-90000".
    pub salary: String,
}

/// A single job returned by the recommendation API.
///
/// Only `salary` is interpreted here; every other attribute is carried through
/// untouched so the results page can show whatever the API chose to send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobRecommendation {
    pub salary: Number,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl JobRecommendation {
    /// Salary as a sortable float.
    pub fn salary_value(&self) -> f64 {
        self.salary.as_f64().unwrap_or(f64::NEG_INFINITY)
    }

    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title").and_then(Value::as_str)
    }
}
