use jobs_core::JobRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("response body is not a jobs payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct JobsPayload {
    jobs: Vec<Value>,
}

/// One listing as the service sends it. Every field may be missing or carry
/// an unexpected JSON type.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiJob {
    #[serde(deserialize_with = "lenient_text")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    company_logo_url: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    employment_type: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    job_description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    location: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    package_per_annum: Option<String>,
    #[serde(deserialize_with = "lenient_rating")]
    rating: Option<f64>,
}

/// Strings pass through, numbers and booleans are stringified, anything else
/// is treated as missing.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Only JSON numbers count as a rating.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        _ => None,
    })
}

impl From<ApiJob> for JobRecord {
    fn from(job: ApiJob) -> Self {
        JobRecord {
            id: job.id.unwrap_or_default(),
            title: job.title.unwrap_or_default(),
            company_logo_url: job.company_logo_url.unwrap_or_default(),
            employment_type: job.employment_type.unwrap_or_default(),
            job_description: job.job_description.unwrap_or_default(),
            location: job.location.unwrap_or_default(),
            package_per_annum: job.package_per_annum.unwrap_or_default(),
            rating: job.rating,
        }
    }
}

/// Maps a `{ "jobs": [...] }` body into job records, preserving order.
///
/// Missing or oddly typed per-job fields become empty values, and entries
/// that are not objects are skipped. A body that is not JSON, or has no
/// `jobs` array, is an error.
pub fn normalize_jobs(body: &[u8]) -> Result<Vec<JobRecord>, NormalizeError> {
    let payload: JobsPayload = serde_json::from_slice(body)?;
    Ok(payload
        .jobs
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| ApiJob::deserialize(entry).ok())
        .map(JobRecord::from)
        .collect())
}
