/// One normalized job listing. Text fields are empty when the service omitted
/// them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub job_description: String,
    pub location: String,
    pub package_per_annum: String,
    pub rating: Option<f64>,
}
