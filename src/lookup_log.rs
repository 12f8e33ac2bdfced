//! Lookup Lead Capture
//!
//! Records each successful lookup (address, coordinates, resolved EVC) to
//! an external form-logging service. Fire-and-forget: failures are logged
//! and never surfaced to the user.

use crate::features::QueryPoint;

pub const DEFAULT_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLScmuvklj5OJq7tJLLS2TCR8fRYoOh96WA_63a9YsGOsznLgdQ/formResponse";

// Pre-registered form field ids
const ENTRY_ADDRESS: &str = "entry.124085928";
const ENTRY_LATITUDE: &str = "entry.537784608";
const ENTRY_LONGITUDE: &str = "entry.683705898";
const ENTRY_EVC_CODE: &str = "entry.1602420653";
const ENTRY_EVC_NAME: &str = "entry.615207214";

pub struct LookupLog {
    http: reqwest::Client,
    form_url: String,
}

impl LookupLog {
    pub fn new(form_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            form_url: form_url.into(),
        }
    }

    pub async fn record(&self, address: &str, point: &QueryPoint, evc_code: &str, evc_name: &str) {
        let fields = [
            (ENTRY_ADDRESS, address.to_string()),
            (ENTRY_LATITUDE, format!("{:.6}", point.lat)),
            (ENTRY_LONGITUDE, format!("{:.6}", point.lon)),
            (ENTRY_EVC_CODE, evc_code.to_string()),
            (ENTRY_EVC_NAME, evc_name.to_string()),
        ];

        match self.http.post(&self.form_url).form(&fields).send().await {
            Ok(_) => tracing::debug!(evc_code, evc_name, "lookup recorded"),
            Err(e) => tracing::warn!("failed to record lookup: {}", e),
        }
    }
}
