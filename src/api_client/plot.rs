use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api_client;

/// Chart series and layout as the charting library expects them.
///
/// Both fields are opaque here: the backend assembles them and Plotly
/// consumes them, so they pass through untouched as JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub data: Value,
    pub layout: Value,
}

/// Wire shape of the plot endpoint response.
///
/// The `status` field tags the payload: `success` carries the chart data,
/// `error` carries a human-readable message. Anything else fails to
/// deserialize, which is the validation the network boundary needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlotPayload {
    Success { data: PlotData },
    Error { message: String },
}

impl PlotPayload {
    /// Fold the payload into the result the fetch path works with.
    pub fn into_result(self) -> Result<PlotData, String> {
        match self {
            PlotPayload::Success { data } => Ok(data),
            PlotPayload::Error { message } => Err(message),
        }
    }
}

/// Fetch the plot payload from `url`.
///
/// Payload-level errors (`status: "error"`) and transport-level errors
/// share the `Err(String)` channel; the component reports both the same
/// way.
pub async fn fetch_plot(url: &str) -> Result<PlotData, String> {
    log::trace!("Fetching plot payload from {}", url);

    let result = api_client::get_json::<PlotPayload>(url)
        .await
        .and_then(PlotPayload::into_result);

    if let Err(ref e) = result {
        log::error!("Failed to fetch plot payload: {}", e);
    } else {
        log::info!("Successfully fetched plot payload from {}", url);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_payload_decodes() {
        let raw = json!({
            "status": "success",
            "data": {
                "data": [{"x": [1, 2, 3], "y": [4, 5, 6], "type": "scatter"}],
                "layout": {"title": "Feature scatterplot"}
            }
        });

        let payload: PlotPayload = serde_json::from_value(raw).unwrap();
        let data = payload.into_result().unwrap();
        assert_eq!(data.data[0]["type"], "scatter");
        assert_eq!(data.layout["title"], "Feature scatterplot");
    }

    #[test]
    fn error_payload_carries_message() {
        let raw = json!({"status": "error", "message": "boom"});

        let payload: PlotPayload = serde_json::from_value(raw).unwrap();
        assert_eq!(payload.into_result(), Err("boom".to_string()));
    }

    #[test]
    fn success_without_data_is_rejected() {
        let raw = json!({"status": "success"});
        assert!(serde_json::from_value::<PlotPayload>(raw).is_err());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let raw = json!({"status": "pending", "data": {"data": [], "layout": {}}});
        assert!(serde_json::from_value::<PlotPayload>(raw).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let raw = json!({
            "status": "error",
            "message": "no such feature set",
            "version": 2
        });

        let payload: PlotPayload = serde_json::from_value(raw).unwrap();
        assert_eq!(
            payload.into_result(),
            Err("no such feature set".to_string())
        );
    }
}
