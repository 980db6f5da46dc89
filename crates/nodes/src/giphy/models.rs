//! Settings, raw API records and the fixed output schema of the Giphy node.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::NodeError;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which output slot an execution fills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One uniformly chosen result, written to `gif`.
    #[default]
    RandomResult,
    /// Every result the API returned, written to `gif_list`.
    AllResults,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::RandomResult, Mode::AllResults];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::RandomResult => "random_result",
            Mode::AllResults => "all_results",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mode::RandomResult => "Single Random Result",
            Mode::AllResults => "All Results",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random_result" => Ok(Mode::RandomResult),
            "all_results" => Ok(Mode::AllResults),
            other => Err(NodeError::InvalidConfig(format!(
                "unknown mode '{other}' (expected random_result or all_results)"
            ))),
        }
    }
}

/// Node settings as stored in the workflow definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiphySettings {
    #[serde(default)]
    pub mode: Mode,
}

impl GiphySettings {
    /// Parse settings from a node's `config` value. `null` yields defaults.
    pub fn from_value(config: &Value) -> Result<Self, NodeError> {
        if config.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(config.clone()).map_err(|e| NodeError::InvalidConfig(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One element of the API's `data` array. Only the fields the node reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

/// A gif in the node's output schema. Absent source fields become `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifRecord {
    pub title: String,
    pub url: String,
    pub img: String,
    pub rating: String,
    pub id: String,
}

impl GifRecord {
    /// Project a raw API result onto the output schema.
    pub fn project(raw: &RawResult) -> Self {
        let id = raw.id.clone().unwrap_or_default();
        let url = media_url(&id);
        let img = format!("<img src=\"{url}\"/>");

        Self {
            title: raw.title.clone().unwrap_or_default(),
            url,
            img,
            rating: raw.rating.clone().unwrap_or_default(),
            id,
        }
    }
}

impl From<&RawResult> for GifRecord {
    fn from(raw: &RawResult) -> Self {
        Self::project(raw)
    }
}

/// Media URL for a gif id; empty when the id is.
pub fn media_url(id: &str) -> String {
    if id.is_empty() {
        String::new()
    } else {
        format!("https://media.giphy.com/media/{id}/giphy.gif")
    }
}

/// Pull the result records out of a search response.
///
/// A missing or `null` `data` field is an empty result set.
pub fn extract_results(body: &Value) -> Result<Vec<RawResult>, NodeError> {
    let obj = body
        .as_object()
        .ok_or_else(|| NodeError::MalformedResponse("response body is not a JSON object".into()))?;

    match obj.get("data") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if !item.is_object() {
                    return Err(NodeError::MalformedResponse(format!(
                        "data[{i}] is not an object"
                    )));
                }
                RawResult::deserialize(item)
                    .map_err(|e| NodeError::MalformedResponse(format!("data[{i}]: {e}")))
            })
            .collect(),
        Some(_) => Err(NodeError::MalformedResponse("`data` is not an array".into())),
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Output slots written by one execution. `None` means the slot was not written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif: Option<GifRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_list: Option<Vec<GifRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_json: Option<Value>,
}

impl ExecutionOutputs {
    pub fn is_empty(&self) -> bool {
        self.gif.is_none() && self.gif_list.is_none() && self.output_json.is_none()
    }
}

/// Which of the two record outputs the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputVisibility {
    pub gif: bool,
    pub gif_list: bool,
}

impl OutputVisibility {
    /// `gif` is shown only for `random_result`; any other value shows `gif_list`.
    pub fn for_mode_value(value: &str) -> Self {
        let single = value == Mode::RandomResult.as_str();
        Self {
            gif: single,
            gif_list: !single,
        }
    }

    pub fn for_mode(mode: Mode) -> Self {
        Self::for_mode_value(mode.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(id: Option<&str>, title: Option<&str>, rating: Option<&str>) -> RawResult {
        RawResult {
            id: id.map(Into::into),
            title: title.map(Into::into),
            rating: rating.map(Into::into),
        }
    }

    #[test]
    fn projection_builds_media_url_and_embed() {
        let gif = GifRecord::project(&raw(Some("abc"), Some("Cat"), Some("g")));
        assert_eq!(
            gif,
            GifRecord {
                title: "Cat".into(),
                url: "https://media.giphy.com/media/abc/giphy.gif".into(),
                img: "<img src=\"https://media.giphy.com/media/abc/giphy.gif\"/>".into(),
                rating: "g".into(),
                id: "abc".into(),
            }
        );
    }

    #[test]
    fn projection_tolerates_missing_fields() {
        let gif = GifRecord::project(&RawResult::default());
        assert_eq!(gif.id, "");
        assert_eq!(gif.url, "");
        assert_eq!(gif.img, "<img src=\"\"/>");
        assert_eq!(gif.title, "");
        assert_eq!(gif.rating, "");
    }

    #[test]
    fn projection_treats_empty_id_as_missing() {
        let gif = GifRecord::project(&raw(Some(""), Some("t"), None));
        assert_eq!(gif.url, "");
        assert_eq!(gif.img, "<img src=\"\"/>");
    }

    #[test]
    fn projection_is_repeatable() {
        let r = raw(Some("xyz"), None, Some("pg-13"));
        assert_eq!(GifRecord::project(&r), GifRecord::project(&r));
    }

    #[test]
    fn extract_tolerates_missing_and_null_data() {
        assert!(extract_results(&json!({ "meta": { "status": 200 } })).unwrap().is_empty());
        assert!(extract_results(&json!({ "data": null })).unwrap().is_empty());
    }

    #[test]
    fn extract_keeps_order_and_ignores_extra_fields() {
        let body = json!({
            "data": [
                { "id": "a", "title": "first", "rating": "g", "type": "gif" },
                { "id": "b", "title": null },
            ]
        });
        let results = extract_results(&body).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id.as_deref(), Some("a"));
        assert_eq!(results[1].id.as_deref(), Some("b"));
        assert_eq!(results[1].title, None);
    }

    #[test]
    fn extract_rejects_malformed_shapes() {
        for body in [
            json!([1, 2, 3]),
            json!({ "data": "nope" }),
            json!({ "data": [1] }),
            json!({ "data": [{ "id": 42 }] }),
        ] {
            assert!(
                matches!(extract_results(&body), Err(NodeError::MalformedResponse(_))),
                "expected malformed for {body}"
            );
        }
    }

    #[test]
    fn mode_round_trips_through_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
        assert!(matches!("top".parse::<Mode>(), Err(NodeError::InvalidConfig(_))));
    }

    #[test]
    fn settings_default_to_random_result() {
        assert_eq!(GiphySettings::from_value(&Value::Null).unwrap().mode, Mode::RandomResult);
        assert_eq!(GiphySettings::from_value(&json!({})).unwrap().mode, Mode::RandomResult);
        assert_eq!(
            GiphySettings::from_value(&json!({ "mode": "all_results" })).unwrap().mode,
            Mode::AllResults
        );
        assert!(GiphySettings::from_value(&json!({ "mode": "bogus" })).is_err());
    }

    #[test]
    fn visibility_follows_mode_value() {
        assert_eq!(
            OutputVisibility::for_mode_value("random_result"),
            OutputVisibility { gif: true, gif_list: false }
        );
        assert_eq!(
            OutputVisibility::for_mode_value("all_results"),
            OutputVisibility { gif: false, gif_list: true }
        );
        assert_eq!(
            OutputVisibility::for_mode_value("anything else"),
            OutputVisibility { gif: false, gif_list: true }
        );
    }

    #[test]
    fn unwritten_slots_are_omitted_when_serialized() {
        let outputs = ExecutionOutputs {
            output_json: Some(json!({ "data": [] })),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&outputs).unwrap(), json!({ "output_json": { "data": [] } }));
        assert!(ExecutionOutputs::default().is_empty());
    }
}
