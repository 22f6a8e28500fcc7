use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured intent returned to the directory frontend, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    ShowAll,
    Filter {
        field: FilterField,
        value: FilterValue,
    },
    ShowCompany {
        company_name: String,
    },
    DownloadReport {
        company_name: String,
    },
    /// The model could not map the prompt, or its output was unusable.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    /// Minimum staff count, inclusive.
    StaffGte,
    Tag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(serde_json::Number),
    Text(String),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ShowAll => "show_all",
            Action::Filter { .. } => "filter",
            Action::ShowCompany { .. } => "show_company",
            Action::DownloadReport { .. } => "download_report",
            Action::Unknown => "unknown",
        }
    }

    /// Typed view of a parsed result, if it matches one of the known shapes.
    pub fn recognize(value: &Value) -> Option<Action> {
        Action::deserialize(value).ok()
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self)
            .unwrap_or_else(|_| serde_json::json!({ "action": self.name() }))
    }
}

/// `{"action":"unknown"}`
pub fn unknown_action() -> Value {
    Action::Unknown.to_value()
}

/// Parse model output as JSON. Anything that is not valid JSON becomes
/// the unknown action; the parse error itself is dropped.
///
/// Valid JSON is passed through as-is, even when it is not one of the
/// known action shapes.
pub fn parse_action_or_unknown(text: &str) -> Value {
    serde_json::from_str::<Value>(text).unwrap_or_else(|_| unknown_action())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_valid_action() {
        assert_eq!(
            parse_action_or_unknown(r#"{"action":"show_all"}"#),
            json!({"action": "show_all"})
        );
    }

    #[test]
    fn invalid_json_falls_back_to_unknown() {
        assert_eq!(parse_action_or_unknown("not json"), json!({"action": "unknown"}));
        assert_eq!(
            parse_action_or_unknown("```json\n{\"action\":\"show_all\"}\n```"),
            json!({"action": "unknown"})
        );
        assert_eq!(parse_action_or_unknown(""), json!({"action": "unknown"}));
    }

    #[test]
    fn empty_object_is_not_unknown() {
        assert_eq!(parse_action_or_unknown("{}"), json!({}));
    }

    #[test]
    fn unrecognized_shapes_pass_through() {
        let value = parse_action_or_unknown(r#"{"action":"teleport","where":"mars"}"#);
        assert_eq!(value, json!({"action": "teleport", "where": "mars"}));
        assert_eq!(Action::recognize(&value), None);
    }

    #[test]
    fn recognizes_filter_variants() {
        let by_staff = Action::recognize(&json!({
            "action": "filter", "field": "staff_gte", "value": 1000
        }));
        assert_eq!(
            by_staff,
            Some(Action::Filter {
                field: FilterField::StaffGte,
                value: FilterValue::Number(serde_json::Number::from(1000u64)),
            })
        );

        let by_tag = Action::recognize(&json!({
            "action": "filter", "field": "tag", "value": "新能源"
        }));
        assert_eq!(
            by_tag,
            Some(Action::Filter {
                field: FilterField::Tag,
                value: FilterValue::Text("新能源".to_string()),
            })
        );
    }

    #[test]
    fn recognizes_company_actions() {
        let show = Action::recognize(&json!({"action": "show_company", "company_name": "星辰科技"}));
        assert_eq!(show.map(|a| a.name()), Some("show_company"));

        let report =
            Action::recognize(&json!({"action": "download_report", "company_name": "宏达制造"}));
        assert_eq!(
            report,
            Some(Action::DownloadReport {
                company_name: "宏达制造".to_string()
            })
        );
    }

    #[test]
    fn unknown_serializes_to_fallback_object() {
        assert_eq!(unknown_action(), json!({"action": "unknown"}));
        assert_eq!(Action::ShowAll.to_value(), json!({"action": "show_all"}));
    }
}
