use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Request to start a business process in a target registry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBpRequest {
    /// Key of the business process definition to start
    pub business_process_definition_key: String,
    /// Variables handed to the started process
    pub start_variables: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let request = StartBpRequest {
            business_process_definition_key: "processDefinition".to_owned(),
            start_variables: HashMap::from([(
                "startVar".to_owned(),
                Value::String("startValue".to_owned()),
            )]),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "businessProcessDefinitionKey": "processDefinition",
                "startVariables": {"startVar": "startValue"}
            })
        );
    }
}
