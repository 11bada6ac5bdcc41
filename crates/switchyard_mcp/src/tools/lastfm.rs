//! Last.fm methods as tools.

use crate::tools::McpTool;
use crate::{McpError, McpResult};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use switchyard_lastfm::{LastfmClient, METHODS, MethodSpec, ParamType};

/// One Last.fm method exposed as a tool.
///
/// The argument schema is derived from the method's parameter table.
#[derive(Debug, Clone)]
pub struct LastfmMethodTool {
    spec: &'static MethodSpec,
    client: LastfmClient,
}

impl LastfmMethodTool {
    /// Creates the tool for one method.
    pub fn new(spec: &'static MethodSpec, client: LastfmClient) -> Self {
        Self { spec, client }
    }

    /// Creates a tool for every known Last.fm method.
    pub fn all(client: &LastfmClient) -> Vec<Self> {
        METHODS
            .iter()
            .map(|spec| Self::new(spec, client.clone()))
            .collect()
    }

    /// The method behind this tool.
    pub fn spec(&self) -> &'static MethodSpec {
        self.spec
    }
}

fn property(ty: ParamType, wire: &str) -> Value {
    let description = format!("Last.fm parameter '{}'", wire);
    match ty {
        ParamType::Text => json!({ "type": "string", "description": description }),
        ParamType::Integer => json!({ "type": "integer", "description": description }),
        ParamType::Switch => json!({
            "type": ["boolean", "integer"],
            "description": format!("{} (sent as 0/1)", description),
        }),
    }
}

#[async_trait]
impl McpTool for LastfmMethodTool {
    fn name(&self) -> &str {
        self.spec.tool
    }

    fn description(&self) -> &str {
        self.spec.description
    }

    fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .spec
            .params
            .iter()
            .map(|p| (p.arg.to_string(), property(p.ty, p.wire)))
            .collect();
        let required: Vec<&str> = self.spec.required().map(|p| p.arg).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        self.client
            .call_spec(self.spec, &input)
            .await
            .map_err(McpError::from_adapter)
    }
}
