//! Typed CloudFormation parameter declarations

use serde_json::{Map, Value};

use crate::Token;

/// Declared type of a template parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    String,
    Number,
    CommaDelimitedList,
    /// `AWS::EC2::VPC::Id`
    VpcId,
    /// `List<AWS::EC2::Subnet::Id>`
    SubnetIdList,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::CommaDelimitedList => "CommaDelimitedList",
            Self::VpcId => "AWS::EC2::VPC::Id",
            Self::SubnetIdList => "List<AWS::EC2::Subnet::Id>",
        }
    }
}

/// A single template parameter, immutable once declared
///
/// Constraints (minimum length, minimum value, allowed values) are carried
/// declaratively; CloudFormation enforces them when the stack is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    logical_id: String,
    parameter_type: ParameterType,
    default: Option<Value>,
    description: Option<String>,
    allowed_values: Option<Vec<String>>,
    min_length: Option<u32>,
    min_value: Option<i64>,
}

impl Parameter {
    pub fn new(logical_id: impl Into<String>, parameter_type: ParameterType) -> Self {
        Self {
            logical_id: logical_id.into(),
            parameter_type,
            default: None,
            description: None,
            allowed_values: None,
            min_length: None,
            min_value: None,
        }
    }

    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn min_length(mut self, min_length: u32) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn min_value(mut self, min_value: i64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn parameter_type(&self) -> ParameterType {
        self.parameter_type
    }

    /// Deferred reference to this parameter's runtime value
    pub fn reference(&self) -> Token {
        Token::reference(&self.logical_id)
    }

    /// Render the entry for the template's `Parameters` block
    pub fn to_value(&self) -> Value {
        let mut entry = Map::new();
        entry.insert("Type".into(), self.parameter_type.as_str().into());
        if let Some(default) = &self.default {
            entry.insert("Default".into(), default.clone());
        }
        if let Some(description) = &self.description {
            entry.insert("Description".into(), description.as_str().into());
        }
        if let Some(allowed) = &self.allowed_values {
            entry.insert(
                "AllowedValues".into(),
                Value::Array(allowed.iter().map(|v| v.as_str().into()).collect()),
            );
        }
        if let Some(min_length) = self.min_length {
            entry.insert("MinLength".into(), min_length.into());
        }
        if let Some(min_value) = self.min_value {
            entry.insert("MinValue".into(), min_value.into());
        }
        Value::Object(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_parameter_renders_type_only() {
        let param = Parameter::new("JavaOpts", ParameterType::String);
        assert_eq!(param.to_value(), json!({"Type": "String"}));
    }

    #[test]
    fn test_constrained_parameter_rendering() {
        let param = Parameter::new("MinContainers", ParameterType::Number)
            .min_value(2)
            .default_value(2)
            .description("Minimum number of containers");
        assert_eq!(
            param.to_value(),
            json!({
                "Type": "Number",
                "Default": 2,
                "Description": "Minimum number of containers",
                "MinValue": 2,
            })
        );
    }

    #[test]
    fn test_allowed_values_rendering() {
        let param = Parameter::new("DatabaseInstanceType", ParameterType::String)
            .allowed_values(["r5.large", "r5.xlarge"])
            .default_value("r5.large");
        let value = param.to_value();
        assert_eq!(value["AllowedValues"], json!(["r5.large", "r5.xlarge"]));
        assert_eq!(value["Default"], json!("r5.large"));
    }

    #[test]
    fn test_aws_specific_type_names() {
        assert_eq!(ParameterType::VpcId.as_str(), "AWS::EC2::VPC::Id");
        assert_eq!(
            ParameterType::SubnetIdList.as_str(),
            "List<AWS::EC2::Subnet::Id>"
        );
    }

    #[test]
    fn test_reference_uses_logical_id() {
        let param = Parameter::new("CertificateArn", ParameterType::String).min_length(5);
        assert_eq!(param.reference(), Token::reference("CertificateArn"));
    }
}
