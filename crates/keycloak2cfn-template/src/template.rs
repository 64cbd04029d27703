//! CloudFormation template assembly

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use crate::{Parameter, ParameterGroupRegistry, Result, TemplateError};

/// Metadata key the CloudFormation console reads for parameter presentation
pub const INTERFACE_KEY: &str = "AWS::CloudFormation::Interface";

const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// One CloudFormation template: description, declared parameters and the
/// resource graph contributed by a composer.
#[derive(Debug, Default)]
pub struct Template {
    description: String,
    parameters: IndexMap<String, Parameter>,
    resources: IndexMap<String, Value>,
}

impl Template {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            parameters: IndexMap::new(),
            resources: IndexMap::new(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declare a parameter. Logical ids are unique within one template.
    pub fn add_parameter(&mut self, parameter: Parameter) -> Result<()> {
        let id = parameter.logical_id().to_string();
        if self.parameters.contains_key(&id) {
            return Err(TemplateError::DuplicateParameter { id });
        }
        self.parameters.insert(id, parameter);
        Ok(())
    }

    pub fn parameter(&self, logical_id: &str) -> Option<&Parameter> {
        self.parameters.get(logical_id)
    }

    /// Add a resource definition (composer-facing)
    pub fn add_resource(&mut self, logical_id: impl Into<String>, resource: Value) {
        self.resources.insert(logical_id.into(), resource);
    }

    /// Render the full template, including the interface metadata block
    /// built from the registry's exported groups.
    pub fn to_value(&self, groups: &ParameterGroupRegistry) -> Value {
        let parameter_groups: Vec<Value> = groups
            .export_groups()
            .into_iter()
            .map(|(label, ids)| {
                json!({
                    "Label": { "default": label },
                    "Parameters": ids,
                })
            })
            .collect();

        let parameters: Map<String, Value> = self
            .parameters
            .iter()
            .map(|(id, param)| (id.clone(), param.to_value()))
            .collect();

        let resources: Map<String, Value> = self
            .resources
            .iter()
            .map(|(id, resource)| (id.clone(), resource.clone()))
            .collect();

        json!({
            "AWSTemplateFormatVersion": TEMPLATE_FORMAT_VERSION,
            "Description": self.description,
            "Metadata": {
                INTERFACE_KEY: { "ParameterGroups": parameter_groups },
            },
            "Parameters": parameters,
            "Resources": resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParameterType;
    use serde_json::json;

    #[test]
    fn test_duplicate_parameter_is_rejected() {
        let mut template = Template::new("test");
        template
            .add_parameter(Parameter::new("CertificateArn", ParameterType::String))
            .unwrap();

        let err = template
            .add_parameter(Parameter::new("CertificateArn", ParameterType::String))
            .unwrap_err();
        assert!(matches!(
            err,
            TemplateError::DuplicateParameter { ref id } if id == "CertificateArn"
        ));
    }

    #[test]
    fn test_rendered_template_structure() {
        let mut template = Template::new("Keycloak test stack");
        template
            .add_parameter(
                Parameter::new("KeycloakVersion", ParameterType::String)
                    .default_value("16.1.1"),
            )
            .unwrap();

        let mut groups = ParameterGroupRegistry::new();
        let version = Parameter::new("KeycloakVersion", ParameterType::String);
        groups.register("Keycloak Version", &[&version]);

        let value = template.to_value(&groups);
        assert_eq!(value["AWSTemplateFormatVersion"], json!("2010-09-09"));
        assert_eq!(value["Description"], json!("Keycloak test stack"));
        assert_eq!(
            value["Metadata"][INTERFACE_KEY]["ParameterGroups"],
            json!([{
                "Label": { "default": "Keycloak Version" },
                "Parameters": ["KeycloakVersion"],
            }])
        );
        assert_eq!(
            value["Parameters"]["KeycloakVersion"]["Default"],
            json!("16.1.1")
        );
        assert_eq!(value["Resources"], json!({}));
    }

    #[test]
    fn test_composer_resources_are_rendered() {
        let mut template = Template::new("test");
        template.add_resource(
            "KeyCloakService",
            json!({"Type": "AWS::ECS::Service", "Properties": {}}),
        );

        let value = template.to_value(&ParameterGroupRegistry::new());
        assert_eq!(
            value["Resources"]["KeyCloakService"]["Type"],
            json!("AWS::ECS::Service")
        );
    }
}
