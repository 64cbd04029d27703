//! Keycloak stack: parameter declaration and settings resolution

use anyhow::Result;
use indexmap::IndexMap;
use keycloak2cfn_template::{
    Parameter, ParameterGroupRegistry, ParameterType, Template, Token,
};
use serde_json::Value;
use tracing::debug;

use crate::composer::ResourceComposer;
use crate::modes::StackModes;
use crate::settings::{
    AutoScalingSettings, DeploymentSettings, VpcLookup, STICKY_SESSION_DURATION,
};

/// Database instance classes the template accepts
pub const SUPPORTED_INSTANCE_TYPES: &[&str] = &[
    "r5.large",
    "r5.xlarge",
    "r5.2xlarge",
    "r5.4xlarge",
    "r5.8xlarge",
    "r5.12xlarge",
    "m5.large",
    "m5.xlarge",
    "m5.2xlarge",
    "m5.4xlarge",
];

pub const DEFAULT_INSTANCE_TYPE: &str = "r5.large";

/// Keycloak releases the template can deploy
pub const SUPPORTED_KEYCLOAK_VERSIONS: &[&str] =
    &["16.1.1", "15.0.2", "15.0.1", "15.0.0", "12.0.4"];

pub const DEFAULT_KEYCLOAK_VERSION: &str = "16.1.1";

// Presentation group labels
const ALB_GROUP: &str = "Application Load Balancer Settings";
const DATABASE_GROUP: &str = "Database Instance Settings";
const VPC_GROUP: &str = "VPC Settings";
const AUTOSCALING_GROUP: &str = "AutoScaling Settings";
const ENV_GROUP: &str = "Environment variable";
const VERSION_GROUP: &str = "Keycloak Version";

/// Construction-time properties of one Keycloak stack
#[derive(Debug, Clone)]
pub struct StackProps {
    pub modes: StackModes,
    /// Free-form tag interpolated into the stack description for operator
    /// visibility; no functional effect.
    pub version_tag: String,
}

/// One Keycloak deployment: parameter surface, presentation groups and
/// resolved settings
///
/// Each stack owns an independent template and group registry; nothing is
/// shared across instantiations.
pub struct KeycloakStack {
    props: StackProps,
    template: Template,
    groups: ParameterGroupRegistry,
}

// Existing-VPC parameters, declared together and resolved together.
struct NetworkParameters {
    vpc_id: Parameter,
    public_subnets: Parameter,
    private_subnets: Parameter,
    database_subnets: Parameter,
}

impl KeycloakStack {
    pub fn new(props: StackProps) -> Self {
        let description = format!(
            "Keycloak {} on AWS Fargate (database: {}, network: {})",
            props.version_tag, props.modes.database, props.modes.network
        );
        Self {
            template: Template::new(description),
            groups: ParameterGroupRegistry::new(),
            props,
        }
    }

    pub fn modes(&self) -> StackModes {
        self.props.modes
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn groups(&self) -> &ParameterGroupRegistry {
        &self.groups
    }

    /// Render the full template JSON, interface metadata included
    pub fn to_value(&self) -> Value {
        self.template.to_value(&self.groups)
    }

    /// Declare the parameter surface, resolve settings and hand them to
    /// the composer.
    ///
    /// Runs exactly once per stack. A second call re-declares logical ids
    /// and fails with a duplicate-parameter error rather than corrupting
    /// the parameter surface.
    pub fn synth(&mut self, composer: &mut dyn ResourceComposer) -> Result<DeploymentSettings> {
        let settings = self.declare_parameters()?;
        composer.compose(&settings, self.props.modes, &mut self.template)?;
        debug!(
            database = %self.props.modes.database,
            network = %self.props.modes.network,
            "stack synthesis complete"
        );
        Ok(settings)
    }

    fn declare_parameters(&mut self) -> Result<DeploymentSettings> {
        let modes = self.props.modes;

        let certificate = Parameter::new("CertificateArn", ParameterType::String)
            .min_length(5)
            .description("ACM certificate ARN for the HTTPS listener");

        let database = if modes.aurora_serverless() {
            None
        } else {
            Some(
                Parameter::new("DatabaseInstanceType", ParameterType::String)
                    .allowed_values(SUPPORTED_INSTANCE_TYPES.iter().copied())
                    .default_value(DEFAULT_INSTANCE_TYPE)
                    .description("Instance class of the Aurora database"),
            )
        };

        let network = if modes.from_existing_vpc() {
            Some(NetworkParameters {
                vpc_id: Parameter::new("VpcId", ParameterType::VpcId)
                    .description("Existing VPC to deploy into"),
                public_subnets: Parameter::new("PubSubnets", ParameterType::SubnetIdList)
                    .description("Public subnets for the load balancer (two AZs)"),
                private_subnets: Parameter::new("PrivSubnets", ParameterType::SubnetIdList)
                    .description("Private subnets for the Keycloak containers (two AZs)"),
                database_subnets: Parameter::new("DBSubnets", ParameterType::SubnetIdList)
                    .description("Subnets for the database (two AZs)"),
            })
        } else {
            None
        };

        let min_containers = Parameter::new("MinContainers", ParameterType::Number)
            .min_value(2)
            .default_value(2)
            .description("Minimum number of Keycloak containers");
        let max_containers = Parameter::new("MaxContainers", ParameterType::Number)
            .min_value(2)
            .default_value(10)
            .description("Maximum number of Keycloak containers");
        let target_cpu =
            Parameter::new("AutoScalingTargetCpuUtilization", ParameterType::Number)
                .min_value(0)
                .default_value(75)
                .description("Target CPU utilization (%) for autoscaling");

        let java_opts = Parameter::new("JavaOpts", ParameterType::String)
            .description("JAVA_OPTS environment variable passed to Keycloak");

        let keycloak_version = Parameter::new("KeycloakVersion", ParameterType::String)
            .allowed_values(SUPPORTED_KEYCLOAK_VERSIONS.iter().copied())
            .default_value(DEFAULT_KEYCLOAK_VERSION)
            .description("Keycloak version to deploy");

        // Group registration happens after every declaration; each group
        // gets exactly one register call, in declaration-step order.
        self.groups.register(ALB_GROUP, &[&certificate]);
        if let Some(db) = &database {
            self.groups.register(DATABASE_GROUP, &[db]);
        }
        if let Some(net) = &network {
            self.groups.register(
                VPC_GROUP,
                &[
                    &net.vpc_id,
                    &net.public_subnets,
                    &net.private_subnets,
                    &net.database_subnets,
                ],
            );
        }
        self.groups.register(
            AUTOSCALING_GROUP,
            &[&min_containers, &max_containers, &target_cpu],
        );
        self.groups.register(ENV_GROUP, &[&java_opts]);
        self.groups.register(VERSION_GROUP, &[&keycloak_version]);
        debug!(groups = self.groups.len(), "registered parameter groups");

        let vpc = network.as_ref().map(|net| VpcLookup {
            vpc_id: net.vpc_id.reference(),
            public_subnets: select_two_azs(&net.public_subnets),
            private_subnets: select_two_azs(&net.private_subnets),
            database_subnets: select_two_azs(&net.database_subnets),
        });

        let settings = DeploymentSettings {
            certificate_arn: certificate.reference(),
            vpc,
            database_instance_type: database.as_ref().map(Parameter::reference),
            autoscaling: AutoScalingSettings {
                min_containers: min_containers.reference(),
                max_containers: max_containers.reference(),
                target_cpu_utilization: target_cpu.reference(),
            },
            env: IndexMap::from([("JAVA_OPTS".to_string(), java_opts.reference())]),
            version_tag: self.props.version_tag.clone(),
            sticky_session_duration: STICKY_SESSION_DURATION,
        };

        self.template.add_parameter(certificate)?;
        if let Some(db) = database {
            self.template.add_parameter(db)?;
        }
        if let Some(net) = network {
            self.template.add_parameter(net.vpc_id)?;
            self.template.add_parameter(net.public_subnets)?;
            self.template.add_parameter(net.private_subnets)?;
            self.template.add_parameter(net.database_subnets)?;
        }
        for param in [min_containers, max_containers, target_cpu, java_opts, keycloak_version] {
            self.template.add_parameter(param)?;
        }

        Ok(settings)
    }
}

/// Subnet selections for the assumed two availability zones
fn select_two_azs(list: &Parameter) -> [Token; 2] {
    [
        Token::select(0, list.reference()),
        Token::select(1, list.reference()),
    ]
}
