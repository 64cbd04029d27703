// keycloak2cfn-stack - parameter surface and settings resolution
//
// Declares the template parameters for one Keycloak deployment, groups
// them for the CloudFormation console, and resolves a DeploymentSettings
// value from parameter references plus the two deployment-mode flags.
// Single-pass and synchronous: one synthesis per stack, no retries, no
// partial state.

mod composer;
mod modes;
mod resolver;
mod settings;

pub use composer::{NoopComposer, ResourceComposer};
pub use modes::{DatabaseMode, NetworkMode, StackModes};
pub use resolver::{
    KeycloakStack, StackProps, DEFAULT_INSTANCE_TYPE, DEFAULT_KEYCLOAK_VERSION,
    SUPPORTED_INSTANCE_TYPES, SUPPORTED_KEYCLOAK_VERSIONS,
};
pub use settings::{
    AutoScalingSettings, DeploymentSettings, VpcLookup, STICKY_SESSION_DURATION,
};
