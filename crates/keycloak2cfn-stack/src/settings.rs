//! Resolved deployment settings handed to the resource composer

use std::time::Duration;

use indexmap::IndexMap;
use keycloak2cfn_template::Token;

/// Sticky-session duration for the load balancer target group.
/// Fixed rather than parameterized.
pub const STICKY_SESSION_DURATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Existing-VPC lookup: the VPC id plus two subnets per tier
///
/// The design assumes exactly two availability zones; each selection takes
/// positions 0 and 1 of the supplied subnet list.
#[derive(Debug, Clone, PartialEq)]
pub struct VpcLookup {
    pub vpc_id: Token,
    pub public_subnets: [Token; 2],
    pub private_subnets: [Token; 2],
    pub database_subnets: [Token; 2],
}

/// Container autoscaling bounds
#[derive(Debug, Clone, PartialEq)]
pub struct AutoScalingSettings {
    pub min_containers: Token,
    pub max_containers: Token,
    pub target_cpu_utilization: Token,
}

/// Everything the resource composer needs, resolved once per stack
///
/// `database_instance_type` is `Some` exactly when the database mode is
/// provisioned; `vpc` is `Some` exactly when the stack joins an existing
/// VPC. Constructed once after all parameters are declared and grouped,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentSettings {
    pub certificate_arn: Token,
    pub vpc: Option<VpcLookup>,
    pub database_instance_type: Option<Token>,
    pub autoscaling: AutoScalingSettings,
    pub env: IndexMap<String, Token>,
    pub version_tag: String,
    pub sticky_session_duration: Duration,
}
