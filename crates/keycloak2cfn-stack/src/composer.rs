//! Boundary to the resource-composition layer
//
// Building the actual resource graph (ECS service, load balancer, Aurora
// cluster, scaling policy) is a separate concern. This crate only produces
// the resolved settings a composer consumes.

use anyhow::Result;
use keycloak2cfn_template::Template;

use crate::modes::StackModes;
use crate::settings::DeploymentSettings;

/// Consumes resolved settings plus the raw mode flags and contributes
/// resources to the template.
pub trait ResourceComposer {
    fn compose(
        &mut self,
        settings: &DeploymentSettings,
        modes: StackModes,
        template: &mut Template,
    ) -> Result<()>;
}

/// Composer that contributes nothing; synthesizes the parameter surface only
#[derive(Debug, Default)]
pub struct NoopComposer;

impl ResourceComposer for NoopComposer {
    fn compose(
        &mut self,
        _settings: &DeploymentSettings,
        _modes: StackModes,
        _template: &mut Template,
    ) -> Result<()> {
        Ok(())
    }
}
