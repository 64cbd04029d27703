// keycloak2cfn-template - CloudFormation template primitives
//
// Pure declaration and grouping: typed parameters, deferred value tokens,
// presentation groups, and template JSON assembly. No I/O, no async, and
// no validation of supplied values - CloudFormation enforces the declared
// constraints when the stack is created.

mod error;
mod groups;
mod parameter;
mod template;
mod token;

pub use error::{Result, TemplateError};
pub use groups::ParameterGroupRegistry;
pub use parameter::{Parameter, ParameterType};
pub use template::{Template, INTERFACE_KEY};
pub use token::Token;
