//! Deployment-mode flags
//
// Two independent choices, fixed for the lifetime of one stack: how the
// database runs and whether the stack joins an existing VPC. Combining
// them here keeps the mutual-exclusivity rules out of the declaration
// sequence.

use std::fmt;

/// Database engine mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseMode {
    /// Aurora on a provisioned instance class
    Provisioned,
    /// Aurora Serverless; no instance class to pick
    Serverless,
}

impl fmt::Display for DatabaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseMode::Provisioned => write!(f, "provisioned"),
            DatabaseMode::Serverless => write!(f, "serverless"),
        }
    }
}

/// Network topology mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkMode {
    /// Create a new VPC for the deployment
    CreateVpc,
    /// Join an existing VPC supplied via parameters
    ExistingVpc,
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkMode::CreateVpc => write!(f, "new VPC"),
            NetworkMode::ExistingVpc => write!(f, "existing VPC"),
        }
    }
}

/// Both mode choices for one stack instantiation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackModes {
    pub database: DatabaseMode,
    pub network: NetworkMode,
}

impl StackModes {
    /// Combine the caller's two raw booleans into the mode pair
    pub fn from_flags(aurora_serverless: bool, from_existing_vpc: bool) -> Self {
        Self {
            database: if aurora_serverless {
                DatabaseMode::Serverless
            } else {
                DatabaseMode::Provisioned
            },
            network: if from_existing_vpc {
                NetworkMode::ExistingVpc
            } else {
                NetworkMode::CreateVpc
            },
        }
    }

    pub fn aurora_serverless(&self) -> bool {
        self.database == DatabaseMode::Serverless
    }

    pub fn from_existing_vpc(&self) -> bool {
        self.network == NetworkMode::ExistingVpc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_mapping() {
        let modes = StackModes::from_flags(false, false);
        assert_eq!(modes.database, DatabaseMode::Provisioned);
        assert_eq!(modes.network, NetworkMode::CreateVpc);

        let modes = StackModes::from_flags(true, true);
        assert_eq!(modes.database, DatabaseMode::Serverless);
        assert_eq!(modes.network, NetworkMode::ExistingVpc);
    }

    #[test]
    fn test_raw_flag_accessors_round_trip() {
        for serverless in [false, true] {
            for existing in [false, true] {
                let modes = StackModes::from_flags(serverless, existing);
                assert_eq!(modes.aurora_serverless(), serverless);
                assert_eq!(modes.from_existing_vpc(), existing);
            }
        }
    }
}
