use crate::Deployment;
use serde::Serialize;
use std::fmt;

/// Aggregate view of a validated deployment, printed after a successful read.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Summary {
    pub app_name:        String,
    pub environment:     String,
    pub total_resources: usize,
    /// Resource type names in the order they appear in the file
    pub resource_types:  Vec<String>,
}

impl From<&Deployment<'_>> for Summary {
    fn from(deployment: &Deployment<'_>) -> Self {
        let resources = deployment.resources();
        Summary {
            app_name:        deployment.app_name().into_owned(),
            environment:     deployment.environment().into_owned(),
            total_resources: resources.len(),
            resource_types:  resources.keys().cloned().collect(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Configuration Summary:")?;
        writeln!(f, "Application: {}", self.app_name)?;
        writeln!(f, "Environment: {}", self.environment)?;
        writeln!(f, "Total Resources: {}", self.total_resources)?;
        write!(f, "Resource Types: {}", self.resource_types.join(", "))
    }
}
