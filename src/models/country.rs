use serde::{Deserialize, Serialize};

/// Read-only country reference entry used to populate selection fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
}
