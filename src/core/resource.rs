//! Resources granted by the `playResource` action.

use serde::{Deserialize, Serialize};

/// A resource placed into a player's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    /// Units of resource this grants.
    pub amount: u32,
}

impl Resource {
    /// A single unit, which is what one `playResource` action grants.
    #[must_use]
    pub const fn single() -> Self {
        Self { amount: 1 }
    }
}

impl Default for Resource {
    fn default() -> Self {
        Self::single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        assert_eq!(Resource::default(), Resource::single());
        assert_eq!(
            serde_json::to_value(Resource::single()).unwrap(),
            serde_json::json!({ "amount": 1 })
        );
    }
}
