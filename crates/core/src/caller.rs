//! Caller identity and well-known user group names.
//!
//! Group membership is decided upstream (the token issuer); this module only
//! answers the questions the listing needs: may the caller see private wikis,
//! and which limit ceiling applies.

use crate::types::DbId;

pub const GROUP_STAFF: &str = "staff";
pub const GROUP_SYSOP: &str = "sysop";
pub const GROUP_BOT: &str = "bot";

/// Groups granted the higher listing limit.
pub const HIGH_LIMIT_GROUPS: &[&str] = &[GROUP_STAFF, GROUP_SYSOP, GROUP_BOT];

/// The identity a request is evaluated for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    /// Upstream user id, `None` for anonymous callers.
    pub user_id: Option<DbId>,
    /// Effective group memberships.
    pub groups: Vec<String>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(user_id: DbId, groups: Vec<String>) -> Self {
        Self {
            user_id: Some(user_id),
            groups,
        }
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Staff may see private wikis and the wiki type.
    pub fn is_staff(&self) -> bool {
        self.in_group(GROUP_STAFF)
    }

    pub fn has_high_limits(&self) -> bool {
        HIGH_LIMIT_GROUPS.iter().any(|g| self.in_group(g))
    }
}
