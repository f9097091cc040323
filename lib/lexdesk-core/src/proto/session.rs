use shared_types::AdminId;

use crate::model::admin::AdminRole;
use crate::service::error::{ServiceError, ValidationError};

/// Authenticated actor of a call
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Session {
    pub admin_id: AdminId,
    pub role: AdminRole,
}

impl Session {
    pub fn is_super_admin(&self) -> bool {
        self.role == AdminRole::SuperAdmin
    }

    /// Super-admins pass every ownership check, advocates only for their own records
    pub fn ensure_owner(&self, owner_id: &AdminId) -> Result<(), ServiceError> {
        if self.is_super_admin() || self.admin_id == *owner_id {
            Ok(())
        } else {
            Err(ValidationError::Forbidden.into())
        }
    }

    pub fn ensure_super_admin(&self) -> Result<(), ServiceError> {
        if self.is_super_admin() {
            Ok(())
        } else {
            Err(ValidationError::Forbidden.into())
        }
    }

    /// Owner filter for list queries, `None` lets super-admins see everything
    pub fn owner_filter(&self) -> Option<AdminId> {
        (!self.is_super_admin()).then_some(self.admin_id)
    }
}
