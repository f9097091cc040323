use crate::macros::uuid_newtype;

uuid_newtype!(
    /// Identifier of an admin account (super-admin or advocate)
    AdminId
);
