use crate::macros::uuid_newtype;

uuid_newtype!(ClientId);
