pub mod identity;
pub mod profile_record;
pub mod profile_update;
pub mod registration;
