mod profile_record;
mod profile_update;
