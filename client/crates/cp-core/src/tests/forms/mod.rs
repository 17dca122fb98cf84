mod form_field;
mod login_form;
mod profile_form;
mod registration_form;
