//! API handlers and shared validation helpers.

pub mod docs;
pub mod health;
pub mod login_events;
pub mod otp;
pub mod root;
pub mod users;

/// Phone sanity check used by the OTP handlers: present and at least eight
/// characters after trimming. Real number validation belongs to the OTP
/// service once one exists.
pub fn valid_phone(phone: Option<&str>) -> bool {
    phone.is_some_and(|value| value.trim().len() >= 8)
}
