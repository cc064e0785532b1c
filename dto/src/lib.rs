pub mod card_preview;
pub mod member;
pub mod member_fields;
pub mod registration;
pub mod response_status;
pub mod verification;
