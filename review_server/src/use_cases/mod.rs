// Application use cases, one per operation, generic over domain ports.

pub mod average_rating;
pub mod current_user;
pub mod delete_review;
pub mod flag_review;
pub mod list_reviews;
pub mod login;
pub mod logout;
pub mod prune_sessions;
pub mod report_review;
pub mod signup;
pub mod submit_reply;
pub mod submit_review;
pub mod update_review;
pub mod validation;
pub mod verify_token;

#[cfg(test)]
pub(crate) mod test_support;
