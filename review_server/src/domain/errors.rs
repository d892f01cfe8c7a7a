// Domain-level errors for review aggregate workflows.
#[derive(Debug, PartialEq)]
pub enum ReviewError {
    InvalidHotelName,
    InvalidRating,
    InvalidReviewText,
    InvalidReply,
    InvalidReason,
    UserNotFound,
    HotelNotFound,
    ReviewNotFound,
    NotReviewAuthor,
    StorageFailure,
}

// Domain-level errors for signup, login and profile lookups.
#[derive(Debug, PartialEq)]
pub enum AccountError {
    InvalidName,
    InvalidEmail,
    InvalidPassword,
    EmailTaken,
    UserNotFound,
    IncorrectPassword,
    HashingFailure,
    StorageFailure,
}

// Domain-level errors for bearer session handling.
#[derive(Debug, PartialEq)]
pub enum SessionError {
    InvalidToken,
    SessionExpired,
    StorageFailure,
}
