/// Caption and reply-text formatting
pub mod captions;
/// Command handlers
pub mod handlers;
