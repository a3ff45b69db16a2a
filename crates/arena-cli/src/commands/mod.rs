pub mod ask;
pub mod auth;
pub mod dispatch;
pub mod feedback;
pub mod history;
