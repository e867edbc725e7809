// Profile documents: persistence behind `ProfileStore`, update validation, HTTP handlers.

pub mod handlers;
pub mod store;
pub mod validation;
