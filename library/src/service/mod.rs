pub mod editor_service;
pub mod handlers;
pub mod session;

pub use editor_service::EditorService;
pub use session::EditorSession;
