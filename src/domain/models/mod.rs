mod chat;
mod effects;
mod endpoint;
mod notification;
mod preferences;
mod requests;
mod responses;
mod session;
mod theme;

pub use chat::*;
pub use effects::*;
pub use endpoint::*;
pub use notification::*;
pub use preferences::*;
pub use requests::*;
pub use responses::*;
pub use session::*;
pub use theme::*;
