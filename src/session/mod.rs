// Session state: conversation log, per-turn parameters, turn processing

mod log;
mod params;
mod turn;

pub use log::{ConversationEntry, SessionLog, Speaker};
pub use params::{GenerationParameters, Strategy, AVAILABLE_MODELS, DEFAULT_EXAMPLE};
pub use turn::{SessionState, TurnProcessor};
