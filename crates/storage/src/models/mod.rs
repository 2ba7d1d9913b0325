pub mod discipline;
pub mod matches;
pub mod player_slot;
pub mod user;

pub use discipline::Discipline;
pub use matches::Match;
pub use player_slot::PlayerSlot;
pub use user::User;
