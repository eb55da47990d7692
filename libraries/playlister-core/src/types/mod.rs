mod ids;
mod playlist;
mod song;
mod user;

pub use ids::{PlaylistId, SongId};
pub use playlist::PlaylistSummary;
pub use song::Song;
pub use user::ActingUser;
