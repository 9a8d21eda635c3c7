//! Character Context - 角色（人设）限界上下文
//!
//! 职责:
//! - 人设 key → VOICEVOX 话者 ID + 韵律参数 的映射
//! - 启动时构建、运行期只读的 CharacterRegistry

mod aggregate;
mod errors;
mod presets;
mod registry;
mod value_objects;

pub use aggregate::VoiceProfile;
pub use errors::{CharacterError, UnknownCharacter};
pub use presets::builtin_profiles;
pub use registry::CharacterRegistry;
pub use value_objects::{CharacterKey, Prosody, SpeakerId};
