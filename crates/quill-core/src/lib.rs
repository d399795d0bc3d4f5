pub mod params;
pub mod result;
pub mod samples;
pub mod session;
pub mod validate;

pub use params::{Field, GenerationParams, Genre, Length, ParamChange, PieceType, Tone};
pub use result::{GenerationResult, ResultMetadata};
pub use session::{Session, View};
pub use validate::{ValidationErrors, validate};
