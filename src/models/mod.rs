pub mod enums;
pub mod estimate;
pub mod preferences;
pub mod profile;
pub mod recipient;
pub mod symptom;

pub use enums::*;
pub use estimate::*;
pub use preferences::*;
pub use profile::*;
pub use recipient::*;
pub use symptom::*;
