pub mod athlete;
pub mod scalar;

pub use athlete::{Athlete, AthleteData, BirthDate, DocumentRef, Nationality, RefId, WorldParticipation};
pub use scalar::Scalar;
