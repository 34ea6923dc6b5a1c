use crate::alpha::letter::Letter;

/// A component the signal passes through: once on the way in, once on the way back.
///
/// Stateless components (reflector, plugboard) give the same answer in both directions.
pub trait Substitute {
    fn forward(&self, c: Letter) -> Letter;
    fn reverse(&self, c: Letter) -> Letter;
}
