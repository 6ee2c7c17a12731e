/// Numeric conversions.
///
/// Groups the few lossy casts the engine needs, so the lints they silence
/// stay localized.
pub mod num;
