/// POM analysis domain - pure business logic with no I/O
///
/// - `domain`: entities and value objects (manifest model, patches, analysis result)
/// - `services`: analyzer, BOM detector, conflict detector and patch strategy engine
/// - `policies`: version ordering used to pick BOM versions
pub mod domain;
pub mod policies;
pub mod services;
