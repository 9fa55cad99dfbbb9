/// Use cases module containing application business logic orchestration
mod analyze_manifest;

pub use analyze_manifest::AnalyzeManifestUseCase;
