pub mod completion;
pub mod patches;
