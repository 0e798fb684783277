pub mod completion;
pub mod content_policy;
pub mod relay;
