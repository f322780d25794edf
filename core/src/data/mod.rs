//! On-disk configuration: `settings.yaml` and options files.

pub mod settings;
