pub mod data_source;
pub mod indicator;
pub mod loader;
pub mod registry;
pub mod translation;

pub use data_source::{DataSourceDescriptor, DataSourceFactory, DescriptorFactory};
pub use indicator::{Indicator, IndicatorDef, IndicatorGroup, IndicatorGroupDef};
pub use loader::{load_groups_from_dir, load_groups_from_file, load_overrides_from_file, parse_groups, parse_overrides, save_groups_to_file};
pub use registry::{DuplicatePolicy, IndicatorRegistry, RegistryBuilder};
pub use translation::TranslationOverrides;
