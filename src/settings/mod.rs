//! Settings view models
//!
//! One typed form per settings group, read into the JSON body that group's
//! endpoint expects. Nothing in here touches the UI or the network.

pub mod forms;
pub mod group;
pub mod remote;

pub use forms::{SettingsForms, SettingsUpdate};
pub use group::SettingsGroup;
pub use remote::RemoteConfig;
