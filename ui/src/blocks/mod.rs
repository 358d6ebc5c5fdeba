//! Block registration and configuration persistence
//!
//! Models the host-CMS surface the block plugs into: a registry entry
//! (type name, attribute schema defaults) and a per-instance content
//! store. The store persists [`BlockConfiguration`] verbatim and hands
//! it back unchanged on every future render; it never interprets the
//! attributes.

use gloo_storage::{LocalStorage, Storage};
use serde_json::Value;

use centreboard_shared::{BlockConfiguration, BlockInstanceId};

/// Registered block type name
pub const CENTRE_BLOCK_NAME: &str = "centreboard/collection-centre";

/// Descriptor for an embeddable block type
#[derive(Debug, Clone)]
pub struct BlockType {
    /// Unique type name, `namespace/block`
    pub name: &'static str,

    /// Default attribute values for a freshly embedded instance
    pub default_attributes: Value,
}

/// The collection centre block descriptor
pub fn centre_block() -> BlockType {
    BlockType {
        name: CENTRE_BLOCK_NAME,
        default_attributes: serde_json::to_value(BlockConfiguration::default())
            .unwrap_or(Value::Null),
    }
}

fn storage_key(instance: BlockInstanceId) -> String {
    format!("{}:{}", CENTRE_BLOCK_NAME, instance)
}

/// Load the persisted configuration for a block instance, or an empty
/// one for a freshly embedded instance
pub fn load_configuration(instance: BlockInstanceId) -> BlockConfiguration {
    LocalStorage::get(storage_key(instance)).unwrap_or_default()
}

/// Persist a block instance's configuration verbatim
pub fn store_configuration(instance: BlockInstanceId, config: &BlockConfiguration) {
    if let Err(e) = LocalStorage::set(storage_key(instance), config) {
        tracing::error!("Failed to persist block configuration: {}", e);
    }
}

const DEMO_INSTANCE_KEY: &str = "centreboard:demo-instance";

/// The demo page's block instance, created on first visit and stable
/// across reloads
pub fn demo_instance() -> BlockInstanceId {
    if let Ok(stored) = LocalStorage::get::<String>(DEMO_INSTANCE_KEY) {
        if let Some(id) = BlockInstanceId::parse(&stored) {
            return id;
        }
    }
    let id = BlockInstanceId::new();
    if let Err(e) = LocalStorage::set(DEMO_INSTANCE_KEY, id.to_string()) {
        tracing::error!("Failed to persist demo instance id: {}", e);
    }
    id
}
