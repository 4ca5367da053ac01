// crates/zet-cli/src/services/mod.rs - Service layer modules
pub mod editor;
pub mod vault;

pub use editor::EditorService;
pub use vault::VaultService;
