use zet_core::{CommandRunner, SystemRunner, ZetConfig};

use crate::services::{EditorService, VaultService};

/// Application context that gets passed to command handlers
///
/// Built once in `main` from the resolved configuration. Handlers never read
/// the environment themselves; everything they need comes through here,
/// including the runner used to launch the editor and grep.
pub struct Context<R: CommandRunner = SystemRunner> {
    pub vault_service: VaultService,
    pub editor_service: EditorService,
    runner: R,
    config: ZetConfig,
}

impl<R: CommandRunner> Context<R> {
    pub fn new(config: ZetConfig, runner: R) -> Self {
        Self {
            vault_service: VaultService::new(config.root().to_path_buf()),
            editor_service: EditorService::new(config.editor().clone()),
            runner,
            config,
        }
    }

    /// Runner for external programs
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get resolved configuration
    pub fn config(&self) -> &ZetConfig {
        &self.config
    }
}
