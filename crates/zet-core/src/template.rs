// crates/zet-core/src/template.rs - Content written into a freshly created note
//
// Every new zet starts from the same skeleton: a heading carrying the
// identifier and a placeholder title, then an empty tag line.
//
//   # 2403051412 TITLE
//
//   tags: #
//

use crate::id::NoteId;

/// Placeholder the user is expected to overwrite in the editor
pub const TITLE_PLACEHOLDER: &str = "TITLE";

/// Tag line written under the heading
pub const TAG_LINE: &str = "tags: #";

/// Render the initial content of the note `id`
pub fn initial_content(id: &NoteId) -> String {
    format!("# {id} {TITLE_PLACEHOLDER}\n\n{TAG_LINE}\n\n")
}
