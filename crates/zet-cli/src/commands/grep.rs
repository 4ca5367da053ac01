// crates/zet-cli/src/commands/grep.rs - Print every zet matching a pattern
//
// Matching is grep's job: one `grep -E -q` per file, one after another. The
// whole tree is searched before anything is printed; each hit is then shown
// in full under an 80-column rule of `=`.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use zet_core::CommandRunner;
use zet_core::search::{file_matches, separator};

use crate::commands::report;
use crate::context::Context;
use crate::services::vault::write_lines;

pub fn handle<R, W>(ctx: &Context<R>, pattern: &str, out: &mut W) -> Result<()>
where
    R: CommandRunner,
    W: Write + ?Sized,
{
    debug!(root = %ctx.vault_service.root().display(), pattern, "searching notes");

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in ctx.vault_service.files() {
        match entry {
            Ok(path) if file_matches(ctx.runner(), pattern, &path) => matches.push(path),
            Ok(_) => {}
            Err(err) => report(out, err)?,
        }
    }

    debug!(count = matches.len(), "search finished");

    let rule = separator();
    for path in matches {
        writeln!(out, "{rule}")?;
        match ctx.vault_service.read_lines(&path, None) {
            Ok(lines) => write_lines(out, &lines)?,
            Err(err) => report(out, err)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingRunner, test_context, write_note};
    use std::ffi::OsString;
    use std::io;

    #[test]
    fn test_grep_prints_matches_with_separator() {
        let (dir, ctx) = test_context(RecordingRunner::substring_grep());
        write_note(dir.path(), "2401010000", "# 2401010000 One\n\nhello world\n");
        write_note(dir.path(), "2402020000", "# 2402020000 Two\n\nnothing here\n");
        write_note(dir.path(), "2403030000", "# 2403030000 Three\n\nhello world\n");

        let mut out = Vec::new();
        handle(&ctx, "hello", &mut out).unwrap();

        let rule = "=".repeat(80);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "{rule}\n# 2401010000 One\n\nhello world\n{rule}\n# 2403030000 Three\n\nhello world\n"
            )
        );
        assert_eq!(ctx.runner().calls().len(), 3);
    }

    #[test]
    fn test_grep_runs_quiet_extended_match_per_file() {
        let (dir, ctx) = test_context(RecordingRunner::substring_grep());
        let path = write_note(dir.path(), "2401010000", "text\n");

        handle(&ctx, "te(x|s)t", &mut Vec::<u8>::new()).unwrap();

        let calls = ctx.runner().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "grep");
        let expected: Vec<OsString> = ["-E", "-q", "-e", "te(x|s)t"]
            .into_iter()
            .map(OsString::from)
            .collect();
        assert_eq!(calls[0].args[..4], expected[..]);
        assert_eq!(calls[0].args.last().unwrap(), path.as_os_str());
    }

    #[cfg(unix)]
    #[test]
    fn test_grep_continues_past_unreadable_directory() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let (dir, ctx) = test_context(RecordingRunner::substring_grep());
        write_note(dir.path(), "2403051412", "# 2403051412 Found\nhello\n");
        let locked = dir.path().join("00");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("0001010000.md"), "hello\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not stop root; nothing to observe then
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut out = Vec::new();
        let result = handle(&ctx, "hello", &mut out);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        result.unwrap();

        let printed = String::from_utf8(out).unwrap();
        let rule = "=".repeat(80);
        assert!(printed.lines().next().unwrap().contains("00"), "{printed}");
        assert!(
            printed.ends_with(&format!("{rule}\n# 2403051412 Found\nhello\n")),
            "{printed}"
        );
        assert_eq!(ctx.runner().calls().len(), 1);
    }

    #[test]
    fn test_grep_launch_failure_counts_as_no_match() {
        let (dir, ctx) = test_context(RecordingRunner::responding(|_| {
            Err(io::Error::new(io::ErrorKind::NotFound, "no grep"))
        }));
        write_note(dir.path(), "2401010000", "hello\n");

        let mut out = Vec::new();
        handle(&ctx, "hello", &mut out).unwrap();
        assert!(out.is_empty());
    }
}
