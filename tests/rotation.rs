//! Rotating file sink tests: thresholds, backups, byte accounting

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use rotolog::{Logger, LoggerConfig};

fn backups(dir: &Path, active: &str) -> Vec<PathBuf> {
    let prefix = format!("{active}.");
    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix))
        })
        .collect();
    found.sort();
    found
}

#[test]
fn rotation_on_the_crossing_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");
    let logger = Logger::file(&path, LoggerConfig::new()).unwrap();
    logger.set_size_limit(100).unwrap();

    // Each line is exactly 30 bytes: "[INF] " + 23 digits + "\n".
    // Cumulative size crosses 100 on the fourth write (120 > 100).
    for i in 1..=4u32 {
        logger.noticef(format_args!("{i:023}")).unwrap();
    }

    // Exactly one backup exists and it holds the first four lines.
    let found = backups(dir.path(), "out.log");
    assert_eq!(found.len(), 1);
    let backup = fs::read_to_string(&found[0]).unwrap();
    assert_eq!(backup.len(), 120);
    assert_eq!(
        backup,
        format!(
            "[INF] {:023}\n[INF] {:023}\n[INF] {:023}\n[INF] {:023}\n",
            1, 2, 3, 4
        )
    );

    // The rotation notice embeds the quoted backup path, so under a temp
    // dir it restarts the counter close to the 100-byte limit. Re-arm
    // with room to spare so the fifth write stays below the threshold.
    logger.set_size_limit(10_000).unwrap();
    logger.noticef(format_args!("{:023}", 5u32)).unwrap();

    // Still one backup; the active file restarts with the rotation
    // notice, then line five.
    assert_eq!(backups(dir.path(), "out.log").len(), 1);
    let active = fs::read_to_string(&path).unwrap();
    let mut lines = active.lines();
    assert!(
        lines
            .next()
            .unwrap()
            .starts_with("[INF] rotated log, backup saved as ")
    );
    assert_eq!(lines.next().unwrap(), format!("[INF] {:023}", 5));
    assert_eq!(lines.next(), None);
}

#[test]
fn backup_name_is_the_path_plus_utc_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.log");
    let logger = Logger::file(&path, LoggerConfig::new()).unwrap();
    logger.set_size_limit(10).unwrap();
    logger.noticef(format_args!("something long enough")).unwrap();

    let found = backups(dir.path(), "server.log");
    assert_eq!(found.len(), 1);
    let name = found[0].file_name().unwrap().to_str().unwrap();
    let suffix = name.strip_prefix("server.log.").unwrap();
    let parts: Vec<&str> = suffix.split('.').collect();
    let widths = [4, 2, 2, 2, 2, 2, 9];
    assert_eq!(parts.len(), widths.len());
    for (part, width) in parts.iter().zip(widths) {
        assert_eq!(part.len(), width);
        assert!(part.bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn arming_an_already_oversized_file_notices_then_rotates_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");
    let logger = Logger::file(&path, LoggerConfig::new()).unwrap();

    logger.noticef(format_args!("{:0100}", 0)).unwrap();
    assert!(backups(dir.path(), "out.log").is_empty());

    // The notice emitted while arming goes through the normal write path
    // and is itself the crossing write.
    logger.set_size_limit(50).unwrap();
    let found = backups(dir.path(), "out.log");
    assert_eq!(found.len(), 1);
    let backup = fs::read_to_string(&found[0]).unwrap();
    assert!(backup.contains("[INF] Rotating logfile..."));
}

#[test]
fn no_write_triggers_more_than_one_rotation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");
    let logger = Logger::file(&path, LoggerConfig::new()).unwrap();
    logger.set_size_limit(20).unwrap();

    // Far larger than the limit in a single write: still one rotation.
    logger.noticef(format_args!("{:0500}", 0)).unwrap();
    assert_eq!(backups(dir.path(), "out.log").len(), 1);
}

#[test]
fn unbounded_concurrent_writes_lose_no_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");
    let logger = Arc::new(Logger::file(&path, LoggerConfig::new()).unwrap());

    // 23 bytes per line: "[INF] " + 16 characters + "\n".
    let threads = 8;
    let writes = 50;
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..writes {
                    logger
                        .noticef(format_args!("{t:03}{i:05}xxxxxxxx"))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let expected = threads * writes * 23;
    assert_eq!(fs::metadata(&path).unwrap().len(), expected as u64);
    assert!(backups(dir.path(), "out.log").is_empty());
}

#[test]
fn bounded_concurrent_writes_below_the_limit_lose_no_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");
    let logger = Arc::new(Logger::file(&path, LoggerConfig::new()).unwrap());
    logger.set_size_limit(1024 * 1024).unwrap();

    let threads = 8;
    let writes = 50;
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..writes {
                    logger
                        .noticef(format_args!("{t:03}{i:05}xxxxxxxx"))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        fs::metadata(&path).unwrap().len(),
        (threads * writes * 23) as u64
    );
    assert!(backups(dir.path(), "out.log").is_empty());
}

#[test]
fn rearming_replaces_the_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");
    let logger = Logger::file(&path, LoggerConfig::new()).unwrap();

    logger.set_size_limit(10_000).unwrap();
    logger.noticef(format_args!("{:023}", 1)).unwrap();
    assert!(backups(dir.path(), "out.log").is_empty());

    // Lowering the limit takes effect on the next crossing write.
    logger.set_size_limit(40).unwrap();
    logger.noticef(format_args!("{:023}", 2)).unwrap();
    assert_eq!(backups(dir.path(), "out.log").len(), 1);
}
