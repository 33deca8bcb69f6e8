use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use minish::executor::{Dispatcher, ExitSignal};
use minish::history::History;

// The working directory is process-wide.
static CWD_LOCK: Mutex<()> = Mutex::new(());

struct RestoreCwd(PathBuf);

impl Drop for RestoreCwd {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

fn cd(args: &[&str]) -> (ExitSignal, String, String) {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let mut dispatcher = Dispatcher::new();
    let (mut out, mut err): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
    let status = dispatcher.dispatch(&args, &History::new(), &mut out, &mut err);
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_cd_into_existing_directory() {
    let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = RestoreCwd(env::current_dir().unwrap());
    let dir = tempfile::tempdir().unwrap();

    let (status, out, err) = cd(&["cd", dir.path().to_str().unwrap()]);

    assert_eq!(status, ExitSignal::Continue);
    assert!(out.is_empty());
    assert!(err.is_empty());
    assert_eq!(
        fs::canonicalize(env::current_dir().unwrap()).unwrap(),
        fs::canonicalize(dir.path()).unwrap()
    );
}

#[test]
fn test_cd_relative_path() {
    let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = RestoreCwd(env::current_dir().unwrap());
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("child")).unwrap();
    env::set_current_dir(dir.path()).unwrap();

    let (status, _, err) = cd(&["cd", "child"]);

    assert_eq!(status, ExitSignal::Continue);
    assert!(err.is_empty());
    assert_eq!(
        fs::canonicalize(env::current_dir().unwrap()).unwrap(),
        fs::canonicalize(dir.path().join("child")).unwrap()
    );
}

#[test]
fn test_cd_failures_leave_directory_unchanged() {
    let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let before = env::current_dir().unwrap();

    let (status, out, err) = cd(&["cd"]);
    assert_eq!(status, ExitSignal::Continue);
    assert!(out.is_empty());
    assert_eq!(err, "shell: expected argument to \"cd\"\n");
    assert_eq!(env::current_dir().unwrap(), before);

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let (status, _, err) = cd(&["cd", missing.to_str().unwrap()]);
    assert_eq!(status, ExitSignal::Continue);
    assert!(err.starts_with("shell: "), "{}", err);
    assert_eq!(env::current_dir().unwrap(), before);
}
