use super::*;

/// # Safety
/// Tests touching the shared server variables hold `ENV_LOCK`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("SUBMISSIONS_FILE");
        std::env::remove_var("WEBSITE_DIR");
        std::env::remove_var("STORE_QUEUE_CAPACITY");
    }
}

static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.submissions_file, PathBuf::from(DEFAULT_SUBMISSIONS_FILE));
    assert_eq!(cfg.website_dir, PathBuf::from(DEFAULT_WEBSITE_DIR));
    assert!(cfg.website_dir.is_relative());
    assert_eq!(cfg.store_queue_capacity, DEFAULT_STORE_QUEUE_CAPACITY);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", " 8081 ");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("SUBMISSIONS_FILE", "/var/lib/site/submissions.json");
        std::env::set_var("WEBSITE_DIR", "/srv/site");
        std::env::set_var("STORE_QUEUE_CAPACITY", "8");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
    assert_eq!(cfg.submissions_file, PathBuf::from("/var/lib/site/submissions.json"));
    assert_eq!(cfg.website_dir, PathBuf::from("/srv/site"));
    assert_eq!(cfg.store_queue_capacity, 8);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    assert_eq!(Config::from_env(), Err(ConfigError::InvalidPort("eighty".into())));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_bind_addr() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("BIND_ADDR", "localhost");
    }

    assert_eq!(Config::from_env(), Err(ConfigError::InvalidBindAddr("localhost".into())));

    unsafe { clear_server_env() };
}

#[test]
fn zero_queue_capacity_is_clamped() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("STORE_QUEUE_CAPACITY", "0");
    }

    assert_eq!(Config::from_env().unwrap().store_queue_capacity, 1);

    unsafe { clear_server_env() };
}

// =============================================================================
// env_parse: unique keys, safe to run alongside the tests above.
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: usize = env_parse("__TEST_WC_MISSING_4411__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__TEST_WC_INVALID_4412__", "lots") };
    let val: usize = env_parse("__TEST_WC_INVALID_4412__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TEST_WC_INVALID_4412__") };
}
