// Singleton: one lazily-built instance per process, behind OnceLock.

use colored::Colorize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::debug;

// ============================================================================
// Generic holder
// ============================================================================

/// Lazily-initialised, process-wide value.
///
/// `init` runs on the first [`Singleton::get_instance`] call only; every later
/// call returns a reference to the same value.
pub struct Singleton<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
}

impl<T> Singleton<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    pub fn get_instance(&self) -> &T {
        self.cell.get_or_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

// ============================================================================
// Designated entity
// ============================================================================

static CONNECTIONS_OPENED: AtomicUsize = AtomicUsize::new(0);
static DATABASE: Singleton<Database> = Singleton::new(Database::connect);

#[derive(Debug)]
pub struct Database {
    connection_string: String,
}

impl Database {
    fn connect() -> Self {
        let opened = CONNECTIONS_OPENED.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(opened, "opening database connection");
        Self {
            connection_string: "postgres://localhost:5432/app".to_string(),
        }
    }

    pub fn instance() -> &'static Database {
        DATABASE.get_instance()
    }

    /// Number of times the connection was actually opened.
    pub fn connections_opened() -> usize {
        CONNECTIONS_OPENED.load(Ordering::SeqCst)
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn query(&self, sql: &str) -> String {
        format!("[{}] {}", self.connection_string, sql)
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn demo() {
    let first = Database::instance();
    println!("First request:  {}", first.connection_string());
    println!("  {}", first.query("SELECT 1"));

    let second = Database::instance();
    println!("Second request: {}", second.connection_string());
    println!(
        "  Same instance: {}",
        std::ptr::eq(first, second).to_string().green()
    );
    println!("  Connections opened: {}", Database::connections_opened());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_database_same_instance() {
        let a = Database::instance();
        let b = Database::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(Database::connections_opened(), 1);
    }

    #[test]
    fn test_holder_is_lazy() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn build() -> Vec<u8> {
            CALLS.fetch_add(1, Ordering::SeqCst);
            vec![1, 2, 3]
        }
        static HOLDER: Singleton<Vec<u8>> = Singleton::new(build);

        assert!(!HOLDER.is_initialized());
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);

        assert_eq!(HOLDER.get_instance(), &vec![1, 2, 3]);
        assert!(HOLDER.is_initialized());
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_local_holder_identity() {
        let holder = Singleton::new(|| String::from("only one"));
        assert!(std::ptr::eq(holder.get_instance(), holder.get_instance()));
    }

    proptest! {
        #[test]
        fn prop_every_request_returns_same_instance(n in 1usize..200) {
            static CALLS: AtomicUsize = AtomicUsize::new(0);
            fn build() -> u64 {
                CALLS.fetch_add(1, Ordering::SeqCst);
                7
            }
            static HOLDER: Singleton<u64> = Singleton::new(build);

            let first = HOLDER.get_instance();
            for _ in 0..n {
                prop_assert!(std::ptr::eq(first, HOLDER.get_instance()));
            }
            prop_assert_eq!(CALLS.load(Ordering::SeqCst), 1);
        }
    }
}
