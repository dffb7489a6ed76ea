use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const STORAGE_PREFIX: &str = "bankview_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 9000)
    pub api_port: u16,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Rows requested per table page
    pub page_size: u32,

    /// Delay between the last keystroke and the search request
    pub search_debounce_ms: u32,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Largest statement file accepted for upload
    pub max_upload_bytes: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 9000,
            api_path: "/api".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            request_timeout_ms: 30000,
            debug_mode: false,
            page_size: 10,
            search_debounce_ms: table::debounce::DEFAULT_DELAY.as_millis() as u32,
            toast_duration_ms: 5000,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

fn read_item(storage: &web_sys::Storage, key: &str) -> Option<String> {
    storage.get_item(&format!("{}{}", STORAGE_PREFIX, key)).ok().flatten()
}

fn read_parsed<T: std::str::FromStr>(storage: &web_sys::Storage, key: &str) -> Option<T> {
    read_item(storage, key).and_then(|value| value.parse::<T>().ok())
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(&storage);
        }

        settings
    }

    fn apply_overrides(&mut self, storage: &web_sys::Storage) {
        if let Some(api_host) = read_item(storage, "api_host") {
            self.api_host = api_host;
        }
        if let Some(api_port) = read_parsed::<u16>(storage, "api_port") {
            self.api_port = api_port;
        }
        if let Some(api_path) = read_item(storage, "api_path") {
            self.api_path = api_path;
        }
        if let Some(use_https) = read_item(storage, "api_use_https") {
            self.api_use_https = use_https.eq_ignore_ascii_case("true");
        }
        if let Some(log_level) = read_item(storage, "log_level") {
            self.log_level = parse_level(&log_level).unwrap_or(self.log_level);
        }
        if let Some(timeout) = read_parsed::<u32>(storage, "request_timeout_ms") {
            self.request_timeout_ms = timeout;
        }
        if let Some(page_size) = read_parsed::<u32>(storage, "page_size").filter(|size| *size > 0) {
            self.page_size = page_size;
        }
        if let Some(debounce) = read_parsed::<u32>(storage, "search_debounce_ms") {
            self.search_debounce_ms = debounce;
        }
        if let Some(duration) = read_parsed::<u32>(storage, "toast_duration_ms") {
            self.toast_duration_ms = duration;
        }
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        let Some(window) = window() else {
            return Ok(());
        };
        let Some(storage) = window.local_storage()? else {
            return Ok(());
        };

        let entries = [
            ("api_host", self.api_host.clone()),
            ("api_port", self.api_port.to_string()),
            ("api_path", self.api_path.clone()),
            ("api_use_https", self.api_use_https.to_string()),
            ("log_level", self.log_level.as_str().to_lowercase()),
            ("request_timeout_ms", self.request_timeout_ms.to_string()),
            ("page_size", self.page_size.to_string()),
            ("search_debounce_ms", self.search_debounce_ms.to_string()),
            ("toast_duration_ms", self.toast_duration_ms.to_string()),
        ];
        for (key, value) in entries {
            storage.set_item(&format!("{}{}", STORAGE_PREFIX, key), &value)?;
        }
        log::info!("Settings saved to local storage");
        Ok(())
    }

    /// Get the base API URL (protocol + host + port)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

/// Restore built-in defaults, ignoring the environment and stored overrides
pub fn reset_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::default();
    });
}
