use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 5000)
    pub api_port: u16,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Endpoint the plot payload is served from
    pub plot_endpoint: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 5000,
            api_path: "/api".to_string(),
            api_use_https: false,
            plot_endpoint: "/plot".to_string(),
            log_level: Level::Info,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                // In development, use more verbose logging
                if hostname == "localhost" || hostname == "127.0.0.1" {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_host)) = storage.get_item("plotview_api_host") {
                    settings.api_host = api_host;
                }

                if let Ok(Some(api_port)) = storage.get_item("plotview_api_port") {
                    if let Ok(port_val) = api_port.parse::<u16>() {
                        settings.api_port = port_val;
                    }
                }

                if let Ok(Some(api_path)) = storage.get_item("plotview_api_path") {
                    settings.api_path = api_path;
                }

                if let Ok(Some(use_https)) = storage.get_item("plotview_api_use_https") {
                    settings.api_use_https = use_https.to_lowercase() == "true";
                }

                if let Ok(Some(endpoint)) = storage.get_item("plotview_plot_endpoint") {
                    settings.plot_endpoint = endpoint;
                }

                if let Ok(Some(log_level)) = storage.get_item("plotview_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }

                if let Ok(Some(duration)) = storage.get_item("plotview_toast_duration_ms") {
                    if let Ok(duration_val) = duration.parse::<u32>() {
                        settings.toast_duration_ms = duration_val;
                    }
                }
            }
        }

        settings
    }

    /// Get the base API URL (protocol + host + port + path prefix)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }

    /// Full URL the plot payload is fetched from
    pub fn plot_url(&self) -> String {
        self.api_url(&self.plot_endpoint)
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

/// Initialize settings from the environment (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_url() {
        let settings = AppSettings::default();
        assert_eq!(settings.plot_url(), "http://localhost:5000/api/plot");
    }

    #[test]
    fn https_and_custom_endpoint() {
        let settings = AppSettings {
            api_host: "plots.example.com".to_string(),
            api_port: 443,
            api_path: "".to_string(),
            api_use_https: true,
            plot_endpoint: "/features/plot".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(settings.api_base_url(), "https://plots.example.com:443");
        assert_eq!(settings.plot_url(), "https://plots.example.com:443/features/plot");
    }

    #[test]
    fn update_settings_changes_global_copy() {
        update_settings(|s| s.api_port = 8080);
        assert_eq!(get_settings().api_port, 8080);
        update_settings(|s| s.api_port = 5000);
    }
}
