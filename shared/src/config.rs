use crate::error::ConfigError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/detect";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Browser timers take a signed 32-bit millisecond delay.
pub const MAX_TIMEOUT_SECS: u64 = i32::MAX as u64 / 1000;

/// Settings for talking to the classification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    /// Largest image accepted for upload. `None` forwards files of any size.
    pub max_upload_bytes: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_upload_bytes: None,
        }
    }
}

impl ClientConfig {
    /// Builds a config from optional raw values, falling back to defaults for `None`
    /// and blank strings.
    pub fn from_values(
        endpoint: Option<&str>,
        timeout_secs: Option<&str>,
        max_upload_bytes: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(endpoint) {
            config.endpoint = parse_endpoint(raw)?;
        }

        if let Some(raw) = non_blank(timeout_secs) {
            let secs = parse_number("timeout_secs", raw)?;
            if secs == 0 {
                return Err(ConfigError::ZeroTimeout);
            }
            if secs > MAX_TIMEOUT_SECS {
                return Err(ConfigError::TimeoutTooLarge {
                    secs,
                    max: MAX_TIMEOUT_SECS,
                });
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = non_blank(max_upload_bytes) {
            config.max_upload_bytes = Some(parse_number("max_upload_bytes", raw)?);
        }

        Ok(config)
    }

    /// Timeout as a timer delay in milliseconds, never above what a browser timer accepts.
    pub fn timeout_millis(&self) -> u32 {
        let millis = self.timeout.as_millis().min(i32::MAX as u128);
        u32::try_from(millis).unwrap_or(i32::MAX as u32)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_number(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let config = ClientConfig::from_values(None, Some(""), None).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:5000/detect");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_upload_bytes, None);
    }

    #[test]
    fn reads_overrides() {
        let config = ClientConfig::from_values(
            Some("https://waste.example.org/api/detect"),
            Some("15"),
            Some("10485760"),
        )
        .unwrap();
        assert_eq!(config.endpoint.host_str(), Some("waste.example.org"));
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.max_upload_bytes, Some(10_485_760));
    }

    #[test]
    fn timer_delay_fits_a_signed_millisecond_count() {
        let longest = ClientConfig::from_values(None, Some("2147483"), None).unwrap();
        assert_eq!(longest.timeout_millis(), 2_147_483_000);
        assert!(longest.timeout_millis() as i32 > 0);

        let config = ClientConfig {
            timeout: Duration::from_secs(3_000_000),
            ..ClientConfig::default()
        };
        assert_eq!(config.timeout_millis(), i32::MAX as u32);
        assert!(config.timeout_millis() as i32 > 0);

        assert_eq!(ClientConfig::default().timeout_millis(), 60_000);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ClientConfig::from_values(Some("not a url"), None, None),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert_eq!(
            ClientConfig::from_values(Some("ftp://host/detect"), None, None),
            Err(ConfigError::UnsupportedScheme("ftp".into()))
        );
        assert_eq!(
            ClientConfig::from_values(None, Some("0"), None),
            Err(ConfigError::ZeroTimeout)
        );
        assert_eq!(
            ClientConfig::from_values(None, Some("3000000"), None),
            Err(ConfigError::TimeoutTooLarge {
                secs: 3_000_000,
                max: 2_147_483
            })
        );
        assert_eq!(
            ClientConfig::from_values(None, None, Some("ten"))
                .unwrap_err()
                .to_string(),
            "invalid number for max_upload_bytes: `ten`"
        );
    }
}
