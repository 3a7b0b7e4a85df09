//! 헬스 체크 응답 DTO
//!
//! 모든 서비스 클라이언트가 노출하는 헬스 체크 연산의 반환 형태입니다.
//! 호출 측은 이 값으로 liveness/readiness를 판단합니다.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 서비스 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    Healthy,
    Degraded,
    Down,
    Error,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Ok => "ok",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
            HealthStatus::Down => "down",
            HealthStatus::Error => "error",
        }
    }

    /// 요청을 받을 수 있는 상태인지 여부 (`degraded` 포함)
    pub fn is_available(&self) -> bool {
        matches!(
            self,
            HealthStatus::Ok | HealthStatus::Healthy | HealthStatus::Degraded
        )
    }

    /// 정상 상태(`ok`, `healthy`)인지 여부
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Ok | HealthStatus::Healthy)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(HealthStatus::Ok),
            "healthy" => Ok(HealthStatus::Healthy),
            "degraded" => Ok(HealthStatus::Degraded),
            "down" => Ok(HealthStatus::Down),
            "error" => Ok(HealthStatus::Error),
            _ => Err(format!("Unknown health status: {}", s)),
        }
    }
}

/// 하위 서비스 하나의 상태
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 응답 지연 (예: `"12ms"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<String>,
}

impl ServiceHealth {
    pub fn new(status: HealthStatus) -> Self {
        Self {
            status,
            message: None,
            latency: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(format!("{}ms", latency.as_millis()));
        self
    }
}

/// 헬스 체크 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<BTreeMap<String, ServiceHealth>>,
}

impl HealthResponse {
    pub fn new(status: HealthStatus) -> Self {
        Self {
            status,
            version: None,
            timestamp: Utc::now(),
            services: None,
        }
    }

    /// 하위 서비스 상태로부터 전체 상태를 계산합니다.
    ///
    /// - 하위 서비스가 없거나 모두 정상이면 `healthy`
    /// - 모두 `down`/`error`이면 `down`
    /// - 그 외에는 `degraded`
    pub fn from_services(
        version: Option<String>,
        services: BTreeMap<String, ServiceHealth>,
    ) -> Self {
        let status = if services.values().all(|s| s.status.is_healthy()) {
            HealthStatus::Healthy
        } else if services.values().all(|s| !s.status.is_available()) {
            HealthStatus::Down
        } else {
            HealthStatus::Degraded
        };

        Self {
            status,
            version,
            timestamp: Utc::now(),
            services: Some(services),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services(statuses: &[(&str, HealthStatus)]) -> BTreeMap<String, ServiceHealth> {
        statuses
            .iter()
            .map(|(name, status)| (name.to_string(), ServiceHealth::new(*status)))
            .collect()
    }

    #[test]
    fn test_all_healthy() {
        let response = HealthResponse::from_services(
            Some("1.2.0".to_string()),
            services(&[("db", HealthStatus::Healthy), ("cache", HealthStatus::Ok)]),
        );
        assert_eq!(response.status, HealthStatus::Healthy);
    }

    #[test]
    fn test_partial_outage_is_degraded() {
        let response = HealthResponse::from_services(
            None,
            services(&[("db", HealthStatus::Healthy), ("twilio", HealthStatus::Down)]),
        );
        assert_eq!(response.status, HealthStatus::Degraded);
        assert!(response.status.is_available());
    }

    #[test]
    fn test_total_outage_is_down() {
        let response = HealthResponse::from_services(
            None,
            services(&[("db", HealthStatus::Error), ("stripe", HealthStatus::Down)]),
        );
        assert_eq!(response.status, HealthStatus::Down);
        assert!(!response.status.is_available());
    }

    #[test]
    fn test_no_services_is_healthy() {
        let response = HealthResponse::from_services(None, BTreeMap::new());
        assert_eq!(response.status, HealthStatus::Healthy);
    }

    #[test]
    fn test_wire_format() {
        let mut map = BTreeMap::new();
        map.insert(
            "db".to_string(),
            ServiceHealth::new(HealthStatus::Healthy).with_latency(Duration::from_millis(12)),
        );
        let response = HealthResponse::from_services(Some("1.0.0".to_string()), map);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["services"]["db"]["latency"], "12ms");
        assert!(json["services"]["db"].get("message").is_none());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("degraded".parse::<HealthStatus>().unwrap(), HealthStatus::Degraded);
        assert!("unknown".parse::<HealthStatus>().is_err());
    }
}
