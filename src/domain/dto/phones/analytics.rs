//! 전화 사용량 집계
//!
//! 한 사용자의 사용 기록을 기간 `[period_start, period_end)` 안에서 집계합니다.
//! 일별 키는 UTC 기준 `YYYY-MM-DD` 문자열입니다.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Metadata, PhoneUsage};
use crate::errors::{AppError, AppResult};

/// 상위 상대 번호 목록의 최대 길이
pub const TOP_NUMBERS_LIMIT: usize = 5;

/// 사용량 집계 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneUsageAnalytics {
    pub user_id: String,
    pub total_calls: u64,
    /// SMS와 MMS를 합한 메시지 건수
    pub total_sms: u64,
    pub total_cost_cents: u64,
    pub usage_by_type: BTreeMap<String, u64>,
    pub usage_by_day: BTreeMap<String, u64>,
    /// 통화/메시지 빈도가 높은 상대 번호 (빈도 내림차순, 같으면 번호 오름차순)
    pub top_numbers: Vec<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
}

impl PhoneUsageAnalytics {
    pub fn aggregate<'a>(
        user_id: impl Into<String>,
        usages: impl IntoIterator<Item = &'a PhoneUsage>,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
    ) -> AppResult<Self> {
        if period_start > period_end {
            return Err(AppError::ValidationError(
                "period_start: 집계 시작은 종료보다 늦을 수 없습니다".to_string(),
            ));
        }

        let mut total_calls = 0;
        let mut total_sms = 0;
        let mut total_cost_cents = 0;
        let mut usage_by_type = BTreeMap::new();
        let mut usage_by_day = BTreeMap::new();
        let mut counterparts: HashMap<&str, u64> = HashMap::new();

        let in_period = usages
            .into_iter()
            .filter(|usage| usage.created_at >= period_start && usage.created_at < period_end);

        for usage in in_period {
            if usage.usage_type.is_call() {
                total_calls += 1;
            } else {
                total_sms += 1;
            }
            total_cost_cents += usage.cost_cents;

            *usage_by_type
                .entry(usage.usage_type.as_str().to_string())
                .or_insert(0) += 1;
            *usage_by_day
                .entry(usage.created_at.format("%Y-%m-%d").to_string())
                .or_insert(0) += 1;

            if let Some(number) = usage.counterpart() {
                *counterparts.entry(number).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, u64)> = counterparts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let top_numbers = ranked
            .into_iter()
            .take(TOP_NUMBERS_LIMIT)
            .map(|(number, _)| number.to_string())
            .collect();

        Ok(Self {
            user_id: user_id.into(),
            total_calls,
            total_sms,
            total_cost_cents,
            usage_by_type,
            usage_by_day,
            top_numbers,
            metadata: Metadata::new(),
            period_start,
            period_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PhoneUsageType;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
    }

    fn usage(kind: PhoneUsageType, counterpart: &str, cost: u64, at: DateTime<Utc>) -> PhoneUsage {
        let own = "+14155550100".to_string();
        let (from_number, to_number) = if kind.is_inbound() {
            (Some(counterpart.to_string()), Some(own))
        } else {
            (Some(own), Some(counterpart.to_string()))
        };

        PhoneUsage {
            id: Uuid::new_v4(),
            phone_number_id: Uuid::nil(),
            usage_type: kind,
            from_number,
            to_number,
            duration_seconds: 30,
            cost_cents: cost,
            twilio_sid: None,
            status: "completed".to_string(),
            metadata: Metadata::new(),
            created_at: at,
        }
    }

    #[test]
    fn test_aggregate_counts_and_costs() {
        let usages = vec![
            usage(PhoneUsageType::VoiceOutbound, "+1000", 10, start()),
            usage(PhoneUsageType::VoiceInbound, "+2000", 5, start() + Duration::hours(2)),
            usage(PhoneUsageType::SmsOutbound, "+1000", 1, start() + Duration::days(1)),
            usage(PhoneUsageType::MmsInbound, "+3000", 2, start() + Duration::days(1)),
            // 기간 밖
            usage(PhoneUsageType::SmsOutbound, "+9999", 100, start() + Duration::days(30)),
        ];

        let analytics = PhoneUsageAnalytics::aggregate(
            "user-1",
            &usages,
            start(),
            start() + Duration::days(7),
        )
        .unwrap();

        assert_eq!(analytics.total_calls, 2);
        assert_eq!(analytics.total_sms, 2);
        assert_eq!(analytics.total_cost_cents, 18);
        assert_eq!(analytics.usage_by_type.get("voice_outbound"), Some(&1));
        assert_eq!(analytics.usage_by_day.get("2024-07-01"), Some(&2));
        assert_eq!(analytics.usage_by_day.get("2024-07-02"), Some(&2));
        assert_eq!(analytics.top_numbers, vec!["+1000", "+2000", "+3000"]);
    }

    #[test]
    fn test_aggregate_rejects_inverted_period() {
        let result = PhoneUsageAnalytics::aggregate(
            "user-1",
            &Vec::<PhoneUsage>::new(),
            start() + Duration::days(1),
            start(),
        );
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
