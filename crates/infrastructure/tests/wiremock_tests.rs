//! Integration tests for the infrastructure crate
//!
//! Tests cover:
//! - Adapters against mocked upstream APIs
//! - Complete job runs (application services wired to real adapters)
//! - Configuration files

use std::sync::Arc;

use application::{
    AnniversaryService, HolidayPort, HolidayService, JobOutcome, NotificationPort, QuotePolicy,
    QuotePort, QuoteService, WeatherPort, WeatherService,
};
use chrono::NaiveDate;
use domain::{CalendarKind, NotificationMessage, RecurringEvent};
use infrastructure::{
    AmapWeatherAdapter, AppConfig, Job, JuheHolidayAdapter, PushPlusNotificationAdapter,
    TianQuoteAdapter,
};
use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Configuration with every upstream pointed at the mock server
fn config_for(server: &MockServer) -> AppConfig {
    let mut config = AppConfig {
        calendarapi_key: Some(SecretString::from("cal-key")),
        tian_key: Some(SecretString::from("tian-key")),
        amap_key: Some(SecretString::from("amap-key")),
        pushplus_token: Some(SecretString::from("push-token")),
        pushplus_group_topic: Some("family".to_string()),
        ..AppConfig::default()
    };
    config.calendar.base_url = server.uri();
    config.quotes.base_url = server.uri();
    config.weather.base_url = server.uri();
    config.pushplus.base_url = server.uri();
    config
}

async fn mount_pushplus_ok(server: &MockServer, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200, "msg": "请求成功"
        })))
        .expect(expected)
        .mount(server)
        .await;
}

// ============================================================================
// Holiday job
// ============================================================================

mod holiday_tests {
    use super::*;

    fn calendar_body(date: &str, holiday: &str) -> serde_json::Value {
        serde_json::json!({
            "reason": "Success",
            "result": { "data": { "date": date, "holiday": holiday } },
            "error_code": 0
        })
    }

    #[tokio::test]
    async fn adapter_returns_calendar_day() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/day"))
            .and(query_param("key", "cal-key"))
            .and(query_param("date", "2025-10-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body("2025-10-1", "国庆节")))
            .mount(&server)
            .await;

        let adapter = JuheHolidayAdapter::from_app_config(&config_for(&server)).unwrap();
        let day = adapter.calendar_day(date(2025, 10, 1)).await.unwrap();
        assert_eq!(day.holiday_name(), Some("国庆节"));
    }

    #[tokio::test]
    async fn holiday_tomorrow_sends_one_notification() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/day"))
            .and(query_param("date", "2025-10-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body("2025-10-1", "国庆节")))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_partial_json(serde_json::json!({
                "token": "push-token",
                "title": "节日提醒",
                "content": "2025-10-1：国庆节",
                "template": "txt",
                "channel": "mail"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let service = HolidayService::new(
            Arc::new(JuheHolidayAdapter::from_app_config(&config).unwrap()),
            Arc::new(PushPlusNotificationAdapter::from_app_config(&config).unwrap()),
        );

        let outcome = service.run(date(2025, 9, 30)).await.unwrap();
        assert!(outcome.was_sent());
    }

    #[tokio::test]
    async fn empty_holiday_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/day"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body("2025-3-5", "")))
            .mount(&server)
            .await;
        mount_pushplus_ok(&server, 0).await;

        let config = config_for(&server);
        let service = HolidayService::new(
            Arc::new(JuheHolidayAdapter::from_app_config(&config).unwrap()),
            Arc::new(PushPlusNotificationAdapter::from_app_config(&config).unwrap()),
        );

        let outcome = service.run(date(2025, 3, 4)).await.unwrap();
        assert!(matches!(outcome, JobOutcome::NothingToSend { .. }));
    }

    #[tokio::test]
    async fn calendar_error_code_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/day"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "reason": "错误的请求KEY", "result": null, "error_code": 10001
            })))
            .mount(&server)
            .await;
        mount_pushplus_ok(&server, 0).await;

        let config = config_for(&server);
        let service = HolidayService::new(
            Arc::new(JuheHolidayAdapter::from_app_config(&config).unwrap()),
            Arc::new(PushPlusNotificationAdapter::from_app_config(&config).unwrap()),
        );

        let err = service.run(date(2025, 3, 4)).await.unwrap_err();
        assert!(matches!(err, application::ApplicationError::Fetch(_)));
    }
}

// ============================================================================
// Anniversary job
// ============================================================================

mod anniversary_tests {
    use super::*;

    #[tokio::test]
    async fn event_today_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_partial_json(serde_json::json!({
                "title": "重要日期提醒",
                "content": "未来有以下日子需要注意：Test: 9月29日（阳历日期：2025-09-29，距离1天）"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let events = vec![RecurringEvent::from_label("Test", "9月29日", CalendarKind::Solar).unwrap()];
        let service = AnniversaryService::new(
            Arc::new(PushPlusNotificationAdapter::from_app_config(&config).unwrap()),
            events,
            config.anniversary.policy(),
        );

        let outcome = service.run(date(2025, 9, 29)).await.unwrap();
        assert!(outcome.was_sent());
    }
}

// ============================================================================
// Quote job
// ============================================================================

mod quote_tests {
    use super::*;

    fn quote_body(content: &str) -> serde_json::Value {
        serde_json::json!({ "code": 200, "msg": "success", "result": { "content": content } })
    }

    #[tokio::test]
    async fn adapter_fetches_from_either_endpoint() {
        let server = MockServer::start().await;
        for endpoint in ["/saylove/index", "/caihongpi/index"] {
            Mock::given(method("GET"))
                .and(path(endpoint))
                .and(query_param("key", "tian-key"))
                .respond_with(ResponseTemplate::new(200).set_body_json(quote_body("今天也很想你")))
                .mount(&server)
                .await;
        }

        let adapter = TianQuoteAdapter::from_app_config(&config_for(&server)).unwrap();
        let quote = adapter.random_quote().await.unwrap();
        assert_eq!(quote.as_deref(), Some("今天也很想你"));
    }

    #[tokio::test]
    async fn blocked_quotes_exhaust_attempts() {
        let server = MockServer::start().await;
        for endpoint in ["/saylove/index", "/caihongpi/index"] {
            Mock::given(method("GET"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(200).set_body_json(quote_body("我想嫁给你")))
                .mount(&server)
                .await;
        }
        mount_pushplus_ok(&server, 0).await;

        let config = config_for(&server);
        let policy = QuotePolicy {
            max_attempts: 3,
            ..config.quotes.policy()
        };
        let service = QuoteService::new(
            Arc::new(TianQuoteAdapter::from_app_config(&config).unwrap()),
            Arc::new(PushPlusNotificationAdapter::from_app_config(&config).unwrap()),
            policy,
        );

        let outcome = service.run().await.unwrap();
        assert!(!outcome.was_sent());

        let fetches = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.method.as_str() == "GET")
            .count();
        assert_eq!(fetches, 3);
    }

    #[tokio::test]
    async fn accepted_quote_is_sent_with_greeting() {
        let server = MockServer::start().await;
        for endpoint in ["/saylove/index", "/caihongpi/index"] {
            Mock::given(method("GET"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(200).set_body_json(quote_body("  早安  ")))
                .mount(&server)
                .await;
        }
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_partial_json(serde_json::json!({
                "title": "每日小情话",
                "content": "致亲爱的老婆：早安"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let service = QuoteService::new(
            Arc::new(TianQuoteAdapter::from_app_config(&config).unwrap()),
            Arc::new(PushPlusNotificationAdapter::from_app_config(&config).unwrap()),
            config.quotes.policy(),
        );

        assert!(service.run().await.unwrap().was_sent());
    }
}

// ============================================================================
// Weather job
// ============================================================================

mod weather_tests {
    use super::*;

    async fn mount_weather(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/v3/weather/weatherInfo"))
            .and(query_param("extensions", "base"))
            .and(query_param("city", "450103"))
            .and(query_param("key", "amap-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "1", "info": "OK", "infocode": "10000",
                "lives": [{ "city": "青秀区", "weather": "多云", "temperature": "28" }]
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/weather/weatherInfo"))
            .and(query_param("extensions", "all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "1", "info": "OK", "infocode": "10000",
                "forecasts": [{
                    "city": "青秀区",
                    "casts": [
                        { "date": "2025-06-02", "week": "1", "dayweather": "多云",
                          "daytemp": "31", "nighttemp": "24" },
                        { "date": "2025-06-03", "week": "2", "dayweather": "暴雪",
                          "daytemp": "2", "nighttemp": "-3" }
                    ]
                }]
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn adapter_converts_forecast() {
        let server = MockServer::start().await;
        mount_weather(&server).await;

        let adapter = AmapWeatherAdapter::from_app_config(&config_for(&server)).unwrap();
        let report = adapter.forecast().await.unwrap().unwrap();
        assert_eq!(report.city, "青秀区");
        let cast = report.cast_for(date(2025, 6, 3)).unwrap();
        assert_eq!(cast.day_weather, "暴雪");
        assert_eq!(cast.night_temp, "-3");
    }

    #[tokio::test]
    async fn report_goes_to_group_topic() {
        let server = MockServer::start().await;
        mount_weather(&server).await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_partial_json(serde_json::json!({
                "title": "天气提醒",
                "topic": "family"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let service = WeatherService::new(
            Arc::new(AmapWeatherAdapter::from_app_config(&config).unwrap()),
            Arc::new(PushPlusNotificationAdapter::from_app_config(&config).unwrap()),
            config.weather.report_config(),
        );

        assert!(service.run(date(2025, 6, 2)).await.unwrap().was_sent());

        let requests = server.received_requests().await.unwrap();
        let send = requests
            .iter()
            .find(|r| r.url.path() == "/send")
            .expect("send request");
        let body: serde_json::Value = serde_json::from_slice(&send.body).unwrap();
        let content = body["content"].as_str().unwrap();
        assert!(content.starts_with("南宁市青秀区-实时天气信息:\n天气状况: 多云\n温度: 28°C\n"));
        assert!(content.contains("日期: 2025-06-03(周2)\n白天天气状况: 暴雪\n温度: -3°C-2°C\n"));
        assert!(content.ends_with(domain::advice_for("暴雪")));
    }

    #[tokio::test]
    async fn amap_status_zero_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/weather/weatherInfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "0", "info": "INVALID_USER_KEY", "infocode": "10001"
            })))
            .mount(&server)
            .await;

        let adapter = AmapWeatherAdapter::from_app_config(&config_for(&server)).unwrap();
        let err = adapter.live_weather().await.unwrap_err();
        assert!(err.to_string().contains("INVALID_USER_KEY"));
    }
}

// ============================================================================
// Notification adapter
// ============================================================================

mod notification_tests {
    use super::*;

    #[tokio::test]
    async fn rejected_send_is_notify_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let adapter = PushPlusNotificationAdapter::from_app_config(&config_for(&server)).unwrap();
        let err = adapter
            .send(&NotificationMessage::individual("t", "c"))
            .await
            .unwrap_err();
        assert!(matches!(err, application::ApplicationError::Notify(_)));
    }

    #[tokio::test]
    async fn group_without_topic_never_hits_network() {
        let server = MockServer::start().await;
        mount_pushplus_ok(&server, 0).await;

        let config = AppConfig {
            pushplus_group_topic: None,
            ..config_for(&server)
        };
        let adapter = PushPlusNotificationAdapter::from_app_config(&config).unwrap();
        let err = adapter
            .send(&NotificationMessage::group("天气提醒", "晴"))
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }
}

// ============================================================================
// Configuration files
// ============================================================================

mod config_file_tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn file_overrides_defaults_and_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
timezone = "Asia/Tokyo"

[weather]
city = "110101"
city_prefix = "北京市"

[anniversary]
horizon_days = 3

[[events]]
name = "重要纪念日"
date = "5月20日"

[[events]]
name = "奶奶农历生日"
date = "2月2日"
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = AppConfig::load_from(
            &path,
            vec![
                ("WEATHER__CITY".to_string(), "310101".to_string()),
                ("PUSHPLUS_TOKEN".to_string(), "push".to_string()),
            ],
        )
        .unwrap();

        assert_eq!(config.timezone.name(), "Asia/Tokyo");
        assert_eq!(config.weather.city, "310101");
        assert_eq!(config.weather.city_prefix, "北京市");
        assert_eq!(config.anniversary.horizon_days, 3);
        assert!(config.require_for(Job::Anniversary).is_ok());

        let events = config.recurring_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, CalendarKind::Solar);
        assert_eq!(events[1].kind, CalendarKind::Lunar);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[weather\ncity = ").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        assert!(AppConfig::load_from(&path, Vec::new()).is_err());
    }
}
