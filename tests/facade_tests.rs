//! Integration tests for the indicator facade.

mod common;

use common::{assert_series_eq, candles_from_closes, generate_linear, generate_random_walk, generate_sine, MINUTE_MS};

use kline_ta::{
    IndicatorError, IndicatorOutput, IndicatorRegistry, IndicatorRequest, NanMode, PricePoint, PriceSeries,
};
use kline_ta_indicators::oscillator::{kdj, macd, rsi};
use kline_ta_indicators::trend::{bollinger, sma};

fn walk_candles(len: usize) -> PriceSeries<f64> {
    candles_from_closes(&generate_random_walk(100.0, 2.0, len, 42), 0.02)
}

#[test]
fn every_indicator_aligns_to_input() {
    let registry = IndicatorRegistry::new();
    let candles = walk_candles(120);

    for name in registry.names() {
        let output = registry.compute(&candles, &IndicatorRequest::new(name)).unwrap();
        assert_eq!(output.len(), candles.len(), "{name}");
        assert!(!output.is_all_nan(), "{name} produced no values on 120 candles");
    }
}

#[test]
fn facade_matches_free_functions() {
    let registry = IndicatorRegistry::new();
    let candles = walk_candles(80);
    let closes = candles.close();

    let request = IndicatorRequest::new("SMA").with_param("period", 7.0);
    let output = registry.compute(&candles, &request).unwrap();
    assert_series_eq(output.as_single().unwrap(), sma(closes, 7).as_slice(), 1e-12, "SMA");

    let output = registry.compute(&candles, &IndicatorRequest::new("rsi")).unwrap();
    assert_series_eq(output.as_single().unwrap(), rsi(closes, 14).as_slice(), 1e-12, "RSI");

    let output = registry
        .compute(&candles, &IndicatorRequest::new("BOLL").with_param("std_dev_multiplier", 2.5))
        .unwrap();
    let bands = bollinger(closes, 20, 2.5);
    assert_series_eq(output.line("upper").unwrap(), bands.upper.as_slice(), 1e-12, "BOLL.upper");
    assert_series_eq(output.line("lower").unwrap(), bands.lower.as_slice(), 1e-12, "BOLL.lower");

    let output = registry.compute(&candles, &IndicatorRequest::new("MACD")).unwrap();
    let lines = macd(closes, 12, 26, 9);
    assert_series_eq(output.line("signal").unwrap(), lines.signal.as_slice(), 1e-12, "MACD.signal");

    let output = registry.compute(&candles, &IndicatorRequest::new("KDJ")).unwrap();
    let lines = kdj(candles.high(), candles.low(), closes, 9, 3, 3);
    assert_series_eq(output.line("j").unwrap(), lines.j.as_slice(), 1e-12, "KDJ.j");
}

#[test]
fn multi_line_names_are_ordered() {
    let registry = IndicatorRegistry::new();
    let candles = walk_candles(40);
    let names = |indicator: &str| -> Vec<String> {
        let output = registry.compute(&candles, &IndicatorRequest::new(indicator)).unwrap();
        output.as_multi().unwrap().line_names().into_iter().map(String::from).collect()
    };

    assert_eq!(names("BOLL"), ["upper", "middle", "lower"]);
    assert_eq!(names("MACD"), ["macd", "signal", "histogram"]);
    assert_eq!(names("KDJ"), ["k", "d", "j"]);
}

#[test]
fn requests_deserialize_from_persisted_json() {
    let json = r#"[
        {"name": "EMA", "params": {"period": 5}},
        {"name": "sar", "params": {"acceleration_step": 0.03, "acceleration_max": 0.3}},
        {"name": "Kama", "params": {"period": 8, "fast_period": 3, "slow_period": 20}},
        {"name": "OBV"}
    ]"#;
    let requests: Vec<IndicatorRequest> = serde_json::from_str(json).unwrap();
    let candles = candles_from_closes(&generate_sine(50.0, 4.0, 16, 60), 0.01);

    let outputs = IndicatorRegistry::new().compute_all(&candles, &requests).unwrap();
    assert_eq!(outputs.len(), 4);
    assert!(outputs.iter().all(|o| matches!(o, IndicatorOutput::Single(_))));

    let sar = outputs[1].as_single().unwrap();
    assert_eq!(sar[0], candles.low()[0]);
    let kama = outputs[2].as_single().unwrap();
    assert_eq!(kama.first_valid_index(), Some(8));
}

#[test]
fn output_serializes_nan_as_null() {
    let candles = candles_from_closes(&generate_linear(10.0, 1.0, 5), 0.0);
    let output = IndicatorRegistry::new()
        .compute(&candles, &IndicatorRequest::new("SMA").with_param("period", 3.0))
        .unwrap();
    assert_eq!(serde_json::to_string(&output).unwrap(), "[null,null,11.0,12.0,13.0]");
}

#[test]
fn invalid_parameter_values_degrade_to_nan() {
    let registry = IndicatorRegistry::new();
    let candles = walk_candles(50);

    for request in [
        IndicatorRequest::new("SMA").with_param("period", 0.0),
        IndicatorRequest::new("EMA").with_param("period", -4.0),
        IndicatorRequest::new("RSI").with_param("period", 2.5),
        IndicatorRequest::new("MACD").with_param("fast_period", 30.0),
        IndicatorRequest::new("KAMA").with_param("slow_period", 2.0),
        IndicatorRequest::new("BOLL").with_param("std_dev_multiplier", f64::NAN),
        IndicatorRequest::new("SAR").with_param("acceleration_max", 0.001),
    ] {
        let output = registry.compute(&candles, &request).unwrap();
        assert_eq!(output.len(), 50, "{}", request.name);
        assert!(output.is_all_nan(), "{} should be empty", request.name);
    }
}

#[test]
fn oversized_periods_do_not_panic() {
    let registry = IndicatorRegistry::new();
    let candles = walk_candles(50);

    let requests: Vec<IndicatorRequest> = serde_json::from_str(
        r#"[
            {"name": "SMA", "params": {"period": 1e20}},
            {"name": "EMA", "params": {"period": 1e20}},
            {"name": "BOLL", "params": {"period": 1e20}},
            {"name": "KAMA", "params": {"period": 1e20}},
            {"name": "KAMA", "params": {"slow_period": 1e20}},
            {"name": "MACD", "params": {"slow_period": 1e20, "signal_period": 1e20}},
            {"name": "RSI", "params": {"period": 1e20}},
            {"name": "KDJ", "params": {"period": 1e20, "k_smooth": 1e20, "d_smooth": 1e20}},
            {"name": "WR", "params": {"period": 1e20}},
            {"name": "CCI", "params": {"period": 1e20}},
            {"name": "ATR", "params": {"period": 1e20}}
        ]"#,
    )
    .unwrap();

    for request in &requests {
        let output = registry.compute(&candles, request).unwrap();
        assert_eq!(output.len(), 50, "{}", request.name);
        assert!(registry.min_periods(request).is_ok(), "{}", request.name);
    }

    let ema_output = registry.compute(&candles, &requests[1]).unwrap();
    let ema_line = ema_output.as_single().unwrap();
    assert!(ema_line.iter().all(|v| v.is_finite()));

    for index in [0, 2, 3, 6, 7, 8, 9, 10] {
        let output = registry.compute(&candles, &requests[index]).unwrap();
        assert!(output.is_all_nan(), "{}", requests[index].name);
    }
    assert_eq!(registry.min_periods(&requests[6]), Ok(usize::MAX));
}

#[test]
fn short_history_is_not_an_error() {
    let registry = IndicatorRegistry::new();
    let candles = walk_candles(3);
    for name in ["BOLL", "KAMA", "RSI", "ATR", "CCI", "WR"] {
        let output = registry.compute(&candles, &IndicatorRequest::new(name)).unwrap();
        assert_eq!(output.len(), 3);
        assert!(output.is_all_nan(), "{name}");
    }

    let empty = PriceSeries::new();
    for name in registry.names() {
        assert!(registry.compute(&empty, &IndicatorRequest::new(name)).unwrap().is_empty());
    }
}

#[test]
fn routing_errors() {
    let registry = IndicatorRegistry::new();
    let candles = walk_candles(10);

    assert_eq!(
        registry.compute(&candles, &IndicatorRequest::new("VWAP")),
        Err(IndicatorError::UnknownIndicator("VWAP".to_string()))
    );
    assert_eq!(
        registry.compute(&candles, &IndicatorRequest::new("OBV").with_param("period", 3.0)),
        Err(IndicatorError::UnknownParameter {
            indicator: "OBV".to_string(),
            name: "period".to_string(),
        })
    );

    let requests = [IndicatorRequest::new("SMA"), IndicatorRequest::new("nope")];
    assert!(registry.compute_all(&candles, &requests).is_err());
}

#[test]
fn nan_candles_propagate_or_reject() {
    let mut candles = walk_candles(30);
    let bad = PricePoint::new(30 * MINUTE_MS, 100.0, f64::INFINITY, 99.0, 100.0, 10.0);
    candles.push(bad);

    let request = IndicatorRequest::new("WR").with_param("period", 5.0);

    let output = IndicatorRegistry::new().compute(&candles, &request).unwrap();
    let wr = output.as_single().unwrap();
    assert!(wr[29].is_finite());
    assert!(wr[30].is_nan());

    let reject = IndicatorRegistry::new().with_nan_mode(NanMode::Reject);
    assert_eq!(
        reject.compute(&candles, &request),
        Err(IndicatorError::NonFiniteInput {
            index: 30,
            field: "high"
        })
    );
}

#[test]
fn reject_mode_checks_timestamp_order() {
    let mut candles = walk_candles(5);
    candles.push(PricePoint::new(0, 1.0, 1.0, 1.0, 1.0, 1.0));

    let reject = IndicatorRegistry::new().with_nan_mode(NanMode::Reject);
    assert_eq!(
        reject.compute(&candles, &IndicatorRequest::new("EMA")),
        Err(IndicatorError::NonIncreasingTimestamp { index: 5 })
    );
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(IndicatorRegistry::new());
    let candles = std::sync::Arc::new(walk_candles(60));

    let handles: Vec<_> = ["SMA", "EMA", "ATR", "CCI"]
        .into_iter()
        .map(|name| {
            let registry = std::sync::Arc::clone(&registry);
            let candles = std::sync::Arc::clone(&candles);
            std::thread::spawn(move || registry.compute(&candles, &IndicatorRequest::new(name)))
        })
        .collect();

    for handle in handles {
        let output = handle.join().unwrap().unwrap();
        assert_eq!(output.len(), 60);
    }
}

#[test]
fn identical_calls_are_bit_identical() {
    let registry = IndicatorRegistry::new();
    let candles = walk_candles(90);
    for name in registry.names() {
        let request = IndicatorRequest::new(name);
        let first = serde_json::to_string(&registry.compute(&candles, &request).unwrap()).unwrap();
        let second = serde_json::to_string(&registry.compute(&candles, &request).unwrap()).unwrap();
        assert_eq!(first, second, "{name}");
    }
}
