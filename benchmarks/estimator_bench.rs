// benchmarks/estimator_bench.rs
use endless_gas_estimator::core::testutils::{print_report_overview, random_supplied_values};
use endless_gas_estimator::core::{estimate_action, EstimatorConfig, SuppliedValues, ACTION_CATALOG};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;
use chrono::Local;
use std::fs::File;
use std::io::Write;

#[tokio::test]
async fn benchmark_estimate_throughput() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let rounds = 20_000;
    let config = EstimatorConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let inputs: Vec<_> = ACTION_CATALOG
        .iter()
        .map(|action| (action, random_supplied_values(&mut rng, action)))
        .collect();
    log::info!("Starting throughput benchmark with {} actions, {} rounds", inputs.len(), rounds);

    let start = Instant::now();
    let mut total_gas = 0.0;
    for _ in 0..rounds {
        for (action, values) in &inputs {
            total_gas += estimate_action(action, values, &config).native.gas_units;
        }
    }
    let seconds = start.elapsed().as_secs_f64();
    let estimates = rounds * inputs.len();
    let per_second = if seconds > 0.0 { estimates as f64 / seconds } else { 0.0 };

    let summary = format!(
        "Estimates: {}\n\
        Total gas: {}\n\
        Duration: {:.3}s\n\
        Estimates/s: {:.2}\n",
        estimates, total_gas, seconds, per_second
    );
    println!("--- Estimate Throughput ---\n{}", summary);
    let reports: Vec<_> = inputs.iter().map(|(action, values)| estimate_action(action, values, &config)).collect();
    print_report_overview(&reports);

    let dir = tempfile::tempdir()?;
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let filename = dir.path().join(format!("benchmark_results_estimates_{}.log", timestamp));
    let mut file = File::create(&filename)?;
    file.write_all(summary.as_bytes())?;
    log::info!("Benchmark results saved to {}", filename.display());

    let expected_floor: f64 = ACTION_CATALOG.iter().map(|a| a.base_gas as f64).sum::<f64>() * rounds as f64;
    assert!(total_gas >= expected_floor, "Total gas below base gas floor: {} < {}", total_gas, expected_floor);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_see_identical_results() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = Arc::new(EstimatorConfig::default());
    let mut values = SuppliedValues::new();
    values.insert("contractSize".into(), "large".into());
    values.insert("hasConstructor".into(), "simple".into());
    let values = Arc::new(values);

    let action = ACTION_CATALOG.require("deploy-contract")?;
    let expected = estimate_action(action, &values, &config);

    let mut handles = Vec::new();
    for _ in 0..32 {
        let config = Arc::clone(&config);
        let values = Arc::clone(&values);
        handles.push(tokio::spawn(async move {
            ACTION_CATALOG
                .get("deploy-contract")
                .map(|action| estimate_action(action, &values, &config))
        }));
    }

    for handle in handles {
        let report = handle.await?.ok_or("deploy-contract missing from catalog")?;
        assert_eq!(report, expected);
    }
    // 500000 + 1000*3.5*100 + 1000*1*100
    assert_eq!(expected.native.gas_units, 950_000.0);
    Ok(())
}
