use std::hint::black_box;

use bsgreeks::report::scenario_analysis;
use bsgreeks::{OptionKind, OptionSpec, PricingEngine, ScenarioConfig};
use criterion::{Criterion, criterion_group, criterion_main};

fn atm_call() -> OptionSpec {
    OptionSpec::new(100.0, 100.0, 1.0, 0.05, 0.20, 0.0, OptionKind::Call)
        .expect("benchmark spec should be valid")
}

fn engine_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let spec = atm_call();

    group.bench_function("construct", |b| {
        b.iter(|| PricingEngine::new(black_box(spec)).expect("valid spec"))
    });

    let engine = PricingEngine::new(spec).expect("valid spec");
    group.bench_function("price", |b| b.iter(|| black_box(&engine).price()));
    group.bench_function("all_greeks", |b| b.iter(|| black_box(&engine).all_greeks()));

    // Strike strip: 41 strikes from 80 to 120, both kinds
    let strikes: Vec<f64> = (0..41).map(|i| 80.0 + i as f64).collect();
    group.bench_function("strike_strip_82", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for &k in &strikes {
                for kind in [OptionKind::Call, OptionKind::Put] {
                    let s = OptionSpec::new(100.0, k, 0.5, 0.03, 0.25, 0.01, kind)
                        .expect("valid spec");
                    total += PricingEngine::new(s).expect("valid spec").all_greeks().price;
                }
            }
            black_box(total)
        })
    });

    group.finish();
}

fn scenario_benchmarks(c: &mut Criterion) {
    let spec = atm_call();
    let config = ScenarioConfig::default();
    c.bench_function("scenario_analysis_default", |b| {
        b.iter(|| scenario_analysis(black_box(&spec), &config).expect("valid scenario"))
    });
}

criterion_group!(benches, engine_benchmarks, scenario_benchmarks);
criterion_main!(benches);
