use criterion::{Criterion, black_box, criterion_group, criterion_main};
use timepicker::{AvailabilityConstraint, TimeValue, TimepickerOptions, normalize};

fn normalize_benchmark(c: &mut Criterion) {
    c.bench_function("normalize 12h", |b| b.iter(|| normalize(black_box("06:30 pm"))));
    c.bench_function("normalize hhmm", |b| b.iter(|| normalize(black_box("1815"))));
}

fn availability_benchmark(c: &mut Criterion) {
    let opts = TimepickerOptions::default();
    let constraint = AvailabilityConstraint::new()
        .with_min(TimeValue::parse("08:00", &opts).expect("valid min"))
        .with_max(TimeValue::parse("18:00", &opts).expect("valid max"))
        .with_minutes_gap(15);

    c.bench_function("check between bounds", |b| {
        b.iter(|| constraint.check(black_box("2:45 pm"), &opts))
    });

    let localized = TimepickerOptions::with_locale("ar-EG");
    c.bench_function("check localized digits", |b| {
        b.iter(|| constraint.check(black_box("١٤:٤٥"), &localized))
    });
}

criterion_group!(benches, normalize_benchmark, availability_benchmark);
criterion_main!(benches);
