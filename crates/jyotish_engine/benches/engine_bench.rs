use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_base::{ClockTime, LocalDate};
use jyotish_engine::{
    BirthData, calculate_birth_chart, calculate_panchang, find_muhurta, get_daily_recommendations,
};

fn kundali_bench(c: &mut Criterion) {
    let birth = BirthData {
        date: LocalDate::new(1985, 3, 15).unwrap(),
        time: ClockTime::new(6, 30).unwrap(),
        latitude: 28.61,
        longitude: 77.21,
        timezone: "Asia/Kolkata".to_string(),
    };

    c.bench_function("calculate_birth_chart", |b| {
        b.iter(|| calculate_birth_chart(black_box(&birth), black_box(2024)))
    });
}

fn panchang_bench(c: &mut Criterion) {
    let date = LocalDate::new(2024, 8, 25).unwrap();
    let panchang = calculate_panchang(date, 12.97, 77.59, "Asia/Kolkata");

    let mut group = c.benchmark_group("panchang");
    group.bench_function("calculate_panchang", |b| {
        b.iter(|| calculate_panchang(black_box(date), 12.97, 77.59, "Asia/Kolkata"))
    });
    group.bench_function("daily_recommendations", |b| {
        b.iter(|| get_daily_recommendations(black_box(&panchang)))
    });
    group.finish();
}

fn muhurta_bench(c: &mut Criterion) {
    let date = LocalDate::new(2024, 8, 25).unwrap();

    c.bench_function("find_muhurta", |b| {
        b.iter(|| find_muhurta(black_box("marriage"), black_box(date), 12.97, 77.59, "Asia/Kolkata"))
    });
}

criterion_group!(benches, kundali_bench, panchang_bench, muhurta_bench);
criterion_main!(benches);
