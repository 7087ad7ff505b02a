use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tilde_semver::{Constraint, Semver, Version};

fn bench_parse_versions(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.0.0-rc.1+exp.sha.5114f85",
        "20.04",
        "7",
        "1.0.0-x-y-z.--",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Version::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs: Vec<(Version, Version)> = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.11", "1.0.0-beta.2"),
        ("1.2.3+build.1", "1.2.3+build.2"),
    ]
    .iter()
    .map(|(a, b)| (Version::parse(a).unwrap(), Version::parse(b).unwrap()))
    .collect();

    c.bench_function("version_cmp", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(black_box(x).cmp(black_box(y)));
            }
        })
    });
}

fn bench_parse_constraints(c: &mut Criterion) {
    let constraints = ["~> 2.1", "~> 2.1.3", ">= 1.0.0", "< 2.0.0-rc.1", "1.2.3", "~1.0.0-beta.2"];

    c.bench_function("parse_constraints", |b| {
        b.iter(|| {
            for constraint in constraints {
                black_box(Constraint::parse(black_box(constraint)).ok());
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "~> 1.2"),
        ("1.2.3-beta", ">= 1.2.0"),
        ("2.4.5", "~> 2.4.1"),
        ("1.2.3", ">= 1.2.3, < 2.0.0"),
        ("1.0.0-beta.7", "~> 1.0.0-beta.2"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, constraint) in cases {
                black_box(Semver::satisfies(black_box(version), black_box(constraint)));
            }
        })
    });
}

fn bench_satisfy_best(c: &mut Criterion) {
    let versions: Vec<String> = (0..10)
        .flat_map(|major| (0..10).map(move |minor| format!("{}.{}.0", major, minor)))
        .collect();
    let constraints = ["~> 4.2", "< 4.8"];

    c.bench_function("satisfy_best", |b| {
        b.iter(|| {
            black_box(Constraint::satisfy_best(black_box(constraints), black_box(&versions)).ok());
        })
    });
}

criterion_group!(
    benches,
    bench_parse_versions,
    bench_compare,
    bench_parse_constraints,
    bench_satisfies,
    bench_satisfy_best
);
criterion_main!(benches);
